use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ImagePayload, OcrError, Recognizer, RecognizerMetadata};

/// Client for a manga-ocr inference server
#[derive(Clone)]
pub struct RemoteRecognizer {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    image: String,
    mime_type: Option<&'a str>,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    text: Option<String>,
    error: Option<String>,
}

impl RemoteRecognizer {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, OcrError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        tracing::info!("OCR recognizer bound to {}", endpoint);
        Ok(Self { client, endpoint })
    }
}

#[async_trait::async_trait]
impl Recognizer for RemoteRecognizer {
    async fn recognize(&self, image: &ImagePayload) -> Result<String, OcrError> {
        let request = RecognizeRequest {
            image: image.to_base64(),
            mime_type: image.mime_type.as_deref(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Err(OcrError::Unavailable(format!(
                "{} is not ready",
                self.endpoint
            )));
        }

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(%status, "failed to read OCR error body: {e}");
                    format!("unreadable body: {e}")
                }
            };
            return Err(OcrError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| OcrError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(OcrError::InvalidResponse(error));
        }

        parsed
            .text
            .ok_or_else(|| OcrError::InvalidResponse("No text in response".to_string()))
    }

    fn metadata(&self) -> RecognizerMetadata {
        RecognizerMetadata {
            name: "manga-ocr".to_string(),
            location: self.endpoint.clone(),
        }
    }
}
