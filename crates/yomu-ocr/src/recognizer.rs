/// Text recognition provider interface
#[async_trait::async_trait]
pub trait Recognizer: Send + Sync {
    /// Recognize the text in a single image
    async fn recognize(&self, image: &crate::ImagePayload) -> Result<String, OcrError>;

    /// Provider metadata
    fn metadata(&self) -> RecognizerMetadata;
}

#[derive(Debug, Clone)]
pub struct RecognizerMetadata {
    pub name: String,
    pub location: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("No image data provided")]
    EmptyPayload,

    #[error("Invalid image data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Base64 decoding failed: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("OCR model unavailable: {0}")]
    Unavailable(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("OCR service returned HTTP {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Invalid OCR response: {0}")]
    InvalidResponse(String),
}

impl OcrError {
    /// Errors caused by the request payload rather than the model
    pub fn is_client_error(&self) -> bool {
        matches!(self, OcrError::EmptyPayload)
    }
}
