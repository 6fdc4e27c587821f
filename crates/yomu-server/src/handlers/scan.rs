use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use yomu_ocr::ImagePayload;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    /// `data:<mime>;base64,<data>` or bare base64
    #[serde(default)]
    pub image_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub message: &'static str,
    pub translated_text: String,
}

/// Run OCR on an uploaded image
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, ApiError> {
    let image_data = request
        .image_data
        .filter(|data| !data.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("No image data provided.".to_string()))?;

    let payload = ImagePayload::from_data_url(&image_data)?;
    tracing::info!(
        bytes = payload.bytes.len(),
        mime = payload.mime_type.as_deref().unwrap_or("unknown"),
        "received image"
    );

    let text = state.ocr.recognize(&payload).await?;
    tracing::info!("OCR extracted {} characters", text.chars().count());

    Ok(Json(ScanResponse {
        message: "File processed successfully",
        translated_text: text,
    }))
}
