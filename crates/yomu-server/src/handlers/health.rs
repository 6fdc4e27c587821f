use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let meta = state.search.metadata();
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "dictionary": {
            "words": meta.word_count,
            "characters": meta.character_count,
        },
        "ocr_loaded": state.ocr.is_initialized(),
    }))
}
