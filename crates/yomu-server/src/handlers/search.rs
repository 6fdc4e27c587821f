use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use yomu_core::script::single_char;
use yomu_lang_japanese::{GeneralSearchResponse, KanjiInfo};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GeneralSearchQuery {
    #[serde(default)]
    pub query: String,
}

pub async fn kanji(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<KanjiInfo>, ApiError> {
    if single_char(&term).is_none() {
        return Err(ApiError::BadRequest(
            "Please provide a single Kanji character.".to_string(),
        ));
    }

    let search = state.search.clone();
    let lookup_term = term.clone();
    let info = tokio::task::spawn_blocking(move || search.kanji(&lookup_term)).await??;

    info.map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Kanji '{term}' not found.")))
}

/// Words, kana or English; single kanji also get a detail record
pub async fn general(
    State(state): State<AppState>,
    Json(body): Json<GeneralSearchQuery>,
) -> Result<Json<GeneralSearchResponse>, ApiError> {
    if body.query.trim().is_empty() {
        return Ok(Json(GeneralSearchResponse::default()));
    }

    let search = state.search.clone();
    let response = tokio::task::spawn_blocking(move || search.search(&body.query)).await?;
    Ok(Json(response))
}
