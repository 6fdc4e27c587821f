use std::sync::Arc;
use std::time::Duration;

use yomu_config::Config;
use yomu_config::ocr::OcrConfig;
use yomu_core::dictionary::{Dictionary, SearchOptions};
use yomu_lang_japanese::SearchService;
use yomu_ocr::{OcrHandle, Recognizer, RemoteRecognizer};

/// Shared state for the handlers
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
    pub ocr: Arc<OcrHandle>,
}

impl AppState {
    pub fn new(config: &Config, dictionary: Arc<dyn Dictionary>) -> Self {
        let options = SearchOptions {
            max_results: config.search.max_results,
        };
        let search =
            SearchService::new(dictionary, options).with_policy(config.search.enrichment.into());

        Self::from_parts(search, ocr_handle(&config.ocr))
    }

    pub fn from_parts(search: SearchService, ocr: OcrHandle) -> Self {
        Self {
            search: Arc::new(search),
            ocr: Arc::new(ocr),
        }
    }
}

fn ocr_handle(config: &OcrConfig) -> OcrHandle {
    if !config.enabled {
        tracing::info!("OCR disabled by configuration");
        return OcrHandle::disabled();
    }

    let endpoint = config.endpoint.clone();
    let timeout = Duration::from_secs(config.timeout_seconds);
    OcrHandle::lazy(move || {
        let recognizer = RemoteRecognizer::new(endpoint.clone(), timeout)?;
        Ok(Arc::new(recognizer) as Arc<dyn Recognizer>)
    })
}
