use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use serde_json::Value;
use tower::ServiceExt;
use yomu_config::dictionary::DictionaryConfig;
use yomu_config::server::ServerConfig;
use yomu_core::dictionary::SearchOptions;
use yomu_lang_japanese::{SearchService, load_dictionary};
use yomu_ocr::{ImagePayload, OcrError, OcrHandle, Recognizer, RecognizerMetadata};

use crate::routes::create_router;
use crate::state::AppState;

/// Answers with a fixed text, or fails, and counts calls
pub struct FakeRecognizer {
    pub calls: AtomicUsize,
    pub reply: Option<String>,
}

impl FakeRecognizer {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reply: Some(text.to_string()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reply: None,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Recognizer for FakeRecognizer {
    async fn recognize(&self, _image: &ImagePayload) -> Result<String, OcrError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or_else(|| OcrError::ServiceError {
            status: 500,
            body: "model crashed".to_string(),
        })
    }

    fn metadata(&self) -> RecognizerMetadata {
        RecognizerMetadata {
            name: "fake".to_string(),
            location: "memory".to_string(),
        }
    }
}

fn search_service() -> SearchService {
    let dictionary = load_dictionary(&DictionaryConfig::default()).unwrap();
    SearchService::new(Arc::new(dictionary), SearchOptions::default())
}

pub fn router_with(server: &ServerConfig, ocr: OcrHandle) -> anyhow::Result<Router> {
    let state = AppState::from_parts(search_service(), ocr);
    create_router(state, server)
}

pub fn app_with_ocr(ocr: OcrHandle) -> Router {
    router_with(&ServerConfig::default(), ocr).unwrap()
}

pub fn app_with_recognizer(recognizer: Arc<FakeRecognizer>) -> Router {
    app_with_ocr(OcrHandle::ready(recognizer))
}

pub fn app() -> Router {
    app_with_recognizer(FakeRecognizer::replying(""))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
