use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::{ImagePayload, OcrError, Recognizer};

type RecognizerFactory = Box<dyn Fn() -> Result<Arc<dyn Recognizer>, OcrError> + Send + Sync>;

/// Process-wide recognizer, built on first use and shared read-only afterwards.
///
/// A failed initialization leaves the handle empty so the next request retries.
pub struct OcrHandle {
    recognizer: OnceCell<Arc<dyn Recognizer>>,
    factory: RecognizerFactory,
}

impl OcrHandle {
    pub fn lazy<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn Recognizer>, OcrError> + Send + Sync + 'static,
    {
        Self {
            recognizer: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    /// Handle around an already constructed recognizer
    pub fn ready(recognizer: Arc<dyn Recognizer>) -> Self {
        let for_factory = recognizer.clone();
        Self {
            recognizer: OnceCell::new_with(Some(recognizer)),
            factory: Box::new(move || Ok(for_factory.clone())),
        }
    }

    pub fn disabled() -> Self {
        Self::lazy(|| Err(OcrError::Unavailable("OCR is disabled".to_string())))
    }

    pub fn is_initialized(&self) -> bool {
        self.recognizer.initialized()
    }

    pub async fn get(&self) -> Result<Arc<dyn Recognizer>, OcrError> {
        self.recognizer
            .get_or_try_init(|| async {
                let recognizer = (self.factory)()?;
                let meta = recognizer.metadata();
                tracing::info!("OCR recognizer initialized: {} ({})", meta.name, meta.location);
                Ok::<_, OcrError>(recognizer)
            })
            .await
            .cloned()
    }

    pub async fn recognize(&self, image: &ImagePayload) -> Result<String, OcrError> {
        let recognizer = self.get().await?;
        recognizer.recognize(image).await
    }
}
