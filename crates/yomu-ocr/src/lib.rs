mod handle;
mod payload;
mod recognizer;
mod remote;

pub use handle::OcrHandle;
pub use payload::ImagePayload;
pub use recognizer::{OcrError, Recognizer, RecognizerMetadata};
pub use remote::RemoteRecognizer;
