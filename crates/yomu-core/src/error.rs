#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The backend has no way to answer this kind of request
    #[error("Unsupported by dictionary backend: {0}")]
    Unsupported(&'static str),

    #[error("Dictionary backend error: {0}")]
    Backend(String),
}

impl LookupError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, LookupError::Unsupported(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
