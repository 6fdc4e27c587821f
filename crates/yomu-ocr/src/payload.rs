use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::OcrError;

/// Decoded image bytes plus the MIME type announced by the data URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime_type: Option<String>) -> Self {
        Self { mime_type, bytes }
    }

    /// Parse `data:<mime>;base64,<data>` or bare base64
    pub fn from_data_url(input: &str) -> Result<Self, OcrError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(OcrError::EmptyPayload);
        }

        let (mime_type, data) = match input.strip_prefix("data:") {
            Some(rest) => {
                let (header, data) = rest
                    .split_once(',')
                    .ok_or_else(|| OcrError::InvalidDataUrl("missing ',' separator".into()))?;
                let mime = header.strip_suffix(";base64").ok_or_else(|| {
                    OcrError::InvalidDataUrl(format!("expected base64 encoding, got '{header}'"))
                })?;
                let mime = (!mime.is_empty()).then(|| mime.to_string());
                (mime, data)
            }
            None => (None, input),
        };

        // Clipboard and canvas exports may wrap lines
        let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = STANDARD.decode(compact.as_bytes())?;

        if bytes.is_empty() {
            return Err(OcrError::EmptyPayload);
        }

        Ok(Self { mime_type, bytes })
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_url() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(payload.mime_type.as_deref(), Some("image/png"));
        assert_eq!(payload.bytes, b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn parses_bare_base64_with_line_breaks() {
        let payload = ImagePayload::from_data_url("aGVs\nbG8=").unwrap();
        assert_eq!(payload.mime_type, None);
        assert_eq!(payload.bytes, b"hello");
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(
            ImagePayload::from_data_url("   "),
            Err(OcrError::EmptyPayload)
        ));
        assert!(matches!(
            ImagePayload::from_data_url("data:image/png;base64,"),
            Err(OcrError::EmptyPayload)
        ));
    }

    #[test]
    fn rejects_non_base64_data_urls() {
        assert!(matches!(
            ImagePayload::from_data_url("data:text/plain,hello"),
            Err(OcrError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            ImagePayload::from_data_url("data:image/png;base64"),
            Err(OcrError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            ImagePayload::from_data_url("data:image/png;base64,@@@"),
            Err(OcrError::Decode(_))
        ));
    }
}
