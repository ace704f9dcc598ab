use thiserror::Error;

/// Ошибки сетевого шага сканирования
///
/// Both kinds end the interaction the same way in the popup; the split
/// exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Request could not be built, sent or its body read
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body is not JSON, not an object, or misses required fields
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ScanError {
    fn from(e: serde_json::Error) -> Self {
        ScanError::Decode(e.to_string())
    }
}
