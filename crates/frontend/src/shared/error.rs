use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no window object")]
    NoWindow,
    #[error("no document object")]
    NoDocument,
    #[error("no body element")]
    NoBody,
    #[error("clipboard API is not available")]
    ClipboardUnavailable,
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
}
