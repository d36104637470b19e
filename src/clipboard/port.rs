use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while writing to the clipboard.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing display).
    Unavailable(String),
    /// The clipboard was opened but refused the text.
    CopyFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::CopyFailed(msg) => write!(f, "failed to copy to clipboard: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Returns the name of the clipboard backend.
    fn name(&self) -> &str;

    /// Copy text to the system clipboard.
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}
