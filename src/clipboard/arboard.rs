//! Cross-platform clipboard adapter using arboard.
//!
//! Works on Windows, macOS and Linux (X11/Wayland).

use async_trait::async_trait;
use log::debug;

use super::port::{Clipboard, ClipboardError};

pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    fn name(&self) -> &str {
        "arboard"
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        let len = text.len();

        // arboard blocks, so keep it off the runtime threads
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("task join error: {e}")))??;

        debug!("Copied {} bytes via arboard", len);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_name() {
        assert_eq!(ArboardClipboard::new().name(), "arboard");
    }

    #[test]
    fn test_error_display() {
        let err = ClipboardError::Unavailable("no display".to_string());
        assert_eq!(err.to_string(), "clipboard unavailable: no display");
    }
}
