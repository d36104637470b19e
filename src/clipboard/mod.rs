pub mod arboard;
pub mod port;

pub use self::arboard::ArboardClipboard;
pub use port::{Clipboard, ClipboardError};
