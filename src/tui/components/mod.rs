//! # TUI Components
//!
//! All UI components for the terminal form.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields set by the parent:
//! - `TitleBar`: Top line with the app name and status
//! - `MergedView`: Read-only merged result
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SourceEditor`: Multi-line text area for one source
//! - `ButtonBar`: Copy / Clear Data buttons with click hit-testing
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into the
//! `App`. The parent copies what each component needs before rendering:
//!
//! ```rust,ignore
//! tui.button_bar.can_copy = app.can_copy();
//! tui.button_bar.copy_status = app.copy_status;
//! tui.button_bar.render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── merged_view.rs   (Read-only result)
//! ├── button_bar.rs    (Copy / Clear Data)
//! └── source_editor/   (Text area with cursor and scrolling)
//! ```

pub mod button_bar;
pub mod merged_view;
pub mod source_editor;
pub mod title_bar;

pub use button_bar::{ButtonBar, ButtonEvent};
pub use merged_view::MergedView;
pub use source_editor::{EditorEvent, SourceEditor};
pub use title_bar::TitleBar;
