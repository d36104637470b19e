//! # Application State
//!
//! Core form state. Domain data only; focus, cursors and layout live in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── source1: String          // first input buffer
//! ├── source2: String          // second input buffer
//! ├── copy_status: bool        // true shortly after a successful copy
//! ├── copy_generation: u64     // stamps each successful copy
//! └── status_message: String   // title bar text
//! ```
//!
//! The merged result is never stored. `merged()` derives it on demand, so it
//! cannot drift from the buffers.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::merge::merge;

/// Storage key for the first source.
pub const SOURCE1_KEY: &str = "textMerger-text1";
/// Storage key for the second source.
pub const SOURCE2_KEY: &str = "textMerger-text2";

/// Identifies one of the two input buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferId {
    Source1,
    Source2,
}

impl BufferId {
    pub const ALL: [BufferId; 2] = [BufferId::Source1, BufferId::Source2];

    /// Stable identifier used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            BufferId::Source1 => "source1",
            BufferId::Source2 => "source2",
        }
    }

    /// Key of the persisted entry.
    pub fn storage_key(&self) -> &'static str {
        match self {
            BufferId::Source1 => SOURCE1_KEY,
            BufferId::Source2 => SOURCE2_KEY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BufferId::Source1 => "Source 1",
            BufferId::Source2 => "Source 2",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            BufferId::Source1 => "Enter first piece of text...",
            BufferId::Source2 => "Enter second piece of text...",
        }
    }

    pub fn other(&self) -> BufferId {
        match self {
            BufferId::Source1 => BufferId::Source2,
            BufferId::Source2 => BufferId::Source1,
        }
    }
}

#[derive(Debug, Default)]
pub struct App {
    pub source1: String,
    pub source2: String,
    pub copy_status: bool,
    pub copy_generation: u64,
    /// Bumped by Clear Data. Clipboard results requested before the last
    /// clear are dropped.
    pub clear_epoch: u64,
    pub status_message: String,
}

impl App {
    pub fn new(source1: String, source2: String) -> Self {
        Self {
            source1,
            source2,
            ..Default::default()
        }
    }

    pub fn buffer(&self, id: BufferId) -> &str {
        match id {
            BufferId::Source1 => &self.source1,
            BufferId::Source2 => &self.source2,
        }
    }

    pub(crate) fn buffer_mut(&mut self, id: BufferId) -> &mut String {
        match id {
            BufferId::Source1 => &mut self.source1,
            BufferId::Source2 => &mut self.source2,
        }
    }

    /// The merged view of both buffers.
    pub fn merged(&self) -> String {
        merge(&self.source1, &self.source2)
    }

    /// Copy is only offered when there is something to copy.
    pub fn can_copy(&self) -> bool {
        !self.source1.is_empty() || !self.source2.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(String::new(), String::new());
        assert!(app.source1.is_empty());
        assert!(app.source2.is_empty());
        assert!(!app.copy_status);
        assert_eq!(app.copy_generation, 0);
        assert_eq!(app.merged(), "");
    }

    #[test]
    fn test_merged_tracks_buffers() {
        let mut app = App::new("a\nb".to_string(), "x".to_string());
        assert_eq!(app.merged(), "a - x\nb - ");

        app.source2.push_str("\ny");
        assert_eq!(app.merged(), "a - x\nb - y");
    }

    #[test]
    fn test_merged_is_stable_without_edits() {
        let app = App::new("one".to_string(), "two".to_string());
        assert_eq!(app.merged(), app.merged());
    }

    #[test]
    fn test_can_copy_matches_non_empty_merge() {
        assert!(!App::new(String::new(), String::new()).can_copy());
        assert!(App::new("a".to_string(), String::new()).can_copy());
        assert!(App::new(String::new(), "b".to_string()).can_copy());
    }

    #[test]
    fn test_buffer_ids() {
        assert_eq!(BufferId::Source1.storage_key(), "textMerger-text1");
        assert_eq!(BufferId::Source2.storage_key(), "textMerger-text2");
        assert_eq!(BufferId::Source1.id(), "source1");
        assert_eq!(BufferId::Source2.label(), "Source 2");
        assert_eq!(BufferId::Source1.other(), BufferId::Source2);
    }
}
