//! # Persistence Adapter
//!
//! Best-effort bridge between the two input buffers and a [`KeyValueStore`].
//! Reads fall back to an empty string, writes and deletes are fire-and-forget.
//! Every failure is logged here and never reaches the caller.

use log::{debug, info, warn};

use crate::core::state::BufferId;
use crate::core::storage::KeyValueStore;

pub struct Persistence {
    store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load one buffer. Missing or unreadable entries are empty.
    pub fn load(&self, id: BufferId) -> String {
        match self.store.get_item(id.storage_key()) {
            Ok(Some(value)) => {
                debug!("Loaded {} ({} bytes)", id.id(), value.len());
                value
            }
            Ok(None) => String::new(),
            Err(e) => {
                warn!("Failed to read {} from storage: {}", id.id(), e);
                String::new()
            }
        }
    }

    /// Load both buffers, in `(source1, source2)` order.
    pub fn load_all(&self) -> (String, String) {
        (self.load(BufferId::Source1), self.load(BufferId::Source2))
    }

    pub fn save(&mut self, id: BufferId, value: &str) {
        if let Err(e) = self.store.set_item(id.storage_key(), value) {
            warn!("Failed to write {} to storage: {}", id.id(), e);
        }
    }

    /// Delete both entries. Each delete is attempted even if the other fails.
    pub fn clear(&mut self) {
        for id in BufferId::ALL {
            if let Err(e) = self.store.remove_item(id.storage_key()) {
                warn!("Failed to remove {} from storage: {}", id.id(), e);
            }
        }
        info!("Cleared persisted sources");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::test_support::{FailingStore, SharedStore};

    #[test]
    fn test_load_missing_entries_are_empty() {
        let persistence = Persistence::new(Box::new(MemoryStore::new()));
        assert_eq!(persistence.load_all(), (String::new(), String::new()));
    }

    #[test]
    fn test_save_then_load() {
        let mut persistence = Persistence::new(Box::new(MemoryStore::new()));
        persistence.save(BufferId::Source1, "left");
        persistence.save(BufferId::Source2, "right");
        assert_eq!(
            persistence.load_all(),
            ("left".to_string(), "right".to_string())
        );
    }

    #[test]
    fn test_save_uses_storage_keys() {
        let shared = SharedStore::default();
        let mut persistence = Persistence::new(Box::new(shared.clone()));
        persistence.save(BufferId::Source2, "value");

        assert_eq!(shared.get("textMerger-text2").as_deref(), Some("value"));
        assert_eq!(shared.get("textMerger-text1"), None);
    }

    #[test]
    fn test_read_failure_yields_empty_buffers() {
        let persistence = Persistence::new(Box::new(FailingStore));
        assert_eq!(persistence.load_all(), (String::new(), String::new()));
    }

    #[test]
    fn test_write_and_delete_failures_are_swallowed() {
        let mut persistence = Persistence::new(Box::new(FailingStore));
        persistence.save(BufferId::Source1, "ignored");
        persistence.clear();
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let shared = SharedStore::default();
        let mut persistence = Persistence::new(Box::new(shared.clone()));
        persistence.save(BufferId::Source1, "a");
        persistence.save(BufferId::Source2, "b");

        persistence.clear();

        assert_eq!(shared.get("textMerger-text1"), None);
        assert_eq!(shared.get("textMerger-text2"), None);
        assert_eq!(persistence.load_all(), (String::new(), String::new()));
    }
}
