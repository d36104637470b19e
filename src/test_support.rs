//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::core::storage::{KeyValueStore, StorageError};

/// A store whose every operation fails.
pub struct FailingStore;

impl FailingStore {
    fn error() -> StorageError {
        StorageError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "storage disabled"))
    }
}

impl KeyValueStore for FailingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(Self::error())
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::error())
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(Self::error())
    }
}

/// An in-memory store that can be inspected after being boxed away.
#[derive(Clone, Default)]
pub struct SharedStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl SharedStore {
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for SharedStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Records every copied text; optionally rejects all copies.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
    pub reject: bool,
}

impl RecordingClipboard {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    pub fn copies(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    fn name(&self) -> &str {
        "recording"
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if self.reject {
            return Err(ClipboardError::CopyFailed("permission denied".to_string()));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
