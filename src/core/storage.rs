//! Persisted submission backup
//!
//! Submissions are kept as one JSON array under a single key. Every append
//! reads the whole array, pushes the new record and writes the array back.
//! Entries already in the array are kept verbatim, even ones this crate did
//! not write.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use super::submission::FormSubmission;

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,

    #[error("Failed to read '{key}' from storage")]
    Read { key: String },

    #[error("Failed to write '{key}' to storage")]
    Write { key: String },

    #[error("Stored submissions under '{key}' are not a JSON array")]
    NotAnArray { key: String },

    #[error("Invalid submission JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key/value persistence, shaped after the browser `Storage` API
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store used off the browser
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Append-only list of submissions stored under one key
pub struct SubmissionLog<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    key: &'a str,
}

impl<'a, S: KeyValueStore + ?Sized> SubmissionLog<'a, S> {
    pub fn new(store: &'a S, key: &'a str) -> Self {
        Self { store, key }
    }

    fn load_raw(&self) -> Result<Vec<Value>, StorageError> {
        let raw = match self.store.get_item(self.key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(Vec::new()),
        };

        match serde_json::from_str::<Value>(&raw)? {
            Value::Array(entries) => Ok(entries),
            _ => Err(StorageError::NotAnArray {
                key: self.key.to_string(),
            }),
        }
    }

    /// Append one record. Returns the number of stored entries afterwards.
    pub fn append(&self, submission: &FormSubmission) -> Result<usize, StorageError> {
        let mut entries = self.load_raw()?;
        entries.push(serde_json::to_value(submission)?);

        let json = serde_json::to_string(&entries)?;
        self.store.set_item(self.key, &json)?;

        Ok(entries.len())
    }

    /// Stored entries that decode as submissions; anything else is skipped.
    pub fn submissions(&self) -> Result<Vec<FormSubmission>, StorageError> {
        Ok(self
            .load_raw()?
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect())
    }

    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.load_raw()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
