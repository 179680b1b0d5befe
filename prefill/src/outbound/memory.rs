//! In-memory content storage adapter.
//!
//! Backs the [`ContentStorage`] port with a mutex-guarded map. Intended for
//! integration tests and the demo binary; per-type state can be mutated
//! freely, including marking a type's schema as missing.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{ContentStorage, ContentStorageError};
use crate::domain::{ContentTypeMeta, ContentTypeName};

#[derive(Debug, Clone, Copy, Default)]
struct TypeState {
    record_count: u64,
    singleton: bool,
    schema_missing: bool,
}

/// Hash-map backed [`ContentStorage`] implementation.
#[derive(Debug, Default)]
pub struct InMemoryContentStorage {
    state: Mutex<HashMap<String, TypeState>>,
}

impl InMemoryContentStorage {
    /// Registers a content type with zero records.
    pub fn insert_content_type(&self, name: &str, singleton: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.insert(
                name.to_owned(),
                TypeState {
                    record_count: 0,
                    singleton,
                    schema_missing: false,
                },
            );
        }
    }

    /// Sets the existing-record count for a registered content type.
    pub fn set_record_count(&self, name: &str, record_count: u64) {
        if let Ok(mut state) = self.state.lock()
            && let Some(entry) = state.get_mut(name)
        {
            entry.record_count = record_count;
        }
    }

    /// Marks a registered content type's backing store as not provisioned.
    pub fn mark_schema_missing(&self, name: &str) {
        if let Ok(mut state) = self.state.lock()
            && let Some(entry) = state.get_mut(name)
        {
            entry.schema_missing = true;
        }
    }

    fn lookup(&self, name: &ContentTypeName) -> Result<TypeState, ContentStorageError> {
        let state = self
            .state
            .lock()
            .map_err(|_| ContentStorageError::connection("storage lock poisoned"))?;
        let entry = state
            .get(name.as_str())
            .ok_or_else(|| ContentStorageError::unknown_content_type(name.as_str()))?;
        Ok(*entry)
    }
}

#[async_trait]
impl ContentStorage for InMemoryContentStorage {
    async fn count_records(
        &self,
        content_type: &ContentTypeName,
    ) -> Result<u64, ContentStorageError> {
        let entry = self.lookup(content_type)?;
        if entry.schema_missing {
            return Err(ContentStorageError::schema_missing(content_type.as_str()));
        }
        Ok(entry.record_count)
    }

    async fn content_type_meta(
        &self,
        content_type: &ContentTypeName,
    ) -> Result<ContentTypeMeta, ContentStorageError> {
        let entry = self.lookup(content_type)?;
        Ok(ContentTypeMeta::new(entry.singleton))
    }
}
