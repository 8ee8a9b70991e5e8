//! Persistent store adapter.
//!
//! `KeyValueStore` is the seam to the durable backend (`localStorage` on the
//! web, an in-memory map in tests). `Store` layers JSON on top of it and
//! swallows every backend failure: reads of missing or malformed values come
//! back as `None`, failed writes are logged and reported as `false`. Callers
//! keep their in-memory copy authoritative either way.

use fnv::FnvHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous, origin-scoped string store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub struct Store<B> {
    backend: B,
}

impl<B: KeyValueStore> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("[store] read {} failed: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("[store] ignoring malformed {}: {}", key, e);
                None
            }
        }
    }

    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(StoreError::from)
            .and_then(|json| self.backend.set_item(key, &json));
        match result {
            Ok(()) => true,
            Err(e) => {
                log::error!("[store] write {} failed: {}", key, e);
                false
            }
        }
    }
}

/// In-memory backend. `set_failing(true)` makes every write fail the way a
/// full or disabled `localStorage` does.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<FnvHashMap<String, String>>,
    failing: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failing.get() {
            return Err(StoreError::Backend("quota exceeded".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}
