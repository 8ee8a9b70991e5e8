use odam_core::{KeyValueStore, StoreError};
use web_sys as web;

/// `window.localStorage` behind the core store trait. Storage can be disabled
/// (privacy modes, sandboxed frames), in which case every call reports
/// `Unavailable` and the widget runs on in-memory records only.
pub struct LocalStorage {
    storage: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok()).flatten();
        if storage.is_none() {
            log::warn!("[storage] localStorage unavailable; stats will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web::Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}
