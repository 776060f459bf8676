use crate::core::{KeyValueStore, StorageError};
use web_sys as web;

/// `window.localStorage` behind the fallible store interface.
///
/// Private browsing and sandboxed iframes can throw on access; every such
/// case surfaces as a `StorageError` and the caller treats it as "absent".
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

fn local_storage() -> Result<web::Storage, StorageError> {
    web::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
