use web_sys::{window, Storage};
use wheel_shared::storage::{ConfigStore, StoreError};

pub fn get_local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// `window.localStorage`, looked up on every access so a page that starts
/// with storage blocked can still save once the browser allows it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStore;

impl ConfigStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        get_local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = get_local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
