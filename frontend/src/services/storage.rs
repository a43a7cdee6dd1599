use gloo::storage::{LocalStorage, Storage};
use shared::KeyValueStore;

/// Browser local storage as a [`KeyValueStore`]. Values are kept verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| format!("Failed to write {}: {:?}", key, e))
    }
}
