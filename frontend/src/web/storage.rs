//! LocalStorage wrapper.
//!
//! Thin layer over `web_sys::Storage`; every failure mode collapses to
//! `None`/`false` because storage access is best-effort on the client.

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Stored value for `key`, or `None` when absent or unreadable.
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Stores `value` under `key`; returns whether the write succeeded.
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// Removes `key`; returns whether the delete succeeded.
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
