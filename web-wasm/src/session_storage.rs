//! sessionStorage をセッションの保存先にする
//!
//! タブを閉じるとセッションも消える

use gloo::storage::{SessionStorage, Storage};
use samurai_admin_common::{Error, Result, StorageBackend};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

impl StorageBackend for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        SessionStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) {
        let _ = SessionStorage::raw().remove_item(key);
    }
}
