//! セッション管理
//!
//! ログインセッションを1件だけ保持する。保存先はバックエンドで差し替える
//! （ブラウザでは sessionStorage、CLIではプロセス内メモリ）。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;
use crate::types::Session;

/// キーと文字列値を保持するストレージ
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str);
}

/// プロセス内メモリのストレージ
///
/// クローンは同じ中身を共有する
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// セッションストア
#[derive(Debug, Clone)]
pub struct SessionStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// 既存のセッションを上書き保存
    pub fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string(session)?;
        self.backend.set_item(&self.key, &json)
    }

    /// 保存内容が壊れている場合も「未ログイン」として扱う
    pub fn get(&self) -> Option<Session> {
        let raw = self.backend.get_item(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("discarding malformed session record: {}", e);
                None
            }
        }
    }

    pub fn clear(&self) {
        self.backend.remove_item(&self.key);
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some_and(|session| session.is_active())
    }
}
