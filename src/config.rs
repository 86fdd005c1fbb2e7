use crate::error::{AdminError, Result};
use samurai_admin_common::config::{DEFAULT_API_URL, DEFAULT_LOGS_LIMIT};
use samurai_admin_common::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_API_URL: &str = "SAMURAI_API_URL";
pub const ENV_USER_ID: &str = "SAMURAI_USER_ID";
pub const ENV_PASSWORD: &str = "SAMURAI_PASSWORD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub user_id: Option<String>,
    pub logs_limit: u32,
    /// 通信のタイムアウト秒数。未設定なら待ち続ける
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            user_id: None,
            logs_limit: DEFAULT_LOGS_LIMIT,
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルがなければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdminError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("samurai-admin").join("config.json"))
    }

    /// 環境変数を優先して上書き
    pub fn with_env(mut self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok());
        self
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(user) = lookup(ENV_USER_ID).filter(|v| !v.trim().is_empty()) {
            self.user_id = Some(user.trim().to_string());
        }
    }

    pub fn user_id(&self) -> Result<&str> {
        self.user_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(AdminError::MissingUserId)
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(AdminError::Config(format!("URLの形式が不正です: {}", url)));
        }
        self.api_url = url.to_string();
        Ok(())
    }

    pub fn set_user_id(&mut self, user_id: String) -> Result<()> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(AdminError::Config("ユーザーIDが空です".into()));
        }
        self.user_id = Some(user_id.to_string());
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            logs_limit: self.logs_limit,
            ..ClientConfig::with_api_url(self.api_url.clone())
        }
    }
}
