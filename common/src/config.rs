//! クライアント設定

/// 本番のWeb APIエンドポイント
pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbwL_odLRjbnirbyP18mtvOX5Uks7T-Gcc5uuyGlbOYtOjF5Dn6mv9gspiVcqEqK4g1l/exec";

/// セッションを保存するストレージキー
pub const SESSION_KEY: &str = "samurai_session";

/// ログ取得件数の既定値
pub const DEFAULT_LOGS_LIMIT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub logs_limit: u32,
    pub events_future_only: bool,
    pub session_key: String,
}

impl ClientConfig {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            logs_limit: DEFAULT_LOGS_LIMIT,
            events_future_only: true,
            session_key: SESSION_KEY.to_string(),
        }
    }
}
