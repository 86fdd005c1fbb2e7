//! Web API クライアント
//!
//! すべての操作は1つのエンドポイントへのPOSTで、本文の `action` で振り分ける。
//! 認証情報（token / userId）はここで一括して付与する。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::session::{SessionStore, StorageBackend};
use crate::types::{
    EventsData, LogsData, Session, Settings, SettingsData, TargetItemsData,
};

/// 通信失敗時に表示する汎用メッセージ
pub const COMMUNICATION_FAILED: &str = "サーバーとの通信に失敗しました。";

/// リモートに送るコマンド
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    Login { user_id: String, password: String },
    GetSettings,
    UpdateSettings { settings: Settings },
    GetEvents { future_only: bool },
    GetLogs { limit: u32 },
    GetTargetItems,
    /// 改行またはカンマ区切りの商品管理番号（分割はサーバー側）
    BulkAddTargetItems { item_numbers: String },
    DeleteTargetItem { row_index: u32 },
    RunManual,
}

impl Command {
    pub fn action(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::GetSettings => "getSettings",
            Command::UpdateSettings { .. } => "updateSettings",
            Command::GetEvents { .. } => "getEvents",
            Command::GetLogs { .. } => "getLogs",
            Command::GetTargetItems => "getTargetItems",
            Command::BulkAddTargetItems { .. } => "bulkAddTargetItems",
            Command::DeleteTargetItem { .. } => "deleteTargetItem",
            Command::RunManual => "runManual",
        }
    }
}

/// リモートの応答 `{success, data?, message?}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// メッセージ（なければ既定文言）
    pub fn message_or(&self, fallback: &str) -> String {
        match self.message.as_deref() {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// `success:false` をアプリケーションエラーに変換
    pub fn into_result(self, fallback: &str) -> Result<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(Error::Application(self.message_or(fallback)))
        }
    }

    /// `data` 必須の操作用。成功でも `data` がなければ失敗として扱う
    pub fn into_data(self, fallback: &str) -> Result<T> {
        self.into_result(fallback)?
            .ok_or_else(|| Error::Application(fallback.to_string()))
    }
}

/// HTTP送信を担う層
///
/// 成功時は応答本文をそのまま返す。ステータスコードは見ない。
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, url: &str, body: String) -> Result<String>;
}

/// Web API クライアント
#[derive(Debug, Clone)]
pub struct ApiClient<T, B> {
    transport: T,
    session: SessionStore<B>,
    api_url: String,
}

impl<T: Transport, B: StorageBackend> ApiClient<T, B> {
    pub fn new(transport: T, session: SessionStore<B>, api_url: impl Into<String>) -> Self {
        Self {
            transport,
            session,
            api_url: api_url.into(),
        }
    }

    pub fn session(&self) -> &SessionStore<B> {
        &self.session
    }

    /// 送信本文を組み立てる（セッションがあれば token / userId を付与）
    pub fn build_payload(&self, command: &Command) -> Result<Value> {
        let mut payload = serde_json::to_value(command)?;
        if let (Some(session), Some(fields)) = (self.session.get(), payload.as_object_mut()) {
            fields.insert("token".to_string(), Value::String(session.token));
            fields.insert("userId".to_string(), Value::String(session.user_id));
        }
        Ok(payload)
    }

    /// コマンドを送信し、応答を正規化して返す
    ///
    /// 通信層の失敗は呼び出し元に伝えず、ログに残して汎用の失敗応答にする
    pub async fn request(&self, command: &Command) -> ApiResponse<Value> {
        match self.dispatch(command).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(action = command.action(), "API error: {}", e);
                ApiResponse::failure(COMMUNICATION_FAILED)
            }
        }
    }

    async fn dispatch(&self, command: &Command) -> Result<ApiResponse<Value>> {
        let payload = self.build_payload(command)?;
        tracing::debug!(action = command.action(), "dispatching request");
        let body = self.transport.post(&self.api_url, payload.to_string()).await?;
        let response = serde_json::from_str(&body)?;
        Ok(response)
    }

    /// 応答の `data` を型付きで受け取る
    pub async fn call<D: DeserializeOwned>(&self, command: &Command) -> ApiResponse<D> {
        let response = self.request(command).await;
        let data = match response.data {
            Some(value) if !value.is_null() => match serde_json::from_value(value) {
                Ok(data) => Some(data),
                Err(e) => {
                    tracing::warn!(action = command.action(), "unexpected response data: {}", e);
                    return ApiResponse::failure(COMMUNICATION_FAILED);
                }
            },
            _ => None,
        };
        ApiResponse {
            success: response.success,
            data,
            message: response.message,
        }
    }

    pub async fn login(&self, user_id: &str, password: &str) -> ApiResponse<Session> {
        self.call(&Command::Login {
            user_id: user_id.to_string(),
            password: password.to_string(),
        })
        .await
    }

    pub async fn get_settings(&self) -> ApiResponse<SettingsData> {
        self.call(&Command::GetSettings).await
    }

    pub async fn update_settings(&self, settings: Settings) -> ApiResponse<Value> {
        self.request(&Command::UpdateSettings { settings }).await
    }

    pub async fn get_events(&self, future_only: bool) -> ApiResponse<EventsData> {
        self.call(&Command::GetEvents { future_only }).await
    }

    pub async fn get_logs(&self, limit: u32) -> ApiResponse<LogsData> {
        self.call(&Command::GetLogs { limit }).await
    }

    pub async fn get_target_items(&self) -> ApiResponse<TargetItemsData> {
        self.call(&Command::GetTargetItems).await
    }

    pub async fn bulk_add_target_items(&self, item_numbers: &str) -> ApiResponse<Value> {
        self.request(&Command::BulkAddTargetItems {
            item_numbers: item_numbers.to_string(),
        })
        .await
    }

    pub async fn delete_target_item(&self, row_index: u32) -> ApiResponse<Value> {
        self.request(&Command::DeleteTargetItem { row_index }).await
    }

    pub async fn run_manual(&self) -> ApiResponse<Value> {
        self.request(&Command::RunManual).await
    }
}
