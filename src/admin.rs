//! CLIの各コマンドの処理
//!
//! セッションはプロセス内のメモリにだけ保持し、終了とともに破棄する。

use crate::error::{AdminError, Result};
use crate::output;
use samurai_admin_common::config::SESSION_KEY;
use samurai_admin_common::controller::{
    EVENTS_LOAD_FAILED, ITEMS_ADD_FAILED, ITEMS_LOAD_FAILED, ITEMS_REQUIRED, ITEM_DELETE_FAILED,
    LOGIN_FAILED, LOGIN_REQUIRED, LOGS_LOAD_FAILED, RUN_FAILED, RUN_SUCCEEDED,
    SETTINGS_LOAD_FAILED, SETTINGS_SAVED, SETTINGS_SAVE_FAILED,
};
use samurai_admin_common::view::{count_item_numbers, ItemRow, LogRow};
use samurai_admin_common::{
    ApiClient, ApiResponse, ClientConfig, Clock, EventsView, MemoryStorage, Session,
    SessionStore, SettingsData, SettingsForm, StatusCards, Transport,
};

/// `settings set` で指定された変更（None の項目は現在値のまま）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsChanges {
    pub mode: Option<String>,
    pub dry_run: Option<bool>,
    pub max_items: Option<String>,
    pub notify_slack: Option<bool>,
    pub notify_email: Option<bool>,
}

impl SettingsChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, form: &mut SettingsForm) {
        if let Some(mode) = &self.mode {
            form.mode = mode.clone();
        }
        if let Some(dry_run) = self.dry_run {
            form.dry_run = dry_run;
        }
        if let Some(max_items) = &self.max_items {
            form.max_items_per_run = max_items.clone();
        }
        if let Some(notify_slack) = self.notify_slack {
            form.notify_slack = notify_slack;
        }
        if let Some(notify_email) = self.notify_email {
            form.notify_email = notify_email;
        }
    }
}

/// `success:false` や通信失敗を表示用のエラーに変換
fn remote_data<D>(response: ApiResponse<D>, fallback: &str) -> Result<D> {
    response
        .into_data(fallback)
        .map_err(|e| AdminError::Remote(e.user_message()))
}

/// 成功時はサーバーのメッセージ（なければ既定文言）
fn remote_message<D>(response: ApiResponse<D>, success: &str, fallback: &str) -> Result<String> {
    if response.success {
        Ok(response.message_or(success))
    } else {
        Err(AdminError::Remote(response.message_or(fallback)))
    }
}

pub struct Admin<T, C> {
    client: ApiClient<T, MemoryStorage>,
    clock: C,
    config: ClientConfig,
}

impl<T: Transport, C: Clock> Admin<T, C> {
    pub fn new(transport: T, clock: C, config: ClientConfig) -> Self {
        let session = SessionStore::new(MemoryStorage::new(), SESSION_KEY);
        let client = ApiClient::new(transport, session, config.api_url.clone());
        Self {
            client,
            clock,
            config,
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.client.session().get()
    }

    pub async fn login(&self, user_id: &str, password: &str) -> Result<Session> {
        let user_id = user_id.trim();
        if user_id.is_empty() || password.is_empty() {
            return Err(AdminError::Login(LOGIN_REQUIRED.into()));
        }

        let session = self
            .client
            .login(user_id, password)
            .await
            .into_data(LOGIN_FAILED)
            .map_err(|e| AdminError::Login(e.user_message()))?;
        if !session.is_active() {
            return Err(AdminError::Login(LOGIN_FAILED.into()));
        }
        self.client.session().save(&session)?;
        tracing::debug!(user_id = %session.user_id, "logged in");
        Ok(session)
    }

    pub async fn status(&self) -> Result<String> {
        let (settings, events) = tokio::join!(
            self.client.get_settings(),
            self.client.get_events(self.config.events_future_only),
        );

        let mut cards = StatusCards::default();
        let settings = remote_data(settings, SETTINGS_LOAD_FAILED)?;
        cards.apply_settings(&settings);
        // イベント取得に失敗しても他のカードは表示する
        match remote_data(events, EVENTS_LOAD_FAILED) {
            Ok(data) => cards.apply_events(&EventsView::build(&data.events, &self.clock)),
            Err(e) => tracing::warn!("{}", e),
        }
        cards.apply_session(self.session().as_ref(), &self.clock);
        Ok(output::format_cards(&cards))
    }

    async fn fetch_settings(&self) -> Result<SettingsData> {
        remote_data(self.client.get_settings().await, SETTINGS_LOAD_FAILED)
    }

    pub async fn settings_show(&self) -> Result<String> {
        let data = self.fetch_settings().await?;
        Ok(output::format_settings(&SettingsForm::from_settings(
            &data.settings,
        )))
    }

    /// 現在値に変更を重ねて保存し、保存後の設定を返す
    pub async fn settings_set(&self, changes: &SettingsChanges) -> Result<String> {
        let current = self.fetch_settings().await?;
        let mut form = SettingsForm::from_settings(&current.settings);
        changes.apply(&mut form);
        let settings = form.to_settings()?;

        let response = self.client.update_settings(settings).await;
        let message = remote_message(response, SETTINGS_SAVED, SETTINGS_SAVE_FAILED)?;
        let saved = self.settings_show().await?;
        Ok(format!("✔ {}\n\n{}", message, saved))
    }

    pub async fn events(&self) -> Result<String> {
        let data = remote_data(
            self.client.get_events(self.config.events_future_only).await,
            EVENTS_LOAD_FAILED,
        )?;
        let view = EventsView::build(&data.events, &self.clock);
        Ok(format!(
            "{}\n次回イベント: {}\n",
            output::format_events(&view),
            view.next_event
        ))
    }

    pub async fn item_rows(&self) -> Result<Vec<ItemRow>> {
        let data = remote_data(self.client.get_target_items().await, ITEMS_LOAD_FAILED)?;
        Ok(data
            .items
            .iter()
            .map(|item| ItemRow::build(item, &self.clock))
            .collect())
    }

    pub async fn items_list(&self) -> Result<String> {
        Ok(output::format_items(&self.item_rows().await?))
    }

    /// 入力はそのまま送る（分割はサーバー側）
    pub async fn items_add(&self, input: &str) -> Result<String> {
        let count = count_item_numbers(input);
        if count == 0 {
            return Err(AdminError::Input(ITEMS_REQUIRED.into()));
        }
        let response = self.client.bulk_add_target_items(input).await;
        remote_message(
            response,
            &format!("{}件を追加しました", count),
            ITEMS_ADD_FAILED,
        )
    }

    /// 商品管理番号から行を探す（行番号は一覧取得時点のもの）
    pub async fn find_item(&self, item_manage_number: &str) -> Result<ItemRow> {
        let wanted = item_manage_number.trim();
        self.item_rows()
            .await?
            .into_iter()
            .find(|row| row.item_manage_number == wanted)
            .ok_or_else(|| AdminError::Input(format!("対象商品が見つかりません: {}", wanted)))
    }

    pub async fn items_delete(&self, row: &ItemRow) -> Result<String> {
        let response = self.client.delete_target_item(row.row_index).await;
        remote_message(
            response,
            &format!("{}を削除しました", row.item_manage_number),
            ITEM_DELETE_FAILED,
        )
    }

    pub async fn logs(&self, limit: Option<u32>) -> Result<String> {
        let limit = limit.unwrap_or(self.config.logs_limit);
        let data = remote_data(self.client.get_logs(limit).await, LOGS_LOAD_FAILED)?;
        let rows: Vec<LogRow> = data
            .logs
            .iter()
            .map(|entry| LogRow::build(entry, &self.clock))
            .collect();
        Ok(output::format_logs(&rows))
    }

    pub async fn run(&self) -> Result<String> {
        let response = self.client.run_manual().await;
        remote_message(response, RUN_SUCCEEDED, RUN_FAILED)
    }
}
