//! 画面の状態とユーザー操作
//!
//! 画面の状態は `AppState` にまとめ、`StateHandle` 経由で更新する。
//! ブラウザではリアクティブなシグナル、テストでは `Rc<RefCell<_>>` を渡す。
//!
//! 状態の借用は同期処理の中だけで行い、通信の待ち合わせをまたがない。

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{ApiClient, ApiResponse, Transport};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::sequencer::{RequestSequencer, Ticket, ViewRegion};
use crate::session::StorageBackend;
use crate::time::Clock;
use crate::types::{EventsData, LogsData, SettingsData, TargetItemsData};
use crate::view::{
    count_item_numbers, EventsView, ItemRow, LogRow, Region, SettingsForm, StatusCards,
};

pub const LOGIN_SUCCEEDED: &str = "ログインしました";
pub const LOGIN_FAILED: &str = "ログインに失敗しました";
pub const LOGIN_REQUIRED: &str = "ユーザーIDとパスワードを入力してください";
pub const LOGGED_OUT: &str = "ログアウトしました";
pub const SETTINGS_LOAD_FAILED: &str = "設定の読み込みに失敗しました";
pub const SETTINGS_SAVED: &str = "設定を保存しました";
pub const SETTINGS_SAVE_FAILED: &str = "設定の保存に失敗しました";
pub const SETTINGS_NOT_LOADED: &str = "設定を読み込めていないため保存できません";
pub const EVENTS_LOAD_FAILED: &str = "イベントの読み込みに失敗しました";
pub const ITEMS_LOAD_FAILED: &str = "対象商品の読み込みに失敗しました";
pub const LOGS_LOAD_FAILED: &str = "ログの読み込みに失敗しました";
pub const RUN_SUCCEEDED: &str = "手動実行が完了しました";
pub const RUN_FAILED: &str = "実行に失敗しました";
pub const ITEMS_REQUIRED: &str = "商品管理番号を入力してください";
pub const ITEMS_ADD_FAILED: &str = "対象商品の追加に失敗しました";
pub const ITEM_DELETE_FAILED: &str = "対象商品の削除に失敗しました";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Settings,
    Events,
    Items,
    Logs,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Settings, Tab::Events, Tab::Items, Tab::Logs];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Settings => "settings",
            Tab::Events => "events",
            Tab::Items => "items",
            Tab::Logs => "logs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Settings => "設定",
            Tab::Events => "イベント",
            Tab::Items => "対象商品",
            Tab::Logs => "ログ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub user_id: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPanel {
    pub status: Region<()>,
    pub form: SettingsForm,
    pub saving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunPanel {
    pub loading: bool,
    pub result: Option<RunResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddItemsModal {
    pub open: bool,
    pub input: String,
    pub loading: bool,
}

impl AddItemsModal {
    pub fn preview_count(&self) -> usize {
        count_item_numbers(&self.input)
    }
}

/// 削除確認中の商品
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub item_manage_number: String,
    pub row_index: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteModal {
    pub pending: Option<PendingDeletion>,
    pub loading: bool,
}

impl DeleteModal {
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}

/// 画面全体の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub phase: Phase,
    pub tab: Tab,
    pub shop_name: String,
    pub login: LoginForm,
    pub settings: SettingsPanel,
    pub events: Region<EventsView>,
    pub items: Region<Vec<ItemRow>>,
    pub logs: Region<Vec<LogRow>>,
    pub cards: StatusCards,
    pub run: RunPanel,
    pub add_items: AddItemsModal,
    pub delete: DeleteModal,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
    sequencer: RequestSequencer,
    /// ログアウトのたびに進む世代番号
    epoch: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// 領域を読み込み中にしてチケットを発行
    fn begin(&mut self, region: ViewRegion) -> Ticket {
        match region {
            ViewRegion::Settings => self.settings.status = Region::Loading,
            ViewRegion::Events => self.events = Region::Loading,
            ViewRegion::Items => self.items = Region::Loading,
            ViewRegion::Logs => self.logs = Region::Loading,
            ViewRegion::Cards => {}
        }
        self.sequencer.issue(region)
    }

    fn accept(&self, ticket: Ticket) -> bool {
        let current = self.sequencer.is_current(ticket);
        if !current {
            tracing::debug!(region = ?ticket.region, seq = ticket.seq, "discarding stale response");
        }
        current
    }

    /// 通信開始時と同じログイン世代か
    fn same_epoch(&self, epoch: u64) -> bool {
        let same = self.epoch == epoch;
        if !same {
            tracing::debug!(epoch, current = self.epoch, "discarding response from previous session");
        }
        same
    }

    /// ログアウト時の初期化。通信中の応答もすべて無効にする
    fn reset_for_logout(&mut self) {
        let mut sequencer = std::mem::take(&mut self.sequencer);
        sequencer.invalidate_all();
        let toasts = std::mem::take(&mut self.toasts);
        let next_toast_id = self.next_toast_id;
        let epoch = self.epoch + 1;

        *self = AppState {
            toasts,
            next_toast_id,
            sequencer,
            epoch,
            ..AppState::default()
        };
    }
}

/// 画面状態への書き込み口
///
/// 画面が破棄済みなどで更新できない場合は None を返す
pub trait StateHandle {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R>;
}

impl StateHandle for Rc<RefCell<AppState>> {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// ユーザー操作の処理
///
/// どの操作も失敗は画面上のメッセージとして終わり、呼び出し元には返さない。
/// ボタンの読み込み中表示は成功・失敗どちらの経路でも解除する。
#[derive(Debug, Clone)]
pub struct Controller<T, B, C, H> {
    client: ApiClient<T, B>,
    clock: C,
    state: H,
    config: ClientConfig,
}

impl<T, B, C, H> Controller<T, B, C, H>
where
    T: Transport,
    B: StorageBackend,
    C: Clock,
    H: StateHandle,
{
    pub fn new(client: ApiClient<T, B>, clock: C, state: H, config: ClientConfig) -> Self {
        Self {
            client,
            clock,
            state,
            config,
        }
    }

    pub fn client(&self) -> &ApiClient<T, B> {
        &self.client
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// 起動時：有効なセッションがあればダッシュボードへ
    ///
    /// 戻り値が true ならダッシュボードの読み込みを続けて行う
    pub fn restore(&self) -> bool {
        let session = self.client.session().get().filter(|s| s.is_active());
        let authenticated = session.is_some();
        self.state.update(|s| match &session {
            Some(session) => {
                s.phase = Phase::Authenticated;
                s.shop_name = session.display_name().to_string();
            }
            None => s.phase = Phase::Unauthenticated,
        });
        authenticated
    }

    pub async fn login(&self) {
        let credentials = self
            .state
            .update(|s| {
                s.login.error = None;
                let user_id = s.login.user_id.trim().to_string();
                if user_id.is_empty() || s.login.password.is_empty() {
                    s.login.error = Some(LOGIN_REQUIRED.to_string());
                    return None;
                }
                s.login.loading = true;
                Some((user_id, s.login.password.clone()))
            })
            .flatten();
        let Some((user_id, password)) = credentials else {
            return;
        };

        let response = self.client.login(&user_id, &password).await;
        let saved = response
            .into_data(LOGIN_FAILED)
            .and_then(|session| {
                if session.is_active() {
                    Ok(session)
                } else {
                    Err(Error::Application(LOGIN_FAILED.to_string()))
                }
            })
            .and_then(|session| self.client.session().save(&session).map(|_| session));

        match saved {
            Ok(session) => {
                self.state.update(|s| {
                    s.login.loading = false;
                    s.login.password.clear();
                    s.phase = Phase::Authenticated;
                    s.tab = Tab::Settings;
                    s.shop_name = session.display_name().to_string();
                    s.push_toast(ToastKind::Success, LOGIN_SUCCEEDED);
                });
                self.load_dashboard().await;
            }
            Err(e) => {
                if matches!(e, Error::Storage(_)) {
                    tracing::warn!("failed to persist session: {}", e);
                }
                self.state.update(|s| {
                    s.login.loading = false;
                    s.login.error = Some(e.user_message());
                });
            }
        }
    }

    pub fn logout(&self) {
        self.client.session().clear();
        self.state.update(|s| {
            s.reset_for_logout();
            s.push_toast(ToastKind::Success, LOGGED_OUT);
        });
    }

    /// 設定・イベント・対象商品を並行して取得し、揃ってからカードを更新する
    pub async fn load_dashboard(&self) {
        let tickets = self.state.update(|s| {
            (
                s.epoch,
                s.begin(ViewRegion::Settings),
                s.begin(ViewRegion::Events),
                s.begin(ViewRegion::Items),
            )
        });
        let Some((epoch, settings_ticket, events_ticket, items_ticket)) = tickets else {
            return;
        };

        let (settings, events, items) = futures::join!(
            self.client.get_settings(),
            self.client.get_events(self.config.events_future_only),
            self.client.get_target_items(),
        );

        self.apply_settings(settings_ticket, settings);
        self.apply_events(events_ticket, events);
        self.apply_items(items_ticket, items);

        let session = self.client.session().get();
        self.state.update(|s| {
            if s.same_epoch(epoch) {
                s.cards.apply_session(session.as_ref(), &self.clock);
            }
        });
    }

    pub async fn load_settings(&self) {
        let Some(ticket) = self.state.update(|s| s.begin(ViewRegion::Settings)) else {
            return;
        };
        let response = self.client.get_settings().await;
        self.apply_settings(ticket, response);
    }

    fn apply_settings(&self, ticket: Ticket, response: ApiResponse<SettingsData>) {
        let result = response.into_data(SETTINGS_LOAD_FAILED);
        self.state.update(|s| {
            if !s.accept(ticket) {
                return;
            }
            match result {
                Ok(data) => {
                    s.settings.form = SettingsForm::from_settings(&data.settings);
                    s.cards.apply_settings(&data);
                    s.settings.status = Region::Loaded(());
                }
                Err(e) => {
                    let message = e.user_message();
                    s.settings.status = Region::Failed(message.clone());
                    s.push_toast(ToastKind::Error, message);
                }
            }
        });
    }

    pub async fn save_settings(&self) {
        let parsed = self.state.update(|s| {
            // 読み込めていないフォームの値で保存済みの設定を上書きしない
            if s.settings.status.loaded().is_none() {
                s.push_toast(ToastKind::Error, SETTINGS_NOT_LOADED);
                return None;
            }
            match s.settings.form.to_settings() {
                Ok(settings) => {
                    s.settings.saving = true;
                    Some((s.epoch, settings))
                }
                Err(e) => {
                    s.push_toast(ToastKind::Error, e.user_message());
                    None
                }
            }
        });
        let Some((epoch, settings)) = parsed.flatten() else {
            return;
        };

        let response = self.client.update_settings(settings).await;
        let saved = response.success;
        let applied = self.state.update(|s| {
            if !s.same_epoch(epoch) {
                return false;
            }
            s.settings.saving = false;
            if saved {
                s.push_toast(ToastKind::Success, SETTINGS_SAVED);
            } else {
                s.push_toast(ToastKind::Error, response.message_or(SETTINGS_SAVE_FAILED));
            }
            true
        });

        if saved && applied == Some(true) {
            self.load_settings().await;
        }
    }

    pub async fn load_events(&self) {
        let Some(ticket) = self.state.update(|s| s.begin(ViewRegion::Events)) else {
            return;
        };
        let response = self.client.get_events(self.config.events_future_only).await;
        self.apply_events(ticket, response);
    }

    fn apply_events(&self, ticket: Ticket, response: ApiResponse<EventsData>) {
        let result = response
            .into_data(EVENTS_LOAD_FAILED)
            .map(|data| EventsView::build(&data.events, &self.clock));
        self.state.update(|s| {
            if !s.accept(ticket) {
                return;
            }
            match result {
                Ok(view) => {
                    s.cards.apply_events(&view);
                    s.events = Region::Loaded(view);
                }
                Err(e) => {
                    s.cards.next_event = "-".to_string();
                    s.events = Region::Failed(e.user_message());
                }
            }
        });
    }

    pub async fn load_items(&self) {
        let Some(ticket) = self.state.update(|s| s.begin(ViewRegion::Items)) else {
            return;
        };
        let response = self.client.get_target_items().await;
        self.apply_items(ticket, response);
    }

    fn apply_items(&self, ticket: Ticket, response: ApiResponse<TargetItemsData>) {
        let result = response.into_data(ITEMS_LOAD_FAILED).map(|data| {
            data.items
                .iter()
                .map(|item| ItemRow::build(item, &self.clock))
                .collect::<Vec<_>>()
        });
        self.state.update(|s| {
            if !s.accept(ticket) {
                return;
            }
            s.items = match result {
                Ok(rows) => Region::Loaded(rows),
                Err(e) => Region::Failed(e.user_message()),
            };
        });
    }

    pub async fn load_logs(&self) {
        let Some(ticket) = self.state.update(|s| s.begin(ViewRegion::Logs)) else {
            return;
        };
        let response = self.client.get_logs(self.config.logs_limit).await;
        let result = response.into_data(LOGS_LOAD_FAILED).map(|data| {
            data.logs
                .iter()
                .map(|entry| LogRow::build(entry, &self.clock))
                .collect::<Vec<_>>()
        });
        self.state.update(|s| {
            if !s.accept(ticket) {
                return;
            }
            s.logs = match result {
                Ok(rows) => Region::Loaded(rows),
                Err(e) => Region::Failed(e.user_message()),
            };
        });
    }

    /// 件数カードだけを更新（編集中の設定フォームは上書きしない）
    async fn refresh_cards(&self) {
        let Some(ticket) = self.state.update(|s| s.begin(ViewRegion::Cards)) else {
            return;
        };
        let response: ApiResponse<SettingsData> = self.client.get_settings().await;
        if let Ok(data) = response.into_data(SETTINGS_LOAD_FAILED) {
            self.state.update(|s| {
                if s.accept(ticket) {
                    s.cards.apply_settings(&data);
                }
            });
        }
    }

    /// タブ切り替え。ログと対象商品は選択のたびに取り直す
    pub async fn select_tab(&self, tab: Tab) {
        self.state.update(|s| s.tab = tab);
        match tab {
            Tab::Logs => self.load_logs().await,
            Tab::Items => self.load_items().await,
            Tab::Settings | Tab::Events => {}
        }
    }

    pub async fn run_manual(&self) {
        let Some(epoch) = self.state.update(|s| {
            s.run.loading = true;
            s.run.result = None;
            s.epoch
        }) else {
            return;
        };

        let response = self.client.run_manual().await;
        let success = response.success;
        let message = if success {
            response.message_or(RUN_SUCCEEDED)
        } else {
            response.message_or(RUN_FAILED)
        };

        let applied = self.state.update(|s| {
            if !s.same_epoch(epoch) {
                return false;
            }
            s.run.loading = false;
            s.run.result = Some(RunResult {
                success,
                message: message.clone(),
            });
            if success {
                s.push_toast(ToastKind::Success, RUN_SUCCEEDED);
            } else {
                s.push_toast(ToastKind::Error, message);
            }
            true
        });

        if success && applied == Some(true) {
            self.load_logs().await;
        }
    }

    pub fn open_add_items(&self) {
        self.state.update(|s| s.add_items = AddItemsModal {
            open: true,
            ..AddItemsModal::default()
        });
    }

    pub fn close_add_items(&self) {
        self.state.update(|s| s.add_items = AddItemsModal::default());
    }

    pub async fn submit_add_items(&self) {
        let input = self.state.update(|s| {
            let count = s.add_items.preview_count();
            if count == 0 {
                s.push_toast(ToastKind::Error, ITEMS_REQUIRED);
                return None;
            }
            s.add_items.loading = true;
            Some((s.epoch, s.add_items.input.clone(), count))
        });
        let Some((epoch, input, count)) = input.flatten() else {
            return;
        };

        let response = self.client.bulk_add_target_items(&input).await;
        let success = response.success;
        let message = if success {
            response.message_or(&format!("{}件を追加しました", count))
        } else {
            response.message_or(ITEMS_ADD_FAILED)
        };
        let applied = self.state.update(|s| {
            if !s.same_epoch(epoch) {
                return false;
            }
            if success {
                s.add_items = AddItemsModal::default();
                s.push_toast(ToastKind::Success, message);
            } else {
                s.add_items.loading = false;
                s.push_toast(ToastKind::Error, message);
            }
            true
        });

        if success && applied == Some(true) {
            futures::join!(self.load_items(), self.refresh_cards());
        }
    }

    pub fn request_delete(&self, item_manage_number: &str, row_index: u32) {
        self.state.update(|s| {
            s.delete = DeleteModal {
                pending: Some(PendingDeletion {
                    item_manage_number: item_manage_number.to_string(),
                    row_index,
                }),
                loading: false,
            }
        });
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.delete = DeleteModal::default());
    }

    /// 削除後は一覧を取り直す（手元の行は消さない）
    pub async fn confirm_delete(&self) {
        let pending = self.state.update(|s| {
            let pending = s.delete.pending.clone()?;
            s.delete.loading = true;
            Some((s.epoch, pending))
        });
        let Some((epoch, pending)) = pending.flatten() else {
            return;
        };

        let response = self.client.delete_target_item(pending.row_index).await;
        let success = response.success;
        let message = if success {
            response.message_or(&format!("{}を削除しました", pending.item_manage_number))
        } else {
            response.message_or(ITEM_DELETE_FAILED)
        };
        let applied = self.state.update(|s| {
            if !s.same_epoch(epoch) {
                return false;
            }
            if success {
                s.delete = DeleteModal::default();
                s.push_toast(ToastKind::Success, message);
            } else {
                s.delete.loading = false;
                s.push_toast(ToastKind::Error, message);
            }
            true
        });

        if success && applied == Some(true) {
            futures::join!(self.load_items(), self.refresh_cards());
        }
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.state.update(|s| s.dismiss_toast(id));
    }
}
