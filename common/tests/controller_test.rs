//! 画面操作のシナリオテスト
//!
//! 台本どおりに応答するトランスポートでコントローラを動かし、状態と送信内容を検証

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use chrono::{FixedOffset, NaiveDate};
use futures::channel::oneshot;
use futures::executor::block_on;
use serde_json::{json, Value};

use samurai_admin_common::config::SESSION_KEY;
use samurai_admin_common::controller::{
    PendingDeletion, RunPanel, ITEMS_REQUIRED, LOGGED_OUT, LOGIN_REQUIRED, RUN_SUCCEEDED,
    SETTINGS_NOT_LOADED,
};
use samurai_admin_common::{
    ApiClient, AppState, ClientConfig, Controller, Error, FixedClock, MemoryStorage, Phase,
    Region, Result, SessionStore, StorageBackend, Tab, ToastKind, Transport,
    COMMUNICATION_FAILED,
};

/// アクション名ごとに応答を積んでおくトランスポート
#[derive(Clone, Default)]
struct ScriptedTransport {
    replies: Rc<RefCell<HashMap<String, VecDeque<Result<String>>>>>,
    gates: Rc<RefCell<HashMap<String, oneshot::Receiver<()>>>>,
    sent: Rc<RefCell<Vec<Value>>>,
}

impl ScriptedTransport {
    fn reply(&self, action: &str, body: Value) {
        self.push(action, Ok(body.to_string()));
    }

    fn fail(&self, action: &str) {
        self.push(action, Err(Error::Transport("connection refused".to_string())));
    }

    fn push(&self, action: &str, reply: Result<String>) {
        self.replies
            .borrow_mut()
            .entry(action.to_string())
            .or_default()
            .push_back(reply);
    }

    /// 次の `action` リクエストを送信側が合図するまで止める
    fn hold(&self, action: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(action.to_string(), rx);
        tx
    }

    fn actions(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .map(|body| body["action"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    fn last_sent(&self, action: &str) -> Value {
        self.sent
            .borrow()
            .iter()
            .rev()
            .find(|body| body["action"] == action)
            .cloned()
            .unwrap_or(Value::Null)
    }
}

impl Transport for ScriptedTransport {
    async fn post(&self, _url: &str, body: String) -> Result<String> {
        let payload: Value = serde_json::from_str(&body)?;
        let action = payload["action"].as_str().unwrap_or_default().to_string();
        self.sent.borrow_mut().push(payload);

        let reply = self
            .replies
            .borrow_mut()
            .get_mut(&action)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Err(Error::Transport(format!("no reply for {}", action))));

        let gate = self.gates.borrow_mut().remove(&action);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        reply
    }
}

type TestController =
    Controller<ScriptedTransport, MemoryStorage, FixedClock, Rc<RefCell<AppState>>>;

struct Harness {
    transport: ScriptedTransport,
    storage: MemoryStorage,
    state: Rc<RefCell<AppState>>,
    controller: TestController,
}

fn harness() -> Harness {
    let transport = ScriptedTransport::default();
    let storage = MemoryStorage::new();
    let state = Rc::new(RefCell::new(AppState::new()));
    let now = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let clock = FixedClock::new(now, FixedOffset::east_opt(9 * 3600).unwrap());
    let config = ClientConfig::with_api_url("https://api.test/exec");
    let client = ApiClient::new(
        transport.clone(),
        SessionStore::new(storage.clone(), SESSION_KEY),
        config.api_url.clone(),
    );
    let controller = Controller::new(client, clock, state.clone(), config);
    Harness {
        transport,
        storage,
        state,
        controller,
    }
}

fn login_reply() -> Value {
    json!({
        "success": true,
        "data": {
            "userId": "shop01",
            "token": "tok-abc",
            "shopName": "侍ショップ",
            "email": "owner@example.com",
            "expiry": "2024-12-31T00:00:00+09:00",
            "role": "admin"
        }
    })
}

fn settings_reply(count: u64) -> Value {
    json!({
        "success": true,
        "data": {
            "settings": {
                "mode": "TARGET_LIST",
                "dryRun": true,
                "maxItemsPerRun": 200,
                "notifySlack": true,
                "notifyEmail": false
            },
            "targetItemsCount": count
        }
    })
}

fn events_reply() -> Value {
    json!({
        "success": true,
        "data": {"events": [
            {"eventKey": "SS", "prefixLong": "【スーパーSALE】",
             "startDatetime": "2024-06-15T10:00", "endDatetime": "2024-06-15T14:00"},
            {"eventKey": "MR", "prefixLong": "【マラソン】",
             "startDatetime": "2024-06-20T20:00", "endDatetime": "2024-06-27T01:59"}
        ]}
    })
}

fn items_reply(numbers: &[&str]) -> Value {
    let items: Vec<Value> = numbers
        .iter()
        .enumerate()
        .map(|(i, number)| {
            json!({
                "itemManageNumber": number,
                "currentTitle": format!("{} 現在", number),
                "baseTitle": format!("{} ベース", number),
                "status": "SUCCESS",
                "lastUpdated": "2024-06-14T09:00",
                "rowIndex": i + 2
            })
        })
        .collect();
    json!({"success": true, "data": {"items": items}})
}

fn logs_reply(messages: &[&str]) -> Value {
    let logs: Vec<Value> = messages
        .iter()
        .map(|message| {
            json!({
                "timestamp": "2024-06-15T11:00",
                "itemManageNumber": "A1",
                "action": "RENAME",
                "status": "DRY_RUN",
                "message": message
            })
        })
        .collect();
    json!({"success": true, "data": {"logs": logs}})
}

fn fill_login(h: &Harness, user_id: &str, password: &str) {
    let mut state = h.state.borrow_mut();
    state.login.user_id = user_id.to_string();
    state.login.password = password.to_string();
}

fn logged_in(h: &Harness) {
    SessionStore::new(h.storage.clone(), SESSION_KEY)
        .save(&samurai_admin_common::Session {
            user_id: "shop01".to_string(),
            token: "tok-abc".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert!(h.controller.restore());
}

#[test]
fn login_saves_session_and_loads_dashboard_in_parallel() {
    let h = harness();
    h.transport.reply("login", login_reply());
    h.transport.reply("getSettings", settings_reply(42));
    h.transport.reply("getEvents", events_reply());
    h.transport.reply("getTargetItems", items_reply(&["A1", "B2"]));
    fill_login(&h, " shop01 ", "secret");

    block_on(h.controller.login());

    // セッションは5項目のみ保存される
    let raw = h.storage.get_item(SESSION_KEY).expect("セッション未保存");
    let saved: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        saved,
        json!({
            "userId": "shop01",
            "token": "tok-abc",
            "shopName": "侍ショップ",
            "email": "owner@example.com",
            "expiry": "2024-12-31T00:00:00+09:00"
        })
    );

    assert_eq!(
        h.transport.actions(),
        vec!["login", "getSettings", "getEvents", "getTargetItems"]
    );
    let login_body = h.transport.last_sent("login");
    assert_eq!(login_body["userId"], "shop01");
    assert_eq!(login_body["password"], "secret");
    assert_eq!(h.transport.last_sent("getEvents")["futureOnly"], true);
    assert_eq!(h.transport.last_sent("getSettings")["token"], "tok-abc");

    let state = h.state.borrow();
    assert_eq!(state.phase, Phase::Authenticated);
    assert_eq!(state.shop_name, "侍ショップ");
    assert!(!state.login.loading);
    assert!(state.login.password.is_empty());
    // 件数はローカルの2件ではなく応答の targetItemsCount
    assert_eq!(state.cards.target_items_count, "42件");
    assert_eq!(state.cards.current_mode, "DryRun");
    assert_eq!(state.cards.next_event, "【マラソン】 (2024/06/20)");
    assert_eq!(state.cards.expiry, "2024/12/31");
    assert_eq!(state.settings.form.max_items_per_run, "200");
    assert_eq!(state.items.loaded().map(Vec::len), Some(2));
    assert_eq!(state.events.loaded().map(|v| v.rows.len()), Some(2));
}

#[test]
fn login_failure_stays_unauthenticated_with_inline_message() {
    let h = harness();
    h.transport.reply(
        "login",
        json!({"success": false, "message": "IDまたはパスワードが違います"}),
    );
    fill_login(&h, "shop01", "wrong");

    block_on(h.controller.login());

    let state = h.state.borrow();
    assert_eq!(state.phase, Phase::Unauthenticated);
    assert_eq!(state.login.error.as_deref(), Some("IDまたはパスワードが違います"));
    assert!(!state.login.loading);
    assert!(h.storage.get_item(SESSION_KEY).is_none());
}

#[test]
fn login_requires_both_fields_before_sending() {
    let h = harness();
    fill_login(&h, "shop01", "");

    block_on(h.controller.login());

    assert!(h.transport.actions().is_empty());
    assert_eq!(h.state.borrow().login.error.as_deref(), Some(LOGIN_REQUIRED));
}

#[test]
fn login_transport_failure_shows_generic_message() {
    let h = harness();
    h.transport.fail("login");
    fill_login(&h, "shop01", "secret");

    block_on(h.controller.login());

    let state = h.state.borrow();
    assert_eq!(state.phase, Phase::Unauthenticated);
    assert_eq!(state.login.error.as_deref(), Some(COMMUNICATION_FAILED));
    assert!(!state.login.loading);
}

#[test]
fn restore_requires_active_session() {
    let h = harness();
    assert!(!h.controller.restore());

    h.storage.set_item(SESSION_KEY, "garbage").unwrap();
    assert!(!h.controller.restore());
    assert_eq!(h.state.borrow().phase, Phase::Unauthenticated);

    logged_in(&h);
    assert_eq!(h.state.borrow().phase, Phase::Authenticated);
    assert_eq!(h.state.borrow().shop_name, "shop01");
}

#[test]
fn logout_clears_session_and_resets_form() {
    let h = harness();
    logged_in(&h);
    {
        let mut state = h.state.borrow_mut();
        state.login.user_id = "shop01".to_string();
        state.login.error = Some("old error".to_string());
        state.delete.pending = Some(PendingDeletion {
            item_manage_number: "A1".to_string(),
            row_index: 2,
        });
    }

    h.controller.logout();

    assert!(h.storage.get_item(SESSION_KEY).is_none());
    let state = h.state.borrow();
    assert_eq!(state.phase, Phase::Unauthenticated);
    assert!(state.login.user_id.is_empty());
    assert!(state.login.error.is_none());
    assert!(state.delete.pending.is_none());
    assert_eq!(state.toasts.last().map(|t| t.message.as_str()), Some(LOGGED_OUT));
}

#[test]
fn selecting_logs_or_items_refetches_every_time() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("getLogs", logs_reply(&["first"]));
    h.transport.reply("getLogs", logs_reply(&["second"]));
    h.transport.reply("getTargetItems", items_reply(&["A1"]));

    block_on(h.controller.select_tab(Tab::Logs));
    block_on(h.controller.select_tab(Tab::Events));
    block_on(h.controller.select_tab(Tab::Logs));
    block_on(h.controller.select_tab(Tab::Items));

    assert_eq!(
        h.transport.actions(),
        vec!["getLogs", "getLogs", "getTargetItems"]
    );
    assert_eq!(h.transport.last_sent("getLogs")["limit"], 50);

    let state = h.state.borrow();
    assert_eq!(state.tab, Tab::Items);
    let logs = state.logs.loaded().unwrap();
    assert_eq!(logs[0].message, "second");
    assert_eq!(logs[0].badge.label, "DryRun");
}

#[test]
fn stale_response_does_not_overwrite_newer_one() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("getLogs", logs_reply(&["stale"]));
    h.transport.reply("getLogs", logs_reply(&["fresh"]));
    let release = h.transport.hold("getLogs");

    block_on(async {
        futures::join!(h.controller.load_logs(), async {
            h.controller.load_logs().await;
            let _ = release.send(());
        });
    });

    let state = h.state.borrow();
    let logs = state.logs.loaded().expect("ログが表示されていない");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].message, "fresh");
}

#[test]
fn list_failure_clears_region_and_shows_error() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("getTargetItems", items_reply(&["A1"]));
    h.transport.fail("getTargetItems");

    block_on(h.controller.load_items());
    assert!(h.state.borrow().items.loaded().is_some());

    block_on(h.controller.load_items());
    assert_eq!(
        h.state.borrow().items,
        Region::Failed(COMMUNICATION_FAILED.to_string())
    );
}

#[test]
fn save_settings_sends_typed_settings_and_reloads() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("getSettings", settings_reply(5));
    h.transport.reply("updateSettings", json!({"success": true, "message": "保存しました"}));
    h.transport.reply("getSettings", settings_reply(5));
    block_on(h.controller.load_settings());
    {
        let mut state = h.state.borrow_mut();
        state.settings.form.dry_run = false;
        state.settings.form.max_items_per_run = "300".to_string();
        state.settings.form.notify_email = true;
    }

    block_on(h.controller.save_settings());

    let body = h.transport.last_sent("updateSettings");
    assert_eq!(
        body["settings"],
        json!({
            "mode": "TARGET_LIST",
            "dryRun": false,
            "maxItemsPerRun": 300,
            "notifySlack": false,
            "notifyEmail": true
        })
    );
    assert_eq!(
        h.transport.actions(),
        vec!["getSettings", "updateSettings", "getSettings"]
    );

    let state = h.state.borrow();
    assert!(!state.settings.saving);
    assert_eq!(state.settings.form.max_items_per_run, "200");
    assert!(state.toasts.iter().any(|t| t.kind == ToastKind::Success));
}

#[test]
fn save_settings_rejects_invalid_max_items_without_request() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("getSettings", settings_reply(5));
    block_on(h.controller.load_settings());
    h.state.borrow_mut().settings.form.max_items_per_run = "0".to_string();

    block_on(h.controller.save_settings());

    assert_eq!(h.transport.actions(), vec!["getSettings"]);
    let state = h.state.borrow();
    assert!(!state.settings.saving);
    let toast = state.toasts.last().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_ne!(toast.message, SETTINGS_NOT_LOADED);
}

#[test]
fn save_settings_refused_after_settings_failed_to_load() {
    let h = harness();
    logged_in(&h);
    h.transport.fail("getSettings");
    block_on(h.controller.load_settings());
    assert_eq!(
        h.state.borrow().settings.status,
        Region::Failed(COMMUNICATION_FAILED.to_string())
    );

    // 既定値のままのフォームで本番モードに上書きしてしまわないこと
    block_on(h.controller.save_settings());

    assert_eq!(h.transport.actions(), vec!["getSettings"]);
    let state = h.state.borrow();
    assert!(!state.settings.saving);
    assert_eq!(
        state.toasts.last().map(|t| t.message.as_str()),
        Some(SETTINGS_NOT_LOADED)
    );
}

#[test]
fn save_settings_transport_failure_clears_saving() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("getSettings", settings_reply(5));
    h.transport.fail("updateSettings");
    block_on(h.controller.load_settings());

    block_on(h.controller.save_settings());

    assert_eq!(h.transport.actions(), vec!["getSettings", "updateSettings"]);
    let state = h.state.borrow();
    assert!(!state.settings.saving);
    assert_eq!(
        state.toasts.last().map(|t| t.message.as_str()),
        Some(COMMUNICATION_FAILED)
    );
}

#[test]
fn manual_run_shows_result_and_refreshes_logs() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("runManual", json!({"success": true, "message": "3件を処理しました"}));
    h.transport.reply("getLogs", logs_reply(&["renamed"]));

    block_on(h.controller.run_manual());

    assert_eq!(h.transport.actions(), vec!["runManual", "getLogs"]);
    let state = h.state.borrow();
    assert!(!state.run.loading);
    let result = state.run.result.as_ref().unwrap();
    assert!(result.success);
    assert_eq!(result.message, "3件を処理しました");
    assert!(state.toasts.iter().any(|t| t.message == RUN_SUCCEEDED));
    assert!(state.logs.loaded().is_some());
}

#[test]
fn manual_run_transport_failure_clears_loading() {
    let h = harness();
    logged_in(&h);
    h.transport.fail("runManual");

    block_on(h.controller.run_manual());

    assert_eq!(h.transport.actions(), vec!["runManual"]);
    let state = h.state.borrow();
    assert!(!state.run.loading);
    let result = state.run.result.as_ref().unwrap();
    assert!(!result.success);
    assert_eq!(result.message, COMMUNICATION_FAILED);
}

#[test]
fn add_items_with_empty_input_sends_nothing() {
    let h = harness();
    logged_in(&h);
    h.controller.open_add_items();
    h.state.borrow_mut().add_items.input = " ,\n ".to_string();

    block_on(h.controller.submit_add_items());

    assert!(h.transport.actions().is_empty());
    let state = h.state.borrow();
    assert!(state.add_items.open);
    assert!(!state.add_items.loading);
    assert_eq!(state.toasts.last().map(|t| t.message.as_str()), Some(ITEMS_REQUIRED));
}

#[test]
fn add_items_sends_raw_input_and_refetches() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("bulkAddTargetItems", json!({"success": true}));
    h.transport.reply("getTargetItems", items_reply(&["A1", "B2", "C3"]));
    h.transport.reply("getSettings", settings_reply(3));
    h.controller.open_add_items();
    h.state.borrow_mut().add_items.input = "A1,B2\nC3".to_string();
    assert_eq!(h.state.borrow().add_items.preview_count(), 3);

    block_on(h.controller.submit_add_items());

    assert_eq!(
        h.transport.last_sent("bulkAddTargetItems")["itemNumbers"],
        "A1,B2\nC3"
    );
    let state = h.state.borrow();
    assert!(!state.add_items.open);
    assert!(state.add_items.input.is_empty());
    assert_eq!(state.items.loaded().map(Vec::len), Some(3));
    assert_eq!(state.cards.target_items_count, "3件");
    assert!(state.toasts.iter().any(|t| t.message == "3件を追加しました"));
}

#[test]
fn delete_success_closes_modal_and_refetches_list() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("getTargetItems", items_reply(&["A1", "B2"]));
    block_on(h.controller.load_items());

    h.transport.reply("deleteTargetItem", json!({"success": true, "message": "削除しました"}));
    h.transport.reply("getTargetItems", items_reply(&["B2"]));
    h.transport.reply("getSettings", settings_reply(1));

    h.controller.request_delete("A1", 2);
    assert!(h.state.borrow().delete.is_open());

    block_on(h.controller.confirm_delete());

    assert_eq!(h.transport.last_sent("deleteTargetItem")["rowIndex"], 2);
    assert_eq!(
        h.transport.actions(),
        vec!["getTargetItems", "deleteTargetItem", "getTargetItems", "getSettings"]
    );
    let state = h.state.borrow();
    assert!(!state.delete.is_open());
    assert!(!state.delete.loading);
    let items = state.items.loaded().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_manage_number, "B2");
}

#[test]
fn delete_failure_keeps_modal_open_and_clears_loading() {
    let h = harness();
    logged_in(&h);
    h.transport.reply(
        "deleteTargetItem",
        json!({"success": false, "message": "行が見つかりません"}),
    );
    h.controller.request_delete("A1", 9);

    block_on(h.controller.confirm_delete());

    let state = h.state.borrow();
    assert!(state.delete.is_open());
    assert!(!state.delete.loading);
    assert_eq!(
        state.toasts.last().map(|t| t.message.as_str()),
        Some("行が見つかりません")
    );
}

#[test]
fn cancel_delete_clears_pending_record() {
    let h = harness();
    logged_in(&h);
    h.controller.request_delete("A1", 2);
    h.controller.cancel_delete();

    block_on(h.controller.confirm_delete());

    assert!(h.transport.actions().is_empty());
    assert!(h.state.borrow().delete.pending.is_none());
}

#[test]
fn every_action_survives_transport_failure() {
    let h = harness();
    logged_in(&h);
    for action in [
        "getSettings",
        "getEvents",
        "getTargetItems",
        "getLogs",
        "updateSettings",
        "runManual",
        "bulkAddTargetItems",
        "deleteTargetItem",
    ] {
        h.transport.fail(action);
    }

    block_on(async {
        h.controller.load_dashboard().await;
        h.controller.load_logs().await;
        h.controller.save_settings().await;
        h.controller.run_manual().await;
        h.controller.open_add_items();
        h.state.borrow_mut().add_items.input = "A1".to_string();
        h.controller.submit_add_items().await;
        h.controller.request_delete("A1", 2);
        h.controller.confirm_delete().await;
    });

    let state = h.state.borrow();
    assert!(!state.settings.saving);
    assert!(!state.run.loading);
    assert!(!state.add_items.loading);
    assert!(!state.delete.loading);
    assert_eq!(state.events, Region::Failed(COMMUNICATION_FAILED.to_string()));
    assert_eq!(state.logs, Region::Failed(COMMUNICATION_FAILED.to_string()));
    // 設定の読み込みに失敗しているので保存は送信前に止まる
    assert!(state
        .toasts
        .iter()
        .filter(|t| t.kind == ToastKind::Error)
        .all(|t| t.message == COMMUNICATION_FAILED || t.message == SETTINGS_NOT_LOADED));
    assert!(!h.transport.actions().contains(&"updateSettings".to_string()));
    assert_eq!(state.phase, Phase::Authenticated);
}

#[test]
fn logout_during_manual_run_discards_the_result() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("runManual", json!({"success": true, "message": "完了"}));
    h.transport.reply("getLogs", logs_reply(&["after logout"]));
    let release = h.transport.hold("runManual");

    block_on(async {
        futures::join!(h.controller.run_manual(), async {
            h.controller.logout();
            let _ = release.send(());
        });
    });

    assert_eq!(h.transport.actions(), vec!["runManual"]);
    let state = h.state.borrow();
    assert_eq!(state.phase, Phase::Unauthenticated);
    assert_eq!(state.run, RunPanel::default());
    assert_eq!(state.logs, Region::Idle);
    let messages: Vec<_> = state.toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec![LOGGED_OUT]);
}

#[test]
fn logout_during_add_or_delete_skips_refetch() {
    let h = harness();
    logged_in(&h);
    h.transport.reply("bulkAddTargetItems", json!({"success": true}));
    h.controller.open_add_items();
    h.state.borrow_mut().add_items.input = "A1".to_string();
    let release = h.transport.hold("bulkAddTargetItems");

    block_on(async {
        futures::join!(h.controller.submit_add_items(), async {
            h.controller.logout();
            let _ = release.send(());
        });
    });

    logged_in(&h);
    h.transport.reply("deleteTargetItem", json!({"success": true}));
    h.controller.request_delete("A1", 2);
    let release = h.transport.hold("deleteTargetItem");

    block_on(async {
        futures::join!(h.controller.confirm_delete(), async {
            h.controller.logout();
            let _ = release.send(());
        });
    });

    // 一覧や件数の再取得は送らない
    assert_eq!(
        h.transport.actions(),
        vec!["bulkAddTargetItems", "deleteTargetItem"]
    );
    let state = h.state.borrow();
    assert_eq!(state.phase, Phase::Unauthenticated);
    assert!(!state.add_items.open);
    assert!(!state.delete.is_open());
    assert_eq!(state.items, Region::Idle);
    assert_eq!(state.cards.target_items_count, "-");
    assert!(state.toasts.iter().all(|t| t.message == LOGGED_OUT));
}

#[test]
fn rows_with_null_or_numeric_fields_still_render() {
    let h = harness();
    logged_in(&h);
    h.transport.reply(
        "getTargetItems",
        json!({"success": true, "data": {"items": [
            {"itemManageNumber": 12345, "currentTitle": null, "status": "SUCCESS", "rowIndex": 2}
        ]}}),
    );
    h.transport.reply(
        "getLogs",
        json!({"success": true, "data": {"logs": [
            {"timestamp": "2024-06-15T11:00", "itemManageNumber": 12345,
             "action": "RENAME", "status": "SUCCESS", "message": null}
        ]}}),
    );

    block_on(async {
        h.controller.load_items().await;
        h.controller.load_logs().await;
    });

    let state = h.state.borrow();
    let items = state.items.loaded().expect("対象商品が表示されていない");
    assert_eq!(items[0].item_manage_number, "12345");
    assert_eq!(items[0].current_title, "-");
    let logs = state.logs.loaded().expect("ログが表示されていない");
    assert_eq!(logs[0].item_manage_number, "12345");
    assert_eq!(logs[0].message, "-");
}
