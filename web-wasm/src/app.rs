//! メインアプリケーションコンポーネント

use std::future::Future;

use leptos::prelude::*;
use samurai_admin_common::config::DEFAULT_API_URL;
use samurai_admin_common::{
    ApiClient, AppState, ClientConfig, Controller, LocalClock, Phase, SessionStore, StateHandle,
    Tab,
};
use wasm_bindgen_futures::spawn_local;

use crate::api::FetchTransport;
use crate::components::{
    add_items_modal::AddItemsModal, delete_confirm_modal::DeleteConfirmModal,
    events_tab::EventsTab, header::Header, items_tab::ItemsTab, login_form::LoginForm,
    logs_tab::LogsTab, manual_run::ManualRun, settings_panel::SettingsPanel,
    status_cards::StatusCards, toast::ToastContainer,
};
use crate::session_storage::BrowserSessionStorage;

/// 画面状態を保持するシグナル
#[derive(Clone, Copy)]
pub struct SignalState(pub RwSignal<AppState>);

impl StateHandle for SignalState {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

pub type AdminController =
    Controller<FetchTransport, BrowserSessionStorage, LocalClock, SignalState>;

/// ビルド時に SAMURAI_API_URL が指定されていればそちらを使う
pub fn client_config() -> ClientConfig {
    ClientConfig::with_api_url(option_env!("SAMURAI_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn create_controller(state: RwSignal<AppState>) -> AdminController {
    let config = client_config();
    let session = SessionStore::new(BrowserSessionStorage, config.session_key.clone());
    let client = ApiClient::new(FetchTransport, session, config.api_url.clone());
    Controller::new(client, LocalClock, SignalState(state), config)
}

/// コントローラの複製を渡して非同期処理を起動
fn spawn_with<F, Fut>(controller: StoredValue<AdminController, LocalStorage>, f: F)
where
    F: FnOnce(AdminController) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    spawn_local(f(controller.get_value()));
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(AppState::new());
    let controller = StoredValue::new_local(create_controller(state));

    // タブを開き直した場合もセッションが残っていればダッシュボードへ
    if controller.with_value(|c| c.restore()) {
        spawn_with(controller, |c| async move { c.load_dashboard().await });
    }

    let on_login = move |_: ()| spawn_with(controller, |c| async move { c.login().await });
    let on_logout = move |_: ()| controller.with_value(|c| c.logout());
    let on_select_tab =
        move |tab: Tab| spawn_with(controller, move |c| async move { c.select_tab(tab).await });
    let on_save_settings =
        move |_: ()| spawn_with(controller, |c| async move { c.save_settings().await });
    let on_run = move |_: ()| spawn_with(controller, |c| async move { c.run_manual().await });
    let on_refresh_logs =
        move |_: ()| spawn_with(controller, |c| async move { c.load_logs().await });
    let on_open_add = move |_: ()| controller.with_value(|c| c.open_add_items());
    let on_close_add = move |_: ()| controller.with_value(|c| c.close_add_items());
    let on_submit_add =
        move |_: ()| spawn_with(controller, |c| async move { c.submit_add_items().await });
    let on_request_delete = move |item: String, row: u32| {
        controller.with_value(|c| c.request_delete(&item, row))
    };
    let on_cancel_delete = move |_: ()| controller.with_value(|c| c.cancel_delete());
    let on_confirm_delete =
        move |_: ()| spawn_with(controller, |c| async move { c.confirm_delete().await });
    let on_dismiss_toast = move |id: u64| controller.with_value(|c| c.dismiss_toast(id));

    let authenticated = move || state.with(|s| s.phase == Phase::Authenticated);
    let active = move |tab: Tab| state.with(|s| s.tab == tab);

    view! {
        <div class="container">
            <Header state=state on_logout=on_logout />

            <Show
                when=authenticated
                fallback=move || view! { <LoginForm state=state on_login=on_login /> }
            >
                <main class="dashboard">
                    <StatusCards state=state />
                    <ManualRun state=state on_run=on_run />

                    <nav class="tabs">
                        {Tab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        class="tab-btn"
                                        class:active=move || active(tab)
                                        data-tab=tab.id()
                                        on:click=move |_| on_select_tab(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <section class="tab-content" class:active=move || active(Tab::Settings)>
                        <SettingsPanel state=state on_save=on_save_settings />
                    </section>
                    <section class="tab-content" class:active=move || active(Tab::Events)>
                        <EventsTab state=state />
                    </section>
                    <section class="tab-content" class:active=move || active(Tab::Items)>
                        <ItemsTab state=state on_add=on_open_add on_delete=on_request_delete />
                    </section>
                    <section class="tab-content" class:active=move || active(Tab::Logs)>
                        <LogsTab state=state on_refresh=on_refresh_logs />
                    </section>
                </main>
            </Show>

            <AddItemsModal
                state=state
                on_close=on_close_add
                on_submit=on_submit_add
            />
            <DeleteConfirmModal
                state=state
                on_cancel=on_cancel_delete
                on_confirm=on_confirm_delete
            />
            <ToastContainer state=state on_dismiss=on_dismiss_toast />
        </div>
    }
}
