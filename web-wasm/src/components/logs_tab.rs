//! 処理ログタブ

use leptos::prelude::*;
use samurai_admin_common::render;
use samurai_admin_common::AppState;

#[component]
pub fn LogsTab<FR>(state: RwSignal<AppState>, on_refresh: FR) -> impl IntoView
where
    FR: Fn(()) + Clone + Send + Sync + 'static,
{
    let body = Memo::new(move |_| state.with(|s| render::logs_body(&s.logs)));
    let loading = move || state.with(|s| s.logs.is_loading());

    view! {
        <div class="tab-toolbar">
            <button
                class="btn btn-secondary btn-small"
                disabled=loading
                on:click={
                    let on_refresh = on_refresh.clone();
                    move |_| on_refresh(())
                }
            >
                "更新"
            </button>
        </div>
        <div class="table-container">
            <table id="logsTable">
                <thead>
                    <tr>
                        <th>"日時"</th>
                        <th>"商品管理番号"</th>
                        <th>"処理"</th>
                        <th>"結果"</th>
                        <th>"メッセージ"</th>
                    </tr>
                </thead>
                <tbody inner_html=move || body.get()></tbody>
            </table>
        </div>
    }
}
