//! イベント一覧タブ

use leptos::prelude::*;
use samurai_admin_common::render;
use samurai_admin_common::AppState;

#[component]
pub fn EventsTab(state: RwSignal<AppState>) -> impl IntoView {
    let body = Memo::new(move |_| state.with(|s| render::events_body(&s.events)));

    view! {
        <div class="table-container">
            <table id="eventsTable">
                <thead>
                    <tr>
                        <th>"イベントキー"</th>
                        <th>"プレフィックス"</th>
                        <th>"開始"</th>
                        <th>"終了"</th>
                        <th>"状態"</th>
                    </tr>
                </thead>
                <tbody inner_html=move || body.get()></tbody>
            </table>
        </div>
    }
}
