//! ステータスカード

use leptos::prelude::*;
use samurai_admin_common::AppState;

#[component]
pub fn StatusCards(state: RwSignal<AppState>) -> impl IntoView {
    let cards = Memo::new(move |_| state.with(|s| s.cards.clone()));

    view! {
        <div class="status-cards">
            <div class="status-card">
                <span class="status-label">"対象商品数"</span>
                <span class="status-value" id="targetItemsCount">
                    {move || cards.with(|c| c.target_items_count.clone())}
                </span>
            </div>
            <div class="status-card">
                <span class="status-label">"現在のモード"</span>
                <span class="status-value" id="currentMode">
                    {move || cards.with(|c| c.current_mode.clone())}
                </span>
            </div>
            <div class="status-card">
                <span class="status-label">"次回イベント"</span>
                <span class="status-value" id="nextEvent">
                    {move || cards.with(|c| c.next_event.clone())}
                </span>
            </div>
            <div class="status-card">
                <span class="status-label">"有効期限"</span>
                <span class="status-value" id="expiryDate">
                    {move || cards.with(|c| c.expiry.clone())}
                </span>
            </div>
        </div>
    }
}
