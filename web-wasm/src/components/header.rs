//! ヘッダーコンポーネント

use leptos::prelude::*;
use samurai_admin_common::{AppState, Phase};

#[component]
pub fn Header<FL>(state: RwSignal<AppState>, on_logout: FL) -> impl IntoView
where
    FL: Fn(()) + Clone + Send + Sync + 'static,
{
    view! {
        <header class="header">
            <h1>"商品名自動修正侍"</h1>
            <Show when=move || state.with(|s| s.phase == Phase::Authenticated)>
                <div class="user-info">
                    <span class="shop-name">{move || state.with(|s| s.shop_name.clone())}</span>
                    <button
                        class="btn btn-secondary btn-small"
                        on:click={
                            let on_logout = on_logout.clone();
                            move |_| on_logout(())
                        }
                    >
                        "ログアウト"
                    </button>
                </div>
            </Show>
        </header>
    }
}
