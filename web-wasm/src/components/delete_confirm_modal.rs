//! 削除確認モーダル

use leptos::prelude::*;
use samurai_admin_common::AppState;

#[component]
pub fn DeleteConfirmModal<FC, FD>(
    state: RwSignal<AppState>,
    on_cancel: FC,
    on_confirm: FD,
) -> impl IntoView
where
    FC: Fn(()) + Clone + Send + Sync + 'static,
    FD: Fn(()) + Clone + Send + Sync + 'static,
{
    let loading = move || state.with(|s| s.delete.loading);
    let item = move || {
        state.with(|s| {
            s.delete
                .pending
                .as_ref()
                .map(|p| p.item_manage_number.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || state.with(|s| s.delete.is_open())>
            <div class="modal-overlay">
                <div class="modal">
                    <h3>"対象商品の削除"</h3>
                    <p>
                        "「"<strong>{item}</strong>"」を対象商品から削除しますか？"
                    </p>
                    <div class="modal-actions">
                        <button
                            class="btn btn-secondary"
                            disabled=loading
                            on:click={
                                let on_cancel = on_cancel.clone();
                                move |_| on_cancel(())
                            }
                        >
                            "キャンセル"
                        </button>
                        <button
                            class="btn btn-danger"
                            disabled=loading
                            on:click={
                                let on_confirm = on_confirm.clone();
                                move |_| on_confirm(())
                            }
                        >
                            {move || if loading() { "削除中..." } else { "削除" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
