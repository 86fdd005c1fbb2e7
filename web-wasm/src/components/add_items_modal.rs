//! 対象商品の一括追加モーダル

use leptos::prelude::*;
use samurai_admin_common::AppState;

#[component]
pub fn AddItemsModal<FC, FS>(state: RwSignal<AppState>, on_close: FC, on_submit: FS) -> impl IntoView
where
    FC: Fn(()) + Clone + Send + Sync + 'static,
    FS: Fn(()) + Clone + Send + Sync + 'static,
{
    let open = move || state.with(|s| s.add_items.open);
    let loading = move || state.with(|s| s.add_items.loading);
    let count = move || state.with(|s| s.add_items.preview_count());

    view! {
        <Show when=open>
            <div class="modal-overlay">
                <div class="modal">
                    <h3>"対象商品を追加"</h3>
                    <p class="text-muted">"商品管理番号を改行またはカンマ区切りで入力してください"</p>
                    <textarea
                        rows="8"
                        prop:value=move || state.with(|s| s.add_items.input.clone())
                        on:input=move |ev| {
                            state.update(|s| s.add_items.input = event_target_value(&ev));
                        }
                    ></textarea>
                    <p class="preview-count">{move || format!("{}件", count())}</p>
                    <div class="modal-actions">
                        <button
                            class="btn btn-secondary"
                            disabled=loading
                            on:click={
                                let on_close = on_close.clone();
                                move |_| on_close(())
                            }
                        >
                            "キャンセル"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || loading() || count() == 0
                            on:click={
                                let on_submit = on_submit.clone();
                                move |_| on_submit(())
                            }
                        >
                            {move || if loading() { "追加中..." } else { "追加" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
