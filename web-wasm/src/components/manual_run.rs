//! 手動実行パネル

use leptos::prelude::*;
use samurai_admin_common::AppState;

#[component]
pub fn ManualRun<FR>(state: RwSignal<AppState>, on_run: FR) -> impl IntoView
where
    FR: Fn(()) + Clone + Send + Sync + 'static,
{
    let loading = move || state.with(|s| s.run.loading);
    let result = move || state.with(|s| s.run.result.clone());

    view! {
        <div class="manual-run">
            <button
                id="runDryRunBtn"
                class="btn btn-primary"
                disabled=loading
                on:click={
                    let on_run = on_run.clone();
                    move |_| on_run(())
                }
            >
                {move || if loading() { "実行中..." } else { "今すぐ実行" }}
            </button>
            {move || result().map(|result| view! {
                <div class="run-result" class:success=result.success class:error=!result.success>
                    {result.message}
                </div>
            })}
        </div>
    }
}
