//! トースト通知

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use samurai_admin_common::AppState;

/// 表示してから自動で消えるまで
const TOAST_MILLIS: u32 = 3_000;

#[component]
pub fn ToastContainer<FD>(state: RwSignal<AppState>, on_dismiss: FD) -> impl IntoView
where
    FD: Fn(u64) + Clone + Send + Sync + 'static,
{
    view! {
        <div class="toast-container" id="toastContainer">
            <For
                each=move || state.with(|s| s.toasts.clone())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let expire = on_dismiss.clone();
                    Timeout::new(TOAST_MILLIS, move || expire(id)).forget();
                    let on_click = on_dismiss.clone();
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.as_str())
                            on:click=move |_| on_click(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
