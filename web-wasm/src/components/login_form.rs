//! ログインフォーム

use leptos::prelude::*;
use samurai_admin_common::AppState;

#[component]
pub fn LoginForm<FL>(state: RwSignal<AppState>, on_login: FL) -> impl IntoView
where
    FL: Fn(()) + Clone + Send + Sync + 'static,
{
    let loading = move || state.with(|s| s.login.loading);
    let error = move || state.with(|s| s.login.error.clone());

    view! {
        <div class="login-page">
            <form
                class="login-card"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_login(());
                }
            >
                <h2>"ログイン"</h2>

                <div class="form-group">
                    <label for="userId">"ユーザーID"</label>
                    <input
                        type="text"
                        id="userId"
                        autocomplete="username"
                        prop:value=move || state.with(|s| s.login.user_id.clone())
                        on:input=move |ev| {
                            state.update(|s| s.login.user_id = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="password">"パスワード"</label>
                    <input
                        type="password"
                        id="password"
                        autocomplete="current-password"
                        prop:value=move || state.with(|s| s.login.password.clone())
                        on:input=move |ev| {
                            state.update(|s| s.login.password = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="error-message" class:show=move || error().is_some()>
                    {move || error().unwrap_or_default()}
                </div>

                <button type="submit" class="btn btn-primary btn-block" disabled=loading>
                    {move || if loading() { "ログイン中..." } else { "ログイン" }}
                </button>
            </form>
        </div>
    }
}
