//! 設定パネルコンポーネント

use leptos::prelude::*;
use samurai_admin_common::{AppState, Mode, Region};

#[component]
pub fn SettingsPanel<FS>(state: RwSignal<AppState>, on_save: FS) -> impl IntoView
where
    FS: Fn(()) + Clone + Send + Sync + 'static,
{
    let form = move || state.with(|s| s.settings.form.clone());
    let saving = move || state.with(|s| s.settings.saving);
    let loading = move || state.with(|s| s.settings.status.is_loading());
    let loaded = move || state.with(|s| s.settings.status.loaded().is_some());
    let failed = move || {
        state.with(|s| match &s.settings.status {
            Region::Failed(message) => Some(message.clone()),
            _ => None,
        })
    };
    // サーバーが未知のモードを返した場合も選択肢に出す
    let unknown_mode = move || {
        let mode = Mode::from(form().mode);
        match mode {
            Mode::Other(_) => Some(mode.as_str().to_string()),
            Mode::TargetList => None,
        }
    };

    view! {
        <div class="settings-panel">
            <Show when=loading>
                <p class="loading">"読み込み中..."</p>
            </Show>
            {move || failed().map(|message| view! { <p class="error">{message}</p> })}

            // 読み込めていない間はフォームを出さない
            <Show when=loaded>
                <div class="settings-grid">
                    <div class="form-group">
                        <label for="settingMode">"動作モード"</label>
                        // 初回は option の selected、再読み込み後は select の value で合わせる
                        <select
                            id="settingMode"
                            prop:value=move || form().mode
                            on:change=move |ev| {
                                state.update(|s| s.settings.form.mode = event_target_value(&ev));
                            }
                        >
                            <option value="TARGET_LIST" selected=move || unknown_mode().is_none()>
                                {Mode::TargetList.label().to_string()}
                            </option>
                            {move || unknown_mode().map(|mode| view! {
                                <option value=mode.clone() selected=true>{mode.clone()}</option>
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="settingDryRun">"実行モード"</label>
                        <select
                            id="settingDryRun"
                            prop:value=move || form().dry_run.to_string()
                            on:change=move |ev| {
                                let dry_run = event_target_value(&ev) == "true";
                                state.update(|s| s.settings.form.dry_run = dry_run);
                            }
                        >
                            <option value="true" selected=move || form().dry_run>
                                "DryRun（変更しない）"
                            </option>
                            <option value="false" selected=move || !form().dry_run>
                                "本番（商品名を更新）"
                            </option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="settingMaxItems">"1回の最大処理件数"</label>
                        <input
                            type="number"
                            id="settingMaxItems"
                            min="1"
                            prop:value=move || form().max_items_per_run
                            on:input=move |ev| {
                                state.update(|s| {
                                    s.settings.form.max_items_per_run = event_target_value(&ev)
                                });
                            }
                        />
                    </div>

                    <div class="form-group checkbox-group">
                        <label>
                            <input
                                type="checkbox"
                                id="settingNotifySlack"
                                prop:checked=move || form().notify_slack
                                on:change=move |ev| {
                                    state.update(|s| {
                                        s.settings.form.notify_slack = event_target_checked(&ev)
                                    });
                                }
                            />
                            "Slack通知"
                        </label>
                        <label>
                            <input
                                type="checkbox"
                                id="settingNotifyEmail"
                                prop:checked=move || form().notify_email
                                on:change=move |ev| {
                                    state.update(|s| {
                                        s.settings.form.notify_email = event_target_checked(&ev)
                                    });
                                }
                            />
                            "メール通知"
                        </label>
                    </div>
                </div>

                <button
                    class="btn btn-primary"
                    disabled=move || saving() || loading() || !loaded()
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(())
                    }
                >
                    {move || if saving() { "保存中..." } else { "設定を保存" }}
                </button>
            </Show>
        </div>
    }
}
