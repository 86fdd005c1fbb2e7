//! 対象商品タブ
//!
//! 行はHTML文字列で描画し、削除ボタンのクリックは tbody でまとめて受ける

use leptos::prelude::*;
use samurai_admin_common::render;
use samurai_admin_common::AppState;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// クリック位置から削除ボタンの商品管理番号と行番号を取り出す
fn delete_target(ev: &MouseEvent) -> Option<(String, u32)> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(r#"[data-action="delete"]"#).ok()??;
    let item = button.get_attribute("data-item")?;
    let row = button.get_attribute("data-row")?.parse().ok()?;
    Some((item, row))
}

#[component]
pub fn ItemsTab<FA, FD>(state: RwSignal<AppState>, on_add: FA, on_delete: FD) -> impl IntoView
where
    FA: Fn(()) + Clone + Send + Sync + 'static,
    FD: Fn(String, u32) + Clone + Send + Sync + 'static,
{
    let body = Memo::new(move |_| state.with(|s| render::items_body(&s.items)));

    view! {
        <div class="tab-toolbar">
            <button
                class="btn btn-primary btn-small"
                on:click={
                    let on_add = on_add.clone();
                    move |_| on_add(())
                }
            >
                "＋ 対象商品を追加"
            </button>
        </div>
        <div class="table-container">
            <table id="itemsTable">
                <thead>
                    <tr>
                        <th>"商品管理番号"</th>
                        <th>"現在の商品名"</th>
                        <th>"ベース商品名"</th>
                        <th>"状態"</th>
                        <th>"最終更新"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody
                    inner_html=move || body.get()
                    on:click=move |ev| {
                        if let Some((item, row)) = delete_target(&ev) {
                            on_delete(item, row);
                        }
                    }
                ></tbody>
            </table>
        </div>
    }
}
