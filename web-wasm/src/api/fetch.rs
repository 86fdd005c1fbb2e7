//! fetch API による送信層

use samurai_admin_common::{Error, Result, Transport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn js_error(e: JsValue) -> Error {
    gloo::console::error!("fetch failed:", e.clone());
    Error::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// 本文は text/plain で送る（プリフライトなしで Apps Script に届く形式）
async fn post_text(url: &str, body: &str) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request
        .headers()
        .set("Content-Type", "text/plain;charset=utf-8")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("応答本文が文字列ではありません"))
}

impl Transport for FetchTransport {
    async fn post(&self, url: &str, body: String) -> Result<String> {
        post_text(url, &body).await.map_err(js_error)
    }
}
