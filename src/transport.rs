//! reqwest による送信層

use crate::error::{AdminError, Result};
use samurai_admin_common::{Error, Transport};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// `timeout` が None なら応答を待ち続ける
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdminError::Http(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    /// プリフライトを避けるため本文は text/plain で送る
    async fn post(&self, url: &str, body: String) -> samurai_admin_common::Result<String> {
        tracing::debug!(url, bytes = body.len(), "POST");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        tracing::debug!(status = %response.status(), "response");
        response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))
    }
}
