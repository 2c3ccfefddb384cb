use std::pin::pin;

use chat_widget::{ChatError, ChatTransport, HttpReply, WidgetConfig};
use futures_util::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// Posts chat requests with the browser's `fetch`.
pub struct FetchTransport {
    timeout_ms: Option<u32>,
}

impl FetchTransport {
    pub fn new(config: &WidgetConfig) -> Self {
        Self { timeout_ms: config.request_timeout_ms }
    }

    async fn fetch(endpoint: &str, body: String) -> Result<HttpReply, ChatError> {
        let resp = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ChatError::network(format!("Could not build request: {e}")))?
            .send()
            .await
            .map_err(|e| ChatError::network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ChatError::network(format!("Could not read body: {e}")))?;

        Ok(HttpReply { status, body })
    }
}

impl ChatTransport for FetchTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<HttpReply, ChatError> {
        let request = pin!(Self::fetch(endpoint, body));
        let Some(after_ms) = self.timeout_ms else {
            return request.await;
        };

        match select(request, pin!(TimeoutFuture::new(after_ms))).await {
            Either::Left((reply, _)) => reply,
            Either::Right(((), _)) => Err(ChatError::Timeout { after_ms }),
        }
    }
}
