use crate::errors::ChatError;
use crate::models::HttpReply;

/// Sends one JSON request to the chat endpoint.
///
/// Implementations set `Content-Type: application/json`, wait for the full
/// body, and return any HTTP status as an [`HttpReply`]. Only failures that
/// produce no reply at all (network errors, timeouts) are errors.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<HttpReply, ChatError>;
}
