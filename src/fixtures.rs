//! In-memory stand-ins for the page and the network, used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use serde_json::Value;
use tokio::sync::oneshot;

use crate::dom::{InputField, MessageLog};
use crate::errors::ChatError;
use crate::models::HttpReply;
use crate::transport::ChatTransport;

const NODE_HEIGHT: u32 = 24;

/// Records appended nodes as `(class, text)` pairs and tracks scroll state.
#[derive(Default)]
pub struct RecordingLog {
    nodes: RefCell<Vec<(String, String)>>,
    scroll_top: Cell<u32>,
    scroll_calls: Cell<usize>,
}

impl RecordingLog {
    pub fn nodes(&self) -> Vec<(String, String)> {
        self.nodes.borrow().clone()
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top.get()
    }

    pub fn scroll_height(&self) -> u32 {
        self.nodes.borrow().len() as u32 * NODE_HEIGHT
    }

    pub fn scroll_calls(&self) -> usize {
        self.scroll_calls.get()
    }
}

impl MessageLog for RecordingLog {
    fn append(&self, class_name: &str, text: &str) {
        self.nodes.borrow_mut().push((class_name.to_string(), text.to_string()));
    }

    fn scroll_to_bottom(&self) {
        self.scroll_top.set(self.scroll_height());
        self.scroll_calls.set(self.scroll_calls.get() + 1);
    }
}

pub struct MemoryInput(RefCell<String>);

impl MemoryInput {
    pub fn new(value: &str) -> Self {
        Self(RefCell::new(value.to_string()))
    }

    pub fn set(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}

impl InputField for MemoryInput {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

type ScriptedResult = Result<HttpReply, ChatError>;

/// Replies from a queue, or, for messages registered with [`deferred`],
/// waits until the test sends the reply.
///
/// [`deferred`]: ScriptedTransport::deferred
#[derive(Default)]
pub struct ScriptedTransport {
    queued: RefCell<VecDeque<ScriptedResult>>,
    deferred: RefCell<HashMap<String, oneshot::Receiver<ScriptedResult>>>,
    requests: RefCell<Vec<(String, String)>>,
}

impl ScriptedTransport {
    pub fn replying(replies: impl IntoIterator<Item = HttpReply>) -> Self {
        Self::from_results(replies.into_iter().map(Ok))
    }

    pub fn from_results(results: impl IntoIterator<Item = ScriptedResult>) -> Self {
        Self { queued: RefCell::new(results.into_iter().collect()), ..Self::default() }
    }

    /// Keyed by the `message` text of the request.
    pub fn deferred<'a>(
        pending: impl IntoIterator<Item = (&'a str, oneshot::Receiver<ScriptedResult>)>,
    ) -> Self {
        let deferred = pending.into_iter().map(|(k, rx)| (k.to_string(), rx)).collect();
        Self { deferred: RefCell::new(deferred), ..Self::default() }
    }

    /// Every `(endpoint, body)` pair posted so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }
}

impl ChatTransport for ScriptedTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<HttpReply, ChatError> {
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_default();
        self.requests.borrow_mut().push((endpoint.to_string(), body));

        let waiting = self.deferred.borrow_mut().remove(&message);
        if let Some(rx) = waiting {
            return rx.await.unwrap_or_else(|_| Err(ChatError::network("reply dropped")));
        }
        self.queued
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::network("no scripted reply")))
    }
}
