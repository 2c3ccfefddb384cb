use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of the conversation as it is rendered in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Set on assistant bubbles that report a failed request.
    pub failed: bool,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), failed: false }
    }

    pub fn failure(error: &ChatError) -> Self {
        Self { role: Role::Assistant, content: error.to_string(), failed: true }
    }

    /// `"<prefix> <role>"`, with the failure class appended for failed turns.
    pub fn css_class(&self, prefix: &str, failure_class: &str) -> String {
        if self.failed {
            format!("{prefix} {} {failure_class}", self.role)
        } else {
            format!("{prefix} {}", self.role)
        }
    }
}

/// Request body for `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn to_body(&self) -> Result<String, ChatError> {
        serde_json::to_string(self).map_err(ChatError::Serialize)
    }
}

/// Reply body of `POST /chat`. Only `answer` is read; it is kept as a raw JSON
/// value because servers are not strict about its type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<Value>,
}

impl ChatResponse {
    /// Parses a reply body. A `null` body has no fields to read and is an
    /// error; any other JSON value that is not an object carries no answer.
    pub fn from_body(body: &str) -> Result<Self, ChatError> {
        let value: Value = serde_json::from_str(body).map_err(ChatError::Parse)?;
        match value {
            Value::Object(_) => serde_json::from_value(value).map_err(ChatError::Parse),
            Value::Null => Err(ChatError::NullBody),
            _ => Ok(Self::default()),
        }
    }

    /// The answer text, if the field holds a truthy value, coerced to a string
    /// the way a browser's `String(value)` does.
    pub fn answer(&self) -> Option<String> {
        match self.answer.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64().is_some_and(|f| f == 0.0) => None,
            other => Some(coerce_to_string(other)),
        }
    }

    pub fn answer_or(&self, fallback: &str) -> String {
        self.answer().unwrap_or_else(|| fallback.to_string())
    }
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            // f64's Display drops a zero fraction: 1.0 -> "1"
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        // nulls inside an array stringify as empty slots
        Value::Array(items) => items.iter().map(coerce_to_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Status and body of an HTTP reply, as handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `detail` string of an error body, if the server sent one.
    pub fn detail(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        match value.get("detail")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::String(_) | Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// A submission whose user bubble is rendered and whose reply is still owed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub seq: u64,
    pub text: String,
}

/// How a single request ended.
#[derive(Debug)]
pub enum ChatOutcome {
    Answered { seq: u64, content: String },
    Failed { seq: u64, error: ChatError },
}

impl ChatOutcome {
    pub fn seq(&self) -> u64 {
        match self {
            ChatOutcome::Answered { seq, .. } | ChatOutcome::Failed { seq, .. } => *seq,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, ChatOutcome::Answered { .. })
    }
}
