use thiserror::Error;

/// Everything that can go wrong while mounting the widget or completing a
/// chat round-trip. The display string is what a failure bubble shows.
#[derive(Debug, Error)]
pub enum ChatError {
    // ── Mount errors ─────────────────────────────────────────────────────────
    #[error("No browser document is available")]
    MissingDocument,

    #[error("Element '#{id}' not found")]
    MissingElement { id: String },

    #[error("Element '#{id}' is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("Failed to register submit listener: {message}")]
    Listener { message: String },

    // ── Request errors ───────────────────────────────────────────────────────
    #[error("Could not encode request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("No reply after {after_ms} ms")]
    Timeout { after_ms: u32 },

    #[error("Server error: {status}{}", with_detail(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Parse error: reply body was null")]
    NullBody,
}

impl ChatError {
    pub fn network(message: impl Into<String>) -> Self {
        ChatError::Network { message: message.into() }
    }

    pub fn is_mount(&self) -> bool {
        matches!(
            self,
            ChatError::MissingDocument
                | ChatError::MissingElement { .. }
                | ChatError::WrongElementType { .. }
                | ChatError::Listener { .. }
        )
    }

    /// True when the request never produced an HTTP reply.
    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Network { .. } | ChatError::Timeout { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn with_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}
