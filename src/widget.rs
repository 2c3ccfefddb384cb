use std::cell::Cell;

use tracing::{debug, error, info};

use crate::config::WidgetConfig;
use crate::dom::{InputField, MessageLog};
use crate::errors::ChatError;
use crate::models::{ChatOutcome, ChatRequest, ChatResponse, Message, PendingReply, Role};
use crate::transport::ChatTransport;

/// Binds an input field and a message log to a chat endpoint.
///
/// Submissions are independent: several requests may be in flight at once and
/// their replies are rendered in the order they resolve.
pub struct ChatWidget<L, I, T> {
    log: L,
    input: I,
    transport: T,
    config: WidgetConfig,
    next_seq: Cell<u64>,
}

impl<L, I, T> ChatWidget<L, I, T>
where
    L: MessageLog,
    I: InputField,
    T: ChatTransport,
{
    pub fn new(log: L, input: I, transport: T, config: WidgetConfig) -> Self {
        Self { log, input, transport, config, next_seq: Cell::new(1) }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Handles one form submission end to end. Returns `None` when the input
    /// was blank and nothing happened.
    pub async fn on_submit(&self) -> Option<ChatOutcome> {
        let pending = self.submit()?;
        Some(self.deliver(pending).await)
    }

    /// Synchronous half of a submission: renders the user's message and clears
    /// the input. Blank input is ignored without side effects.
    pub fn submit(&self) -> Option<PendingReply> {
        let text = trim_input(&self.input.value()).to_string();
        if text.is_empty() {
            return None;
        }

        self.add_message(Role::User, &text);
        self.input.clear();

        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        debug!(seq, len = text.len(), "chat submission accepted");

        Some(PendingReply { seq, text })
    }

    /// Asynchronous half: sends the request and renders exactly one assistant
    /// bubble, carrying the answer, the fallback, or the failure.
    pub async fn deliver(&self, pending: PendingReply) -> ChatOutcome {
        let PendingReply { seq, text } = pending;
        match self.send_chat(&text).await {
            Ok(content) => {
                self.add_message(Role::Assistant, &content);
                ChatOutcome::Answered { seq, content }
            }
            Err(e) => {
                error!(seq, "chat request failed: {e}");
                self.render(&Message::failure(&e));
                ChatOutcome::Failed { seq, error: e }
            }
        }
    }

    pub fn add_message(&self, role: Role, content: &str) {
        self.render(&Message::new(role, content));
    }

    /// Posts `text` to the endpoint and returns the answer, or the fallback
    /// when the reply carries none.
    pub async fn send_chat(&self, text: &str) -> Result<String, ChatError> {
        let body = ChatRequest { message: text.to_string() }.to_body()?;
        let reply = self.transport.post_json(&self.config.endpoint, body).await?;

        if !reply.ok() {
            return Err(ChatError::Status { status: reply.status, detail: reply.detail() });
        }

        let response = ChatResponse::from_body(&reply.body)?;
        Ok(response.answer().unwrap_or_else(|| {
            info!("reply carried no answer, using fallback");
            self.config.fallback_answer.clone()
        }))
    }

    fn render(&self, message: &Message) {
        let class_name = message.css_class(&self.config.class_prefix, &self.config.failure_class);
        self.log.append(&class_name, &message.content);
        self.log.scroll_to_bottom();
    }
}

/// Whitespace trim that also strips U+FEFF, as browsers do.
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
