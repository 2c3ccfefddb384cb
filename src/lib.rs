//! Core of the browser chat widget: the message model, the `/chat` wire
//! contract and the [`ChatWidget`] component. Page elements and the network
//! are reached through the [`MessageLog`], [`InputField`] and
//! [`ChatTransport`] traits, so the widget runs the same against a live
//! document or in-memory stand-ins.

pub mod config;
pub mod dom;
pub mod errors;
pub mod models;
pub mod transport;
pub mod widget;

#[cfg(test)]
mod fixtures;

pub use config::WidgetConfig;
pub use dom::{InputField, MessageLog};
pub use errors::ChatError;
pub use models::{ChatOutcome, ChatRequest, ChatResponse, HttpReply, Message, PendingReply, Role};
pub use transport::ChatTransport;
pub use widget::ChatWidget;
