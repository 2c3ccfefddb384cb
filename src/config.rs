use tracing::warn;

const DEFAULT_ENDPOINT: &str = "/chat";
const DEFAULT_FALLBACK: &str = "No response";

/// Element ids, endpoint and presentation settings for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub form_id: String,
    pub input_id: String,
    pub log_id: String,
    pub class_prefix: String,
    pub failure_class: String,
    pub fallback_answer: String,
    /// `None` waits for the server indefinitely.
    pub request_timeout_ms: Option<u32>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            form_id: "chat-form".to_string(),
            input_id: "message-input".to_string(),
            log_id: "messages".to_string(),
            class_prefix: "message".to_string(),
            failure_class: "error".to_string(),
            fallback_answer: DEFAULT_FALLBACK.to_string(),
            request_timeout_ms: None,
        }
    }
}

impl WidgetConfig {
    /// Defaults, overridden by whatever `lookup` returns for `endpoint`,
    /// `fallback` and `timeout-ms`. In the browser the lookup reads the
    /// form's `data-*` attributes.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(endpoint) = non_blank("endpoint") {
            config.endpoint = endpoint;
        }
        if let Some(fallback) = non_blank("fallback") {
            config.fallback_answer = fallback;
        }
        if let Some(raw) = non_blank("timeout-ms") {
            match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => config.request_timeout_ms = Some(ms),
                _ => warn!("Ignoring invalid timeout-ms override: {raw:?}"),
            }
        }
        config
    }
}
