//! Widget configuration.
//!
//! The host page may embed a JSON block to override any of the defaults:
//!
//! ```html
//! <script type="application/json" id="chat-widget-config">
//!   { "chat_endpoint": "/chat", "avatar_primary": "/static/images/logo.png" }
//! </script>
//! ```

use serde::Deserialize;
use shared::endpoints;

/// Id of the inline JSON element the configuration is read from
pub const CONFIG_ELEMENT_ID: &str = "chat-widget-config";

/// A canned question shown as a chip under the messages
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuickReply {
    pub label: String,
    /// Text to send; the label is sent when this is empty
    #[serde(default)]
    pub payload: String,
}

impl QuickReply {
    pub fn text(&self) -> &str {
        let payload = self.payload.trim();
        if payload.is_empty() {
            self.label.trim()
        } else {
            payload
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Element the widget is mounted into (falls back to `<body>`)
    pub mount_id: String,
    pub input_id: String,
    pub send_button_id: String,
    pub messages_id: String,
    pub toggle_id: String,
    pub chat_endpoint: String,
    pub vote_endpoint: String,
    pub avatar_primary: String,
    pub avatar_fallback: String,
    /// Greeting shown as the first bot message; empty disables it
    pub welcome_message: String,
    pub quick_replies: Vec<QuickReply>,
    /// Show a short-lived notice when sending empty input instead of ignoring it
    pub empty_input_notice: bool,
    /// Delay before the input is focused after opening the widget
    pub focus_delay_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mount_id: "chat-widget".to_string(),
            input_id: "user-input".to_string(),
            send_button_id: "send-btn".to_string(),
            messages_id: "chat-body".to_string(),
            toggle_id: "chat-toggle".to_string(),
            chat_endpoint: endpoints::CHAT.to_string(),
            vote_endpoint: endpoints::VOTE.to_string(),
            avatar_primary: "/static/images/chatbot-logo.png".to_string(),
            avatar_fallback: "/chatbot-logo.png".to_string(),
            welcome_message: "Hi! Ask me about admissions, fees, courses, or contact.".to_string(),
            quick_replies: Vec::new(),
            empty_input_notice: true,
            focus_delay_ms: 120,
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON override block. Unknown keys are ignored, missing keys keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Load the configuration from the host page, falling back to defaults
pub fn load_config() -> WidgetConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(json) = json else {
        log::debug!("No #{} element, using default widget config", CONFIG_ELEMENT_ID);
        return WidgetConfig::default();
    };

    match WidgetConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid widget config, using defaults: {}", e);
            WidgetConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.chat_endpoint, "/chat");
        assert_eq!(config.vote_endpoint, "/api/vote");
        assert_eq!(config.focus_delay_ms, 120);
        assert!(config.empty_input_notice);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = WidgetConfig::from_json(
            r#"{"chat_endpoint": "/api/chat", "empty_input_notice": false, "extra": 1}"#,
        )
        .unwrap();
        assert_eq!(config.chat_endpoint, "/api/chat");
        assert!(!config.empty_input_notice);
        assert_eq!(config.input_id, "user-input");
        assert_eq!(config.avatar_fallback, "/chatbot-logo.png");
    }

    #[test]
    fn test_quick_replies() {
        let config = WidgetConfig::from_json(
            r#"{"quick_replies": [
                {"label": "Fees", "payload": "What are the fees?"},
                {"label": " Admissions "}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.quick_replies.len(), 2);
        assert_eq!(config.quick_replies[0].text(), "What are the fees?");
        assert_eq!(config.quick_replies[1].text(), "Admissions");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(WidgetConfig::from_json("{not json").is_err());
    }
}
