//! API client types for the chat and vote endpoints
//!
//! This module defines the JSON contract between the widget and the
//! backend. Both response shapes the backend has historically produced
//! are accepted and normalized into a single [`BotReply`].

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::protocol::FALLBACK_REPLY;

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ApiError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),
    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Failed to build the request or parse the response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Request body for `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The `response` field of a chat reply.
///
/// Older backends send a bare markup string, newer ones an object that
/// carries the FAQ id next to the markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Text(String),
    Markup {
        #[serde(default)]
        html: String,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "deserialize_faq_id"
        )]
        faq_id: Option<String>,
    },
}

/// Response body for `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: ResponseBody,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_faq_id"
    )]
    pub faq_id: Option<String>,
}

/// FAQ ids are database keys and may arrive as numbers or strings.
/// Empty strings count as no id.
fn deserialize_faq_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFaqId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawFaqId>::deserialize(deserializer)? {
        Some(RawFaqId::Text(id)) if !id.is_empty() => Some(id),
        Some(RawFaqId::Number(id)) => Some(id.to_string()),
        Some(RawFaqId::Text(_)) | None => None,
    })
}

/// A normalized bot answer: markup plus the optional FAQ id used for voting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    pub html: String,
    pub faq_id: Option<String>,
}

impl BotReply {
    pub fn new(html: impl Into<String>, faq_id: Option<String>) -> Self {
        Self {
            html: html.into(),
            faq_id,
        }
    }

    /// The fixed reply used when the chat request fails.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_REPLY, None)
    }
}

impl From<ChatResponse> for BotReply {
    fn from(resp: ChatResponse) -> Self {
        match resp.response {
            ResponseBody::Text(html) => BotReply::new(html, resp.faq_id),
            // The id nested next to the markup takes precedence over the top-level one
            ResponseBody::Markup { html, faq_id } => BotReply::new(html, faq_id.or(resp.faq_id)),
        }
    }
}

/// Request body for `POST /api/vote`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub faq_id: String,
    pub helpful: bool,
}

impl VoteRequest {
    pub fn new(faq_id: impl Into<String>, helpful: bool) -> Self {
        Self {
            faq_id: faq_id.into(),
            helpful,
        }
    }
}

/// API endpoint definitions
pub mod endpoints {
    pub const CHAT: &str = "/chat";
    pub const VOTE: &str = "/api/vote";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> BotReply {
        serde_json::from_value::<ChatResponse>(value)
            .expect("valid chat response")
            .into()
    }

    #[test]
    fn chat_request_wire_shape() {
        let body = serde_json::to_value(ChatRequest::new("what are the fees?")).unwrap();
        assert_eq!(body, json!({"message": "what are the fees?"}));
    }

    #[test]
    fn string_response_with_top_level_id() {
        let reply = parse(json!({"response": "Hello", "faq_id": "f1"}));
        assert_eq!(reply.html, "Hello");
        assert_eq!(reply.faq_id.as_deref(), Some("f1"));
    }

    #[test]
    fn string_response_without_id() {
        let reply = parse(json!({"response": "Please type a message."}));
        assert_eq!(reply.html, "Please type a message.");
        assert_eq!(reply.faq_id, None);
    }

    #[test]
    fn object_response_with_nested_id() {
        let reply = parse(json!({"response": {"html": "<b>Fees</b>", "faq_id": "12"}}));
        assert_eq!(reply.html, "<b>Fees</b>");
        assert_eq!(reply.faq_id.as_deref(), Some("12"));
    }

    #[test]
    fn nested_id_wins_over_top_level() {
        let reply = parse(json!({
            "response": {"html": "x", "faq_id": "inner"},
            "faq_id": "outer"
        }));
        assert_eq!(reply.faq_id.as_deref(), Some("inner"));
    }

    #[test]
    fn object_response_falls_back_to_top_level_id() {
        let reply = parse(json!({"response": {"html": "x"}, "faq_id": "outer"}));
        assert_eq!(reply.faq_id.as_deref(), Some("outer"));
    }

    #[test]
    fn object_response_without_html_is_empty() {
        let reply = parse(json!({"response": {"faq_id": "7"}}));
        assert_eq!(reply.html, "");
        assert_eq!(reply.faq_id.as_deref(), Some("7"));
    }

    #[test]
    fn integer_id_at_top_level() {
        let reply = parse(json!({"response": "Fees are listed online.", "faq_id": 12}));
        assert_eq!(reply.html, "Fees are listed online.");
        assert_eq!(reply.faq_id.as_deref(), Some("12"));
    }

    #[test]
    fn integer_id_nested_in_response() {
        let reply = parse(json!({"response": {"html": "<p>Fees</p>", "faq_id": 7}}));
        assert_eq!(reply.html, "<p>Fees</p>");
        assert_eq!(reply.faq_id.as_deref(), Some("7"));
    }

    #[test]
    fn empty_or_null_id_is_absent() {
        assert_eq!(parse(json!({"response": "x", "faq_id": ""})).faq_id, None);
        assert_eq!(parse(json!({"response": "x", "faq_id": null})).faq_id, None);
        assert_eq!(
            parse(json!({"response": {"html": "x", "faq_id": ""}, "faq_id": 3})).faq_id,
            Some("3".to_string())
        );
    }

    #[test]
    fn missing_response_field_is_rejected() {
        assert!(serde_json::from_value::<ChatResponse>(json!({"status": "ok"})).is_err());
    }

    #[test]
    fn vote_request_wire_shape() {
        let body = serde_json::to_value(VoteRequest::new("f1", false)).unwrap();
        assert_eq!(body, json!({"faq_id": "f1", "helpful": false}));
    }

    #[test]
    fn fallback_reply_has_no_id() {
        let reply = BotReply::fallback();
        assert_eq!(reply.html, FALLBACK_REPLY);
        assert!(reply.faq_id.is_none());
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::Server {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (502): Bad Gateway");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Network error: offline"
        );
    }
}
