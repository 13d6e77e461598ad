//! HTTP clients for the chat and vote endpoints.
//!
//! Failures never leave this module: a failed chat request turns into the
//! fixed fallback reply, a failed vote is only logged.

use crate::utils;
use gloo_net::http::Request;
use shared::{ApiError, BotReply, ChatRequest, ChatResponse, VoteRequest};
use wasm_bindgen_futures::spawn_local;

/// Posts user messages to the chat endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ChatClient {
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Send one message and wait for the bot's answer.
    ///
    /// Always resolves; any failure yields [`BotReply::fallback`].
    pub async fn send(&self, text: &str) -> BotReply {
        reply_from_result(self.post(text).await)
    }

    async fn post(&self, text: &str) -> Result<ChatResponse, ApiError> {
        let url = utils::api_url(&self.endpoint);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&ChatRequest::new(text))
            .map_err(|e| ApiError::Parse(format!("Failed to serialize: {:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response.status(), response.status_text())?;

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Collapse the outcome of a chat request into the reply to render
pub fn reply_from_result(result: Result<ChatResponse, ApiError>) -> BotReply {
    match result {
        Ok(response) => response.into(),
        Err(e) => {
            log::warn!("Error sending message: {}", e);
            BotReply::fallback()
        }
    }
}

/// Reports helpfulness votes. Fire-and-forget.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteReporter {
    endpoint: String,
}

impl VoteReporter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn report(&self, vote: VoteRequest) {
        let url = utils::api_url(&self.endpoint);

        spawn_local(async move {
            if let Err(e) = post_vote(&url, &vote).await {
                log::debug!("Vote for {} not recorded: {}", vote.faq_id, e);
            }
        });
    }
}

async fn post_vote(url: &str, vote: &VoteRequest) -> Result<(), ApiError> {
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .json(vote)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize: {:?}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response.status(), response.status_text())
}

/// Non-2xx statuses are failures
fn check_status(status: u16, status_text: String) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Server {
            status,
            message: status_text,
        })
    }
}
