//! Message model for the chat widget

use chrono::{Local, NaiveTime};
use shared::{BotReply, VoteRequest};
use uuid::Uuid;

/// Who a message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier used on the message container
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Bot => "bot-message",
        }
    }
}

/// Message payload. User text is always plain; bot replies are markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Markup {
        html: String,
        faq_id: Option<String>,
    },
}

/// One rendered chat message. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Render key only
    pub id: Uuid,
    pub sender: Sender,
    pub body: MessageBody,
    pub timestamp: NaiveTime,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, MessageBody::Text(text.into()))
    }

    pub fn bot(reply: BotReply) -> Self {
        Self::new(
            Sender::Bot,
            MessageBody::Markup {
                html: reply.html,
                faq_id: reply.faq_id,
            },
        )
    }

    fn new(sender: Sender, body: MessageBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            body,
            timestamp: Local::now().time(),
        }
    }

    /// FAQ id the vote buttons of this message are bound to, if any
    pub fn faq_id(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Markup { faq_id, .. } => faq_id.as_deref(),
            MessageBody::Text(_) => None,
        }
    }
}

/// The two vote events a bot message can emit, `[helpful, not helpful]`.
///
/// Returns `None` when the message carries no (or an empty) FAQ id; its
/// buttons are then rendered without handlers.
pub fn vote_events(faq_id: Option<&str>) -> Option<[VoteRequest; 2]> {
    let id = faq_id.filter(|id| !id.is_empty())?;
    Some([VoteRequest::new(id, true), VoteRequest::new(id, false)])
}
