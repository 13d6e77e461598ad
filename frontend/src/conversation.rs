//! Message list and input state of one chat widget

use crate::input::{InputController, SendRejected};
use crate::types::ChatMessage;
use shared::BotReply;

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    input: String,
    controller: InputController,
}

impl Conversation {
    /// Start a conversation, opening with `welcome` as a bot message unless it
    /// is blank
    pub fn new(welcome: &str) -> Self {
        let welcome = welcome.trim();
        let mut conversation = Self::default();
        if !welcome.is_empty() {
            conversation
                .messages
                .push(ChatMessage::bot(BotReply::new(welcome, None)));
        }
        conversation
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Input and send button are disabled while this is true
    pub fn is_sending(&self) -> bool {
        self.controller.is_sending()
    }

    /// Accept `raw` for sending.
    ///
    /// On success the user message is appended, the input is cleared and the
    /// trimmed text to post is returned. Rejected triggers change nothing.
    pub fn submit(&mut self, raw: &str) -> Result<String, SendRejected> {
        let text = self.controller.begin(raw)?;
        self.messages.push(ChatMessage::user(text.clone()));
        self.input.clear();
        Ok(text)
    }

    /// Append the bot's answer (or the fallback) and re-enable input
    pub fn receive(&mut self, reply: BotReply) {
        self.messages.push(ChatMessage::bot(reply));
        self.controller.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{vote_events, MessageBody, Sender};
    use shared::protocol::FALLBACK_REPLY;
    use shared::VoteRequest;

    #[test]
    fn test_welcome_message() {
        let conversation = Conversation::new("Hi! Ask me anything.");
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].sender, Sender::Bot);
        assert_eq!(conversation.messages()[0].faq_id(), None);

        assert!(Conversation::new("   ").messages().is_empty());
    }

    #[test]
    fn test_submit_adds_one_literal_user_message() {
        let mut conversation = Conversation::new("");
        conversation.set_input("  <i>fees?</i> ".to_string());
        let raw = conversation.input().to_string();

        assert_eq!(conversation.submit(&raw), Ok("<i>fees?</i>".to_string()));
        assert_eq!(conversation.messages().len(), 1);
        let msg = &conversation.messages()[0];
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.body, MessageBody::Text("<i>fees?</i>".to_string()));
        assert_eq!(conversation.input(), "");
        assert!(conversation.is_sending());
    }

    #[test]
    fn test_empty_submit_changes_nothing() {
        let mut conversation = Conversation::new("");
        conversation.set_input("   ".to_string());
        assert_eq!(conversation.submit("   "), Err(SendRejected::Empty));
        assert!(conversation.messages().is_empty());
        assert_eq!(conversation.input(), "   ");
        assert!(!conversation.is_sending());
    }

    #[test]
    fn test_second_submit_while_sending() {
        let mut conversation = Conversation::new("");
        conversation.submit("first").unwrap();
        conversation.set_input("second".to_string());
        assert_eq!(conversation.submit("second"), Err(SendRejected::Busy));
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.input(), "second");
    }

    #[test]
    fn test_fallback_reply_reenables_input() {
        let mut conversation = Conversation::new("");
        conversation.submit("hello").unwrap();
        conversation.receive(BotReply::fallback());

        assert!(!conversation.is_sending());
        let reply = &conversation.messages()[1];
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(
            reply.body,
            MessageBody::Markup {
                html: FALLBACK_REPLY.to_string(),
                faq_id: None,
            }
        );
        assert!(conversation.submit("again").is_ok());
    }

    #[test]
    fn test_reply_with_id_wires_both_votes() {
        let mut conversation = Conversation::new("");
        conversation.submit("hello").unwrap();
        conversation.receive(BotReply::new("Hello", Some("f1".to_string())));

        let bot: Vec<_> = conversation
            .messages()
            .iter()
            .filter(|m| m.sender == Sender::Bot)
            .collect();
        assert_eq!(bot.len(), 1);
        assert_eq!(
            vote_events(bot[0].faq_id()),
            Some([VoteRequest::new("f1", true), VoteRequest::new("f1", false)])
        );
    }
}
