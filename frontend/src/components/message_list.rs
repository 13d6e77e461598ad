//! Rendering of individual chat messages

use super::avatar::{BotAvatar, UserAvatar};
use crate::transport::VoteReporter;
use crate::types::{vote_events, ChatMessage, MessageBody, Sender};
use crate::utils::{bot_markup, format_clock};
use shared::protocol::{VOTE_HELPFUL_LABEL, VOTE_NOT_HELPFUL_LABEL};
use shared::VoteRequest;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageViewProps {
    pub message: ChatMessage,
    pub votes: Rc<VoteReporter>,
    pub avatar_primary: AttrValue,
    pub avatar_fallback: AttrValue,
}

#[function_component(MessageView)]
pub fn message_view(props: &MessageViewProps) -> Html {
    let msg = &props.message;
    let time = format_clock(msg.timestamp);

    let avatar = match msg.sender {
        Sender::Bot => html! {
            <BotAvatar primary={props.avatar_primary.clone()} fallback={props.avatar_fallback.clone()} />
        },
        Sender::User => html! { <UserAvatar /> },
    };

    let body = match &msg.body {
        // User text is a plain text node, never parsed as markup
        MessageBody::Text(text) => html! { <div class="message-text">{ text.clone() }</div> },
        MessageBody::Markup { html: markup, .. } => html! {
            <div class="message-text">
                { Html::from_html_unchecked(AttrValue::from(bot_markup(markup))) }
            </div>
        },
    };

    let vote_bar = if msg.sender == Sender::Bot {
        render_vote_bar(msg.faq_id(), &props.votes)
    } else {
        html! {}
    };

    html! {
        <div class={classes!("message", msg.sender.css_class())}>
            { avatar }
            <div class="message-content">
                { body }
                { vote_bar }
                <div class="message-time">{ time }</div>
            </div>
        </div>
    }
}

/// Both buttons are always rendered; they only get handlers when the reply
/// carried a FAQ id.
fn render_vote_bar(faq_id: Option<&str>, votes: &Rc<VoteReporter>) -> Html {
    let (on_up, on_down) = match vote_events(faq_id) {
        Some([up, down]) => (
            Some(vote_callback(votes, up)),
            Some(vote_callback(votes, down)),
        ),
        None => (None, None),
    };

    html! {
        <div class="vote-bar">
            <button type="button" class="vote-btn" onclick={on_up}>{ VOTE_HELPFUL_LABEL }</button>
            <button type="button" class="vote-btn" onclick={on_down}>{ VOTE_NOT_HELPFUL_LABEL }</button>
        </div>
    }
}

fn vote_callback(votes: &Rc<VoteReporter>, vote: VoteRequest) -> Callback<MouseEvent> {
    let votes = votes.clone();
    Callback::from(move |_: MouseEvent| votes.report(vote.clone()))
}

#[derive(Properties, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<ChatMessage>,
    pub votes: Rc<VoteReporter>,
    pub avatar_primary: AttrValue,
    pub avatar_fallback: AttrValue,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    props
        .messages
        .iter()
        .map(|message| {
            html! {
                <MessageView
                    key={message.id.to_string()}
                    message={message.clone()}
                    votes={props.votes.clone()}
                    avatar_primary={props.avatar_primary.clone()}
                    avatar_fallback={props.avatar_fallback.clone()}
                />
            }
        })
        .collect::<Html>()
}
