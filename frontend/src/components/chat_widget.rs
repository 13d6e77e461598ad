//! ChatWidget component - message list, quick replies and the input row

use super::message_list::MessageList;
use super::quick_replies::QuickReplies;
use crate::config::WidgetConfig;
use crate::conversation::Conversation;
use crate::input::SendRejected;
use crate::transport::{ChatClient, VoteReporter};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use shared::protocol::EMPTY_INPUT_NOTICE;
use shared::BotReply;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlInputElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

/// How long the empty-input notice stays up
const NOTICE_MS: u32 = 3_000;

/// Delay before the final instant scroll that follows the smooth one
const SCROLL_SNAP_MS: u32 = 420;

/// Props for the ChatWidget component
#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub config: Rc<WidgetConfig>,
    pub chat: Rc<ChatClient>,
    pub votes: Rc<VoteReporter>,
    /// Owned by the parent so the toggle can focus the input on open
    pub input_ref: NodeRef,
}

/// Messages for the ChatWidget component
pub enum ChatWidgetMsg {
    UpdateInput(String),
    /// Send button or Enter
    SendInput,
    /// Quick reply chip with its payload
    SendQuickReply(String),
    ReplyReceived(BotReply),
    ClearNotice,
    /// Alt+C
    FocusInput,
    /// Escape
    ClearInput,
}

pub struct ChatWidget {
    conversation: Conversation,
    notice: Option<&'static str>,
    #[allow(dead_code)]
    notice_timer: Option<Timeout>,
    messages_ref: NodeRef,
    /// Message count at the last scroll, so only new messages trigger one
    scrolled_count: usize,
    #[allow(dead_code)]
    snap_timer: Option<Timeout>,
    refocus: bool,
    #[allow(dead_code)]
    shortcut_listener: Option<EventListener>,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ChatWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            conversation: Conversation::new(&ctx.props().config.welcome_message),
            notice: None,
            notice_timer: None,
            messages_ref: NodeRef::default(),
            scrolled_count: 0,
            snap_timer: None,
            refocus: false,
            shortcut_listener: Some(shortcut_listener(ctx)),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.refocus {
            self.refocus = false;
            focus_input(&ctx.props().input_ref);
        }

        let count = self.conversation.messages().len();
        if count != self.scrolled_count {
            self.scrolled_count = count;
            self.scroll_newest_into_view();
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::UpdateInput(value) => {
                self.conversation.set_input(value);
                true
            }
            ChatWidgetMsg::SendInput => {
                let raw = self.conversation.input().to_string();
                self.handle_send(ctx, &raw)
            }
            ChatWidgetMsg::SendQuickReply(text) => self.handle_send(ctx, &text),
            ChatWidgetMsg::ReplyReceived(reply) => {
                self.conversation.receive(reply);
                self.refocus = true;
                true
            }
            ChatWidgetMsg::ClearNotice => {
                self.notice = None;
                self.notice_timer = None;
                true
            }
            ChatWidgetMsg::FocusInput => {
                focus_input(&ctx.props().input_ref);
                false
            }
            ChatWidgetMsg::ClearInput => {
                self.conversation.clear_input();
                if let Some(input) = ctx.props().input_ref.cast::<HtmlInputElement>() {
                    let _ = input.blur();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let config = &ctx.props().config;
        let sending = self.conversation.is_sending();

        let handle_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::UpdateInput(input.value())
        });

        let handle_keydown = link.batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                Some(ChatWidgetMsg::SendInput)
            } else {
                None
            }
        });

        let handle_send = link.callback(|_: MouseEvent| ChatWidgetMsg::SendInput);
        let on_quick_reply = link.callback(ChatWidgetMsg::SendQuickReply);

        html! {
            <div class="chat-widget">
                <div
                    id={config.messages_id.clone()}
                    class="chat-messages"
                    ref={self.messages_ref.clone()}
                    aria-live="polite"
                >
                    <MessageList
                        messages={self.conversation.messages().to_vec()}
                        votes={ctx.props().votes.clone()}
                        avatar_primary={AttrValue::from(config.avatar_primary.clone())}
                        avatar_fallback={AttrValue::from(config.avatar_fallback.clone())}
                    />
                </div>

                <QuickReplies replies={config.quick_replies.clone()} on_select={on_quick_reply} />

                if let Some(notice) = self.notice {
                    <div class="chat-notice" role="alert">{ notice }</div>
                }

                <div class={classes!("chat-input", sending.then_some("sending"))}>
                    <input
                        ref={ctx.props().input_ref.clone()}
                        id={config.input_id.clone()}
                        type="text"
                        class="message-input"
                        placeholder="Type your question..."
                        autocomplete="off"
                        value={self.conversation.input().to_string()}
                        oninput={handle_input}
                        onkeydown={handle_keydown}
                        disabled={sending}
                    />
                    <button
                        id={config.send_button_id.clone()}
                        type="button"
                        class="send-button"
                        onclick={handle_send}
                        disabled={sending}
                    >
                        { "Send" }
                    </button>
                </div>
            </div>
        }
    }
}

// Helper methods extracted from the main impl
impl ChatWidget {
    fn handle_send(&mut self, ctx: &Context<Self>, raw: &str) -> bool {
        let text = match self.conversation.submit(raw) {
            Ok(text) => text,
            Err(SendRejected::Busy) => return false,
            Err(SendRejected::Empty) => return self.show_empty_notice(ctx),
        };

        let chat = ctx.props().chat.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let reply = chat.send(&text).await;
            link.send_message(ChatWidgetMsg::ReplyReceived(reply));
        });
        true
    }

    fn show_empty_notice(&mut self, ctx: &Context<Self>) -> bool {
        if !ctx.props().config.empty_input_notice {
            return false;
        }
        self.notice = Some(EMPTY_INPUT_NOTICE);
        let link = ctx.link().clone();
        self.notice_timer = Some(Timeout::new(NOTICE_MS, move || {
            link.send_message(ChatWidgetMsg::ClearNotice);
        }));
        true
    }

    fn scroll_newest_into_view(&mut self) {
        let Some(newest) = self
            .messages_ref
            .cast::<Element>()
            .and_then(|list| list.last_element_child())
        else {
            return;
        };

        newest.scroll_into_view_with_scroll_into_view_options(&scroll_options(
            ScrollBehavior::Smooth,
        ));

        // Final snap once the smooth scroll and the pop-in animation are done
        self.snap_timer = Some(Timeout::new(SCROLL_SNAP_MS, move || {
            newest.scroll_into_view_with_scroll_into_view_options(&scroll_options(
                ScrollBehavior::Auto,
            ));
        }));
    }
}

fn scroll_options(behavior: ScrollBehavior) -> ScrollIntoViewOptions {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(behavior);
    options.set_block(ScrollLogicalPosition::End);
    options.set_inline(ScrollLogicalPosition::Nearest);
    options
}

fn focus_input(input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
        let _ = input.focus();
    }
}

/// Page-wide shortcuts: Alt+C focuses the input, Escape clears it
fn shortcut_listener(ctx: &Context<ChatWidget>) -> EventListener {
    let link = ctx.link().clone();
    EventListener::new(&gloo::utils::document(), "keydown", move |e| {
        let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if e.alt_key() && e.key().eq_ignore_ascii_case("c") {
            e.prevent_default();
            link.send_message(ChatWidgetMsg::FocusInput);
        } else if e.key() == "Escape" {
            link.send_message(ChatWidgetMsg::ClearInput);
        }
    })
}
