//! Quick reply chips.

use crate::config::QuickReply;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuickRepliesProps {
    pub replies: Vec<QuickReply>,
    /// Called with the text to send
    pub on_select: Callback<String>,
}

#[function_component(QuickReplies)]
pub fn quick_replies(props: &QuickRepliesProps) -> Html {
    if props.replies.is_empty() {
        return html! {};
    }

    html! {
        <div class="quick-replies">
            { for props.replies.iter().map(|reply| {
                let text = reply.text().to_string();
                let on_select = props.on_select.clone();
                let onclick = {
                    let text = text.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(text.clone()))
                };
                html! {
                    <button type="button" class="quick suggestion-chip" data-q={text} {onclick}>
                        { reply.label.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
