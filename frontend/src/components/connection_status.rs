use crate::hooks::use_online_status;
use yew::prelude::*;

#[function_component(ConnectionStatus)]
pub fn connection_status() -> Html {
    let online = use_online_status();

    let (class, label) = if online {
        ("status online", "Online • Ready to help")
    } else {
        ("status offline", "Offline • Please check connection")
    };

    html! { <span class={class}>{ label }</span> }
}
