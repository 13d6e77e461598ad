mod components;
pub mod config;
pub mod conversation;
mod hooks;
pub mod input;
pub mod toggle;
pub mod transport;
pub mod types;
pub mod utils;

use components::{ChatWidget, ConnectionStatus};
use config::WidgetConfig;
use hooks::{use_widget_toggle, WidgetToggleConfig};
use std::rc::Rc;
use transport::{ChatClient, VoteReporter};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<WidgetConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let app_ref = use_node_ref();
    let toggle_ref = use_node_ref();
    let input_ref = use_node_ref();

    let chat = use_memo(config.chat_endpoint.clone(), |endpoint| {
        ChatClient::new(endpoint.clone())
    });
    let votes = use_memo(config.vote_endpoint.clone(), |endpoint| {
        VoteReporter::new(endpoint.clone())
    });

    let widget = use_widget_toggle(WidgetToggleConfig {
        app_ref: app_ref.clone(),
        toggle_ref: toggle_ref.clone(),
        input_ref: input_ref.clone(),
        focus_delay_ms: config.focus_delay_ms,
    });
    let open = widget.state.is_open();

    html! {
        <>
            <button
                ref={toggle_ref}
                id={config.toggle_id.clone()}
                type="button"
                class={classes!("chat-toggle", open.then_some("open"))}
                aria-label={widget.state.aria_label()}
                aria-expanded={open.to_string()}
                onclick={widget.toggle.clone()}
            >
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                    <path d="M4 4h16v12H7l-3 3V4z" fill="currentColor"></path>
                </svg>
            </button>
            <div class="chat-app" ref={app_ref} aria-hidden={(!open).to_string()}>
                <div class="chat-header">
                    <ConnectionStatus />
                </div>
                <ChatWidget
                    config={config.clone()}
                    chat={chat}
                    votes={votes}
                    input_ref={input_ref}
                />
            </div>
        </>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());

    let config = Rc::new(config::load_config());
    let props = AppProps {
        config: config.clone(),
    };

    let document = gloo::utils::document();
    match document.get_element_by_id(&config.mount_id) {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => {
            log::info!("#{} not found, mounting chat widget on <body>", config.mount_id);
            yew::Renderer::<App>::with_props(props).render()
        }
    };
}
