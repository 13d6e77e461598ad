//! Hook for the open/closed state of the chat panel.

use crate::toggle::{WidgetState, OPEN_BODY_CLASS};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent, Node};
use yew::prelude::*;

/// Configuration for the widget toggle hook.
pub struct WidgetToggleConfig {
    /// The widget region; clicks outside it close the panel
    pub app_ref: NodeRef,
    /// The toggle control; clicks on it are handled by `toggle`
    pub toggle_ref: NodeRef,
    /// Input focused shortly after opening
    pub input_ref: NodeRef,
    pub focus_delay_ms: u32,
}

/// Return value from the use_widget_toggle hook.
pub struct UseWidgetToggle {
    pub state: WidgetState,
    /// Flip the state (bound to the toggle control)
    pub toggle: Callback<MouseEvent>,
}

/// Hook for the widget panel state.
///
/// - The state is mirrored as `widget-open` on `<body>` so page CSS can show
///   or hide the panel.
/// - Escape closes the panel while it is open.
/// - A click anywhere outside the widget region and the toggle closes it.
/// - Opening focuses the input after `focus_delay_ms`, giving the open
///   animation time to settle.
///
/// # Example
/// ```ignore
/// let widget = use_widget_toggle(WidgetToggleConfig {
///     app_ref: app_ref.clone(),
///     toggle_ref: toggle_ref.clone(),
///     input_ref: input_ref.clone(),
///     focus_delay_ms: 120,
/// });
///
/// html! {
///     <button ref={toggle_ref} onclick={widget.toggle.clone()}>
///         { widget.state.aria_label() }
///     </button>
/// }
/// ```
#[hook]
pub fn use_widget_toggle(config: WidgetToggleConfig) -> UseWidgetToggle {
    let state = use_state(WidgetState::default);

    // Mirror onto <body>, focus the input once opened
    {
        let input_ref = config.input_ref.clone();
        let delay = config.focus_delay_ms;
        use_effect_with(*state, move |current| {
            set_body_class(current.is_open());
            let focus_timer = current.is_open().then(|| {
                Timeout::new(delay, move || {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                })
            });
            move || drop(focus_timer)
        });
    }

    // Document-level Escape and outside-click handling
    {
        let state = state.clone();
        let app_ref = config.app_ref.clone();
        let toggle_ref = config.toggle_ref.clone();
        use_effect_with(*state, move |current| {
            let current = *current;
            let document = gloo::utils::document();

            let keydown = {
                let state = state.clone();
                EventListener::new(&document, "keydown", move |e| {
                    let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let next = current.after_key(&e.key());
                    if next != current {
                        state.set(next);
                    }
                })
            };

            let click = EventListener::new(&document, "click", move |e| {
                if !current.is_open() {
                    return;
                }
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = node_contains(&app_ref, target.as_ref());
                let on_toggle = node_contains(&toggle_ref, target.as_ref());
                let next = current.after_click(inside, on_toggle);
                if next != current {
                    state.set(next);
                }
            });

            move || drop((keydown, click))
        });
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.toggled()))
    };

    UseWidgetToggle {
        state: *state,
        toggle,
    }
}

fn node_contains(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    node_ref.get().is_some_and(|node| node.contains(target))
}

fn set_body_class(open: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let classes = body.class_list();
    let result = if open {
        classes.add_1(OPEN_BODY_CLASS)
    } else {
        classes.remove_1(OPEN_BODY_CLASS)
    };
    if let Err(e) = result {
        log::warn!("Failed to update body class: {:?}", e);
    }
}
