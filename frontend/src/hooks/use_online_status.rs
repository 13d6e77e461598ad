//! Hook tracking the browser's online/offline state.

use gloo::events::EventListener;
use yew::prelude::*;

/// Returns `navigator.onLine`, kept current through the window's
/// `online`/`offline` events.
#[hook]
pub fn use_online_status() -> bool {
    let online = use_state(|| {
        web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true)
    });

    {
        let online = online.clone();
        use_effect_with((), move |_| {
            let window = gloo::utils::window();
            let on = {
                let online = online.clone();
                EventListener::new(&window, "online", move |_| online.set(true))
            };
            let off = EventListener::new(&window, "offline", move |_| online.set(false));
            move || drop((on, off))
        });
    }

    *online
}
