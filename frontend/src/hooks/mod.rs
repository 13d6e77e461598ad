//! Custom Yew hooks for the chat widget.
//!
//! These hooks encapsulate reusable state logic to keep components clean and focused.

mod use_online_status;
mod use_widget_toggle;

pub use use_online_status::use_online_status;
pub use use_widget_toggle::{use_widget_toggle, WidgetToggleConfig};
