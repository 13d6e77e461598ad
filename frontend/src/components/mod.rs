mod avatar;
mod chat_widget;
mod connection_status;
mod message_list;
mod quick_replies;

pub use chat_widget::ChatWidget;
pub use connection_status::ConnectionStatus;
