//! Types shared between the chat widget and anything that talks to the
//! same backend. Everything here must stay WASM compatible.

// Fixed strings shared by the widget and its tests
pub mod protocol;

// API request/response types
pub mod api;
pub use api::{endpoints, ApiError, BotReply, ChatRequest, ChatResponse, ResponseBody, VoteRequest};
