//! Minimal FactChat gateway client.
//!
//! One entry point (`FactChatClient::call`) that hides per-provider
//! endpoint and payload differences behind a model-name router.

mod client;
mod error;
mod normalize;
mod payload;
mod route;

pub use client::{ClientConfig, DEFAULT_BASE_URL, FactChatClient};
pub use error::{ClientError, Result};
pub use normalize::{LlmResponse, normalize};
pub use payload::build_payload;
pub use route::{Provider, Route, resolve_route};
