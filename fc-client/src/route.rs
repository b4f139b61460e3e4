use crate::error::{ClientError, Result};
use std::fmt;

/// One backend API family behind the gateway. Adding a family means
/// adding a member here plus its route rule, builder arm, and parse arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Anthropic,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::OpenAi, Provider::Anthropic];
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenAi => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// Endpoint path and provider resolved from a model name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub provider: Provider,
}

/// First matching prefix wins. Keep entries ordered
/// most-specific-prefix-first (e.g. `gpt-image-` before `gpt-`).
const ROUTE_TABLE: &[(&str, &str, Provider)] = &[
    ("claude-", "anthropic/messages", Provider::Anthropic),
    ("gpt-", "openai/chat/completions", Provider::OpenAi),
];

/// Resolve a model name to its gateway route. Matching is
/// case-insensitive on the model name.
pub fn resolve_route(model: &str) -> Result<Route> {
    let m = model.to_ascii_lowercase();
    for (prefix, path, provider) in ROUTE_TABLE {
        if m.starts_with(prefix) {
            return Ok(Route {
                path,
                provider: *provider,
            });
        }
    }
    Err(ClientError::UnsupportedModel(model.to_string()))
}
