use crate::error::Result;
use crate::route::{Provider, resolve_route};
use serde_json::{Map, Value, json};

/// The Anthropic messages endpoint rejects bodies without `max_tokens`.
const ANTHROPIC_DEFAULT_MAX_TOKENS: u32 = 256;

/// Build the provider-specific request body for one user prompt.
///
/// `extra` is shallow-merged over the generated body, overwrite-by-key:
/// a caller-supplied `max_tokens` replaces the default, and a
/// caller-supplied `messages` replaces the whole conversation list.
/// Never a deep merge.
pub fn build_payload(model: &str, user_text: &str, extra: &Map<String, Value>) -> Result<Value> {
    let route = resolve_route(model)?;

    let mut body = match route.provider {
        Provider::Anthropic => json!({
            "model": model,
            "max_tokens": ANTHROPIC_DEFAULT_MAX_TOKENS,
            "messages": [{"role": "user", "content": user_text}],
        }),
        Provider::OpenAi => json!({
            "model": model,
            "messages": [{"role": "user", "content": user_text}],
        }),
    };

    if let Value::Object(map) = &mut body {
        for (key, value) in extra {
            map.insert(key.clone(), value.clone());
        }
    }

    Ok(body)
}
