use crate::route::Provider;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One normalized response shape for every provider behind the gateway.
///
/// `raw` keeps the decoded body verbatim so per-provider differences can
/// be inspected after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    /// Model identifier as echoed by the provider; empty if absent.
    pub model: String,
    /// Integer usage counters (prompt/completion/total tokens and the
    /// like); empty if the provider omitted usage.
    pub usage: BTreeMap<String, i64>,
    /// `stop`, `length`, `content_filter`, ...; `None` if not reported.
    pub finish_reason: Option<String>,
    pub raw: Value,
}

/// Normalize a decoded response body. Never fails: bodies that match no
/// known shape degrade to a raw dump instead of an error.
pub fn normalize(provider: Provider, body: Value) -> LlmResponse {
    match provider {
        // Both families currently go through the chat.completion parse.
        // Anthropic's messages shape has no dedicated branch and always
        // falls through to the dump.
        // TODO: parse `content[0].text` / `stop_reason` for Anthropic.
        Provider::OpenAi | Provider::Anthropic => normalize_chat_completion(body),
    }
}

fn normalize_chat_completion(body: Value) -> LlmResponse {
    if let Some(choice) = body
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
    {
        let text = choice
            .get("message")
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let finish_reason = choice
            .get("finish_reason")
            .and_then(Value::as_str)
            .map(str::to_string);
        return LlmResponse {
            text,
            model: top_level_model(&body),
            usage: top_level_usage(&body),
            finish_reason,
            raw: body,
        };
    }

    LlmResponse {
        text: body.to_string(),
        model: top_level_model(&body),
        usage: top_level_usage(&body),
        finish_reason: None,
        raw: body,
    }
}

fn top_level_model(body: &Value) -> String {
    body.get("model")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn top_level_usage(body: &Value) -> BTreeMap<String, i64> {
    let Some(usage) = body.get("usage").and_then(Value::as_object) else {
        return BTreeMap::new();
    };
    // Non-integer entries (nested detail objects) stay in `raw` only.
    usage
        .iter()
        .filter_map(|(key, value)| value.as_i64().map(|count| (key.clone(), count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_completion_shape_is_fully_extracted() {
        let body = json!({
            "choices": [{"message": {"content": "pong"}, "finish_reason": "stop"}],
            "usage": {"total_tokens": 5},
            "model": "gpt-5-mini",
        });
        let res = normalize(Provider::OpenAi, body.clone());
        assert_eq!(res.text, "pong");
        assert_eq!(res.finish_reason.as_deref(), Some("stop"));
        assert_eq!(res.usage, BTreeMap::from([("total_tokens".to_string(), 5)]));
        assert_eq!(res.model, "gpt-5-mini");
        assert_eq!(res.raw, body);
    }

    #[test]
    fn missing_content_and_usage_degrade_to_empty() {
        let body = json!({"choices": [{"finish_reason": "length"}]});
        let res = normalize(Provider::OpenAi, body);
        assert_eq!(res.text, "");
        assert_eq!(res.finish_reason.as_deref(), Some("length"));
        assert!(res.usage.is_empty());
        assert_eq!(res.model, "");
    }

    #[test]
    fn empty_choices_list_falls_through_to_the_dump() {
        let body = json!({"choices": [], "model": "gpt-5-mini"});
        let res = normalize(Provider::OpenAi, body.clone());
        assert_eq!(res.text, body.to_string());
        assert_eq!(res.finish_reason, None);
        assert_eq!(res.model, "gpt-5-mini");
    }

    #[test]
    fn unrecognized_shape_dumps_the_body_and_keeps_raw_intact() {
        let body = json!({
            "id": "msg_01",
            "content": [{"type": "text", "text": "pong"}],
            "model": "claude-sonnet-4",
            "usage": {"input_tokens": 3, "output_tokens": 2},
        });
        let res = normalize(Provider::Anthropic, body.clone());
        assert_eq!(res.text, body.to_string());
        assert_eq!(res.finish_reason, None);
        assert_eq!(res.model, "claude-sonnet-4");
        assert_eq!(
            res.usage,
            BTreeMap::from([
                ("input_tokens".to_string(), 3),
                ("output_tokens".to_string(), 2),
            ])
        );
        assert_eq!(res.raw, body);
    }

    #[test]
    fn non_integer_usage_entries_are_skipped() {
        let body = json!({
            "choices": [{"message": {"content": "ok"}}],
            "usage": {
                "total_tokens": 7,
                "completion_tokens_details": {"reasoning_tokens": 0},
            },
        });
        let res = normalize(Provider::OpenAi, body.clone());
        assert_eq!(res.usage, BTreeMap::from([("total_tokens".to_string(), 7)]));
        assert_eq!(res.raw, body);
    }
}
