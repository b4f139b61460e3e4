use crate::error::{ClientError, Result};
use crate::normalize::{LlmResponse, normalize};
use crate::payload::build_payload;
use crate::route::resolve_route;
use serde_json::{Map, Value};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://factchat-cloud.mindlogic.ai/v1/api";

const API_KEY_ENV: &str = "FACTCHAT_API_KEY";
const BASE_URL_ENV: &str = "FACTCHAT_BASE_URL";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Explicit construction-time settings. Anything left `None` falls back
/// to the environment, then (base URL and timeout only) to a built-in
/// default. There is no default api key.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

/// Gateway client. Configuration is resolved once at construction;
/// after that every `call` is independent, so one client can be shared
/// across tasks freely.
#[derive(Debug, Clone)]
pub struct FactChatClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl FactChatClient {
    /// Resolve configuration (argument, then environment, then default)
    /// and build the client. Fails with `Configuration` before any
    /// network activity when no api key is resolvable.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_env_lookup(config, |key| std::env::var(key).ok())
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    fn with_env_lookup(
        config: ClientConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let api_key = config
            .api_key
            .or_else(|| env(API_KEY_ENV))
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ClientError::Configuration(format!(
                    "api key missing: pass one explicitly or set {API_KEY_ENV}"
                ))
            })?;

        let base_url = config
            .base_url
            .or_else(|| env(BASE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout = config.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(%e, "reqwest client build failed; falling back to default client");
                reqwest::Client::new()
            });

        Ok(Self {
            api_key,
            base_url,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One round trip: route the model, build the body, POST, normalize.
    #[tracing::instrument(level = "info", skip_all)]
    pub async fn call(&self, model: &str, user_text: &str) -> Result<LlmResponse> {
        self.call_with(model, user_text, &Map::new()).await
    }

    /// Like `call`, with extra body fields shallow-merged over the
    /// generated payload (caller values win).
    #[tracing::instrument(level = "info", skip_all)]
    pub async fn call_with(
        &self,
        model: &str,
        user_text: &str,
        extra: &Map<String, Value>,
    ) -> Result<LlmResponse> {
        let route = resolve_route(model)?;
        let url = join_url(&self.base_url, route.path);
        let payload = build_payload(model, user_text, extra)?;

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Transport(format!(
                "{} status={status} body={body}",
                route.path
            )));
        }

        let data: Value = response.json().await?;
        Ok(normalize(route.provider, data))
    }
}

/// Join base and path with exactly one separating slash, whatever the
/// trailing/leading slashes on either side.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
