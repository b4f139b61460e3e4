//! FactChat smoke-test binary.
//!
//! One call through the gateway, normalized text to stdout. All logic
//! lives in `fc-client`; this is an entry point only.

use clap::Parser;
use fc_client::{ClientConfig, FactChatClient};
use serde_json::{Map, json};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "factchat", version, about = "One-shot FactChat gateway call")]
struct Cli {
    /// Prompt text to send.
    #[arg(default_value = "ping")]
    prompt: String,

    /// Model name; the prefix picks the provider and endpoint.
    #[arg(short, long, default_value = "gpt-5-mini")]
    model: String,

    /// Override the provider max_tokens (Anthropic models default to 256).
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Gateway base URL; falls back to FACTCHAT_BASE_URL, then the default.
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let client = FactChatClient::new(ClientConfig {
        api_key: None,
        base_url: cli.base_url,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    })?;

    let mut extra = Map::new();
    if let Some(max_tokens) = cli.max_tokens {
        extra.insert("max_tokens".to_string(), json!(max_tokens));
    }

    let res = client.call_with(&cli.model, &cli.prompt, &extra).await?;
    println!("{}", res.text);
    Ok(())
}
