//! `authorize`: reads one order JSON object from stdin, posts it to the gateway
//! configured through `MOIP_ENVIRONMENT`, `MOIP_API_URL` and `MOIP_OAUTH_TOKEN`,
//! and prints the result mapping on stdout.
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `info`). The request and
//! response exchange is logged at debug level, so run with
//! `RUST_LOG=moip_authorize=debug` to see it.

use moip_authorize::{AnyError, EnvConfig, OrderAuthorizeClient, OrderRequest};
use serde_json::Value;
use std::io::Read;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("authorize: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<String, AnyError> {
    let config = EnvConfig::from_env()?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request = OrderRequest::try_from(serde_json::from_str::<Value>(&input)?)?;

    let client = OrderAuthorizeClient::new(config);
    let result = client.place_request(&request).await?;
    Ok(serde_json::to_string(&result.into_result_map())?)
}
