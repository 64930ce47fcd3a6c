use crate::domain::entities::AnyError;
use crate::infrastructure::config::GATEWAY_TIMEOUT;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{redirect, Client};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one JSON POST to the gateway and hands back the raw response text.
///
/// Implementations must not interpret the HTTP status.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: String,
    ) -> Result<GatewayResponse, AnyError>;
}

/// reqwest-backed transport. A new client is built for every call.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { timeout: GATEWAY_TIMEOUT }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(self.timeout)
            .build()
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GatewayTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: String,
    ) -> Result<GatewayResponse, AnyError> {
        let response = self
            .client()?
            .post(url)
            .bearer_auth(bearer)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(GatewayResponse { status, body })
    }
}
