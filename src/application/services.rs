use crate::domain::entities::{AuthorizeResult, Transfer};
use crate::domain::error::GatewayError;
use crate::infrastructure::config::{GatewayConfig, ORDERS_PATH};
use crate::infrastructure::http_clients::{GatewayTransport, ReqwestTransport};
use serde_json::{Map, Value};
use tracing::debug;

/// Creates an order at the gateway and reports whether it was authorized.
pub struct OrderAuthorizeClient<C, T = ReqwestTransport> {
    config: C,
    transport: T,
}

impl<C: GatewayConfig> OrderAuthorizeClient<C> {
    pub fn new(config: C) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<C: GatewayConfig, T: GatewayTransport> OrderAuthorizeClient<C, T> {
    pub fn with_transport(config: C, transport: T) -> Self {
        Self { config, transport }
    }

    /// `{api_url}orders`, plain concatenation.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.config.api_url(), ORDERS_PATH)
    }

    pub async fn place_request<R: Transfer + ?Sized>(
        &self,
        transfer: &R,
    ) -> Result<AuthorizeResult, GatewayError> {
        let url = self.endpoint();
        let bearer = self.config.merchant_gateway_oauth();
        let request = serde_json::to_string(transfer.body())
            .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;

        let response = self
            .transport
            .post_json(&url, &bearer, request.clone())
            .await
            .map_err(GatewayError::Transport)?;

        let data = match serde_json::from_str::<Map<String, Value>>(&response.body) {
            Ok(data) => data,
            Err(e) => {
                debug!(
                    exception = %e,
                    url = %url,
                    request = %request,
                    response = %response.body,
                    status = response.status,
                    "gateway response is not a JSON object"
                );
                return Err(GatewayError::InvalidResponse {
                    endpoint: url,
                    body: response.body,
                    source: e,
                });
            }
        };

        let result = AuthorizeResult::from_response(data);
        debug!(
            url = %url,
            request = %request,
            response = %response.body,
            status = response.status,
            result_code = result.result_code(),
            "order authorization exchange"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::StaticConfig;

    #[test]
    fn endpoint_is_plain_concatenation() {
        let config = StaticConfig::new("https://sandbox.moip.com.br/v2/", "t");
        let client = OrderAuthorizeClient::new(config);
        assert_eq!(client.endpoint(), "https://sandbox.moip.com.br/v2/orders");

        let config = StaticConfig::new("https://sandbox.moip.com.br/v2", "t");
        let client = OrderAuthorizeClient::new(config);
        assert_eq!(client.endpoint(), "https://sandbox.moip.com.br/v2orders");
    }
}
