use crate::domain::error::ConfigError;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const GATEWAY_TIMEOUT: Duration = Duration::from_secs(120);
pub const ORDERS_PATH: &str = "orders";

pub const PRODUCTION_URL: &str = "https://api.moip.com.br/v2/";
pub const SANDBOX_URL: &str = "https://sandbox.moip.com.br/v2/";

pub const ENVIRONMENT_VAR: &str = "MOIP_ENVIRONMENT";
pub const API_URL_VAR: &str = "MOIP_API_URL";
pub const OAUTH_TOKEN_VAR: &str = "MOIP_OAUTH_TOKEN";

pub static MOIP_ENVIRONMENT: Lazy<String> = Lazy::new(|| {
    env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "sandbox".to_string())
});
pub static MOIP_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var(API_URL_VAR).ok());
pub static MOIP_OAUTH_TOKEN: Lazy<Option<String>> = Lazy::new(|| env::var(OAUTH_TOKEN_VAR).ok());

/// Source of the gateway base URL and merchant credential.
pub trait GatewayConfig: Send + Sync {
    /// Base URL, expected to end with a slash; `orders` is appended verbatim.
    fn api_url(&self) -> String;
    fn merchant_gateway_oauth(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

/// Configuration read from the process environment.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    environment: Environment,
    api_url: String,
    oauth_token: String,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            MOIP_ENVIRONMENT.as_str(),
            MOIP_API_URL.as_deref(),
            MOIP_OAUTH_TOKEN.as_deref(),
        )
    }

    fn resolve(
        environment: &str,
        api_url: Option<&str>,
        oauth_token: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let environment: Environment = environment.parse()?;
        let oauth_token = oauth_token.ok_or(ConfigError::MissingVariable(OAUTH_TOKEN_VAR))?;
        let api_url = api_url.unwrap_or_else(|| environment.base_url());
        Ok(Self {
            environment,
            api_url: api_url.to_string(),
            oauth_token: oauth_token.to_string(),
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}

impl GatewayConfig for EnvConfig {
    fn api_url(&self) -> String {
        self.api_url.clone()
    }

    fn merchant_gateway_oauth(&self) -> String {
        self.oauth_token.clone()
    }
}

#[derive(Debug, Clone)]
pub struct StaticConfig {
    pub api_url: String,
    pub oauth_token: String,
}

impl StaticConfig {
    pub fn new(api_url: impl Into<String>, oauth_token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            oauth_token: oauth_token.into(),
        }
    }
}

impl GatewayConfig for StaticConfig {
    fn api_url(&self) -> String {
        self.api_url.clone()
    }

    fn merchant_gateway_oauth(&self) -> String {
        self.oauth_token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_selects_base_url() {
        let config = EnvConfig::resolve("production", None, Some("tok")).unwrap();
        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.api_url(), PRODUCTION_URL);

        let config = EnvConfig::resolve("Sandbox", None, Some("tok")).unwrap();
        assert_eq!(config.api_url(), SANDBOX_URL);
    }

    #[test]
    fn explicit_url_overrides_environment() {
        let api_url = Some("http://127.0.0.1:9000/v2/");
        let config = EnvConfig::resolve("production", api_url, Some("tok")).unwrap();
        assert_eq!(config.api_url(), "http://127.0.0.1:9000/v2/");
        assert_eq!(config.merchant_gateway_oauth(), "tok");
    }

    #[test]
    fn token_is_required() {
        let err = EnvConfig::resolve("sandbox", None, None).unwrap_err();
        assert_eq!(err, ConfigError::MissingVariable(OAUTH_TOKEN_VAR));
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = EnvConfig::resolve("staging", None, Some("tok")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidEnvironment("staging".to_string()));
    }

    #[test]
    fn token_is_kept_verbatim() {
        let config = StaticConfig::new(SANDBOX_URL, " padded token ");
        assert_eq!(config.merchant_gateway_oauth(), " padded token ");
    }
}
