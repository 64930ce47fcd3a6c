use crate::domain::entities::AnyError;

/// Failures of a single order authorization call.
///
/// A gateway rejection is not an error; see `AuthorizeResult::Rejected`.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("unexpected response from {endpoint}, expected a JSON object: {source}")]
    InvalidResponse {
        endpoint: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("transport error: {0}")]
    Transport(#[source] AnyError),
    #[error("invalid order request: {0}")]
    InvalidRequest(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVariable(&'static str),
    #[error("unknown gateway environment {0:?}, expected \"production\" or \"sandbox\"")]
    InvalidEnvironment(String),
}
