pub use crate::application::services::OrderAuthorizeClient;
pub use crate::domain::entities::{
    AnyError, AuthorizeResult, OrderRequest, Transfer, EXT_ORD_ID, RESULT_CODE,
};
pub use crate::domain::error::{ConfigError, GatewayError};
pub use crate::infrastructure::config::{EnvConfig, Environment, GatewayConfig, StaticConfig};
pub use crate::infrastructure::http_clients::{GatewayResponse, GatewayTransport, ReqwestTransport};

pub mod infrastructure;
pub mod domain;
pub mod application;
