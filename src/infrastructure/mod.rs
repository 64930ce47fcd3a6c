pub mod config;
pub mod http_clients;

pub use config::{
    EnvConfig, Environment, GatewayConfig, StaticConfig, GATEWAY_TIMEOUT, ORDERS_PATH,
};

pub use http_clients::{GatewayResponse, GatewayTransport, ReqwestTransport};
