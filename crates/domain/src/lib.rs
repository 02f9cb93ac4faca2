//! stubdns Domain Layer
pub mod config;
pub mod dns_answer;
pub mod domain_name;
pub mod errors;
pub mod response_code;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, UpstreamConfig};
pub use dns_answer::{QueryId, ResourceAnswer};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use response_code::ResponseCode;
