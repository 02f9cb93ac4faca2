#![allow(dead_code)]

pub mod dns_server_mock;
pub mod mock_transport;
pub mod response_builder;

pub use dns_server_mock::{MockDnsServer, ServerBehavior};
pub use mock_transport::{Reply, ScriptedTransport};
pub use response_builder::ResponseBuilder;
