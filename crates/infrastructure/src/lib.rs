//! stubdns Infrastructure Layer
pub mod dns;
