//! DNS wire format (RFC 1035 §4.1) for single-question A lookups.

pub mod message_builder;
pub mod response_parser;
pub mod wire_cursor;

pub use message_builder::MessageBuilder;
pub use response_parser::ResponseParser;
pub use wire_cursor::{WireReader, WireWriter};

pub const HEADER_LEN: usize = 12;

pub const FLAG_QR: u16 = 0x8000;
pub const FLAG_TC: u16 = 0x0200;
pub const FLAG_RD: u16 = 0x0100;

pub const TYPE_A: u16 = 1;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_DNAME: u16 = 39;
pub const CLASS_IN: u16 = 1;
