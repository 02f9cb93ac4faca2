//! DNS Message Builder
//!
//! Encodes a single-question A/IN query in wire format.

use super::wire_cursor::WireWriter;
use super::{CLASS_IN, FLAG_RD, HEADER_LEN, TYPE_A};
use stubdns_domain::{DomainError, DomainName, QueryId};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a standard recursive A query for `name` carrying transaction `id`.
    ///
    /// Header: id, flags `0x0100` (RD), QDCOUNT 1, all other counts 0.
    /// Label and total length limits are enforced when the `DomainName` is
    /// parsed, so encoding itself cannot fail.
    pub fn build_query(name: &DomainName, id: QueryId) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(HEADER_LEN + name.wire_len() + 4);

        writer.write_u16(id);
        writer.write_u16(FLAG_RD);
        writer.write_u16(1); // QDCOUNT
        writer.write_u16(0); // ANCOUNT
        writer.write_u16(0); // NSCOUNT
        writer.write_u16(0); // ARCOUNT

        writer.write_name(name);
        writer.write_u16(TYPE_A);
        writer.write_u16(CLASS_IN);

        writer.finish()
    }

    /// Parse `domain` and encode it; invalid names surface as
    /// `InvalidDomainName`.
    pub fn build_query_for(domain: &str, id: QueryId) -> Result<Vec<u8>, DomainError> {
        let name = DomainName::parse(domain)?;
        Ok(Self::build_query(&name, id))
    }

    /// Build a query with a random transaction id and return both.
    pub fn build_query_with_id(name: &DomainName) -> (QueryId, Vec<u8>) {
        let id = fastrand::u16(..);
        (id, Self::build_query(name, id))
    }
}
