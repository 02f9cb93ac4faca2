use super::wire_cursor::WireReader;
use super::{CLASS_IN, FLAG_QR, FLAG_TC, HEADER_LEN, TYPE_A, TYPE_CNAME, TYPE_DNAME};
use std::net::Ipv4Addr;
use stubdns_domain::{DomainError, DomainName, QueryId, ResourceAnswer, ResponseCode};
use tracing::debug;

/// Decoded header fields the parser needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    pub id: QueryId,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
}

impl ResponseHeader {
    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn rcode(&self) -> ResponseCode {
        ResponseCode::from_flags(self.flags)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_header(reader: &mut WireReader<'_>) -> Result<ResponseHeader, DomainError> {
        let id = reader.read_u16()?;
        let flags = reader.read_u16()?;
        let qdcount = reader.read_u16()?;
        let ancount = reader.read_u16()?;
        reader.skip(4)?; // NSCOUNT + ARCOUNT

        Ok(ResponseHeader {
            id,
            flags,
            qdcount,
            ancount,
        })
    }

    /// Decode the first A record of a reply to the query `(expected_id,
    /// expected_name)`. `resolved_at_ms` is stamped on the returned answer.
    pub fn parse(
        bytes: &[u8],
        expected_id: QueryId,
        expected_name: &DomainName,
        resolved_at_ms: u64,
    ) -> Result<ResourceAnswer, DomainError> {
        if bytes.len() < HEADER_LEN {
            return Err(DomainError::TruncatedMessage);
        }

        let mut reader = WireReader::new(bytes);
        let header = Self::parse_header(&mut reader)?;

        if header.id != expected_id {
            return Err(DomainError::MismatchedTransaction {
                expected: expected_id,
                received: header.id,
            });
        }

        if !header.is_response() {
            return Err(DomainError::NotAResponse);
        }

        // No TCP fallback: a truncated reply is unusable.
        if header.is_truncated() {
            return Err(DomainError::TruncatedMessage);
        }

        match header.rcode() {
            ResponseCode::NoError => {}
            ResponseCode::NXDomain => return Err(DomainError::NameError),
            rcode => return Err(DomainError::ServerFailure { rcode }),
        }

        for index in 0..header.qdcount {
            let qname = reader.read_name()?;
            let qtype = reader.read_u16()?;
            let qclass = reader.read_u16()?;

            if index == 0
                && (!expected_name.matches(&qname) || qtype != TYPE_A || qclass != CLASS_IN)
            {
                debug!(
                    expected = %expected_name,
                    received = %qname,
                    qtype,
                    qclass,
                    "Question section does not echo the query"
                );
                return Err(DomainError::QuestionMismatch);
            }
        }

        for _ in 0..header.ancount {
            let owner = reader.read_name()?;
            let rtype = reader.read_u16()?;
            let rclass = reader.read_u16()?;
            let ttl = reader.read_u32()?;
            let rdlength = reader.read_u16()? as usize;
            let rdata = reader.read_bytes(rdlength)?;

            match rtype {
                TYPE_A => {
                    if rclass != CLASS_IN {
                        return Err(DomainError::InvalidDnsResponse(format!(
                            "A record for {} has class {}",
                            owner, rclass
                        )));
                    }
                    if rdata.len() != 4 {
                        return Err(DomainError::InvalidDnsResponse(format!(
                            "A record for {} has {} bytes of data",
                            owner,
                            rdata.len()
                        )));
                    }

                    let address = Ipv4Addr::new(rdata[0], rdata[1], rdata[2], rdata[3]);
                    // RFC 2181 §8: TTLs with the top bit set are treated as zero, so
                    // only values up to 0x7FFF_FFFF come back unchanged.
                    let ttl_secs = if ttl > i32::MAX as u32 { 0 } else { ttl };

                    debug!(
                        domain = %expected_name,
                        owner = %owner,
                        address = %address,
                        ttl = ttl_secs,
                        "DNS response parsed"
                    );

                    return Ok(ResourceAnswer::new(address, ttl_secs, resolved_at_ms));
                }
                TYPE_CNAME | TYPE_DNAME => {
                    debug!(owner = %owner, rtype, "Skipping alias record");
                }
                other => return Err(DomainError::UnsupportedRecordType(other)),
            }
        }

        Err(DomainError::NoAddressRecord)
    }
}
