use std::net::Ipv4Addr;

pub const TYPE_A: u16 = 1;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_MX: u16 = 15;
pub const TYPE_DNAME: u16 = 39;
pub const CLASS_IN: u16 = 1;

/// Pointer to the question name, which always starts right after the header.
const QUESTION_PTR: u16 = 0xC00C;

/// Assembles synthetic DNS replies byte by byte.
pub struct ResponseBuilder {
    buf: Vec<u8>,
    qdcount: u16,
    ancount: u16,
    last_cname_target: Option<u16>,
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 2);
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

impl ResponseBuilder {
    /// Empty NOERROR reply (QR, RD, RA set) carrying `id`.
    pub fn new(id: u16) -> Self {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&[0x81, 0x80]);
        buf.extend_from_slice(&[0u8; 8]);

        Self {
            buf,
            qdcount: 0,
            ancount: 0,
            last_cname_target: None,
        }
    }

    /// Reply to `query`: same id, question section echoed verbatim.
    pub fn answering(query: &[u8]) -> Self {
        let id = u16::from_be_bytes([query[0], query[1]]);
        let mut builder = Self::new(id);
        builder.buf.extend_from_slice(&query[12..]);
        builder.qdcount = 1;
        builder
    }

    pub fn question(mut self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.buf.extend_from_slice(&encode_name(name));
        self.buf.extend_from_slice(&qtype.to_be_bytes());
        self.buf.extend_from_slice(&qclass.to_be_bytes());
        self.qdcount += 1;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.buf[2..4].copy_from_slice(&flags.to_be_bytes());
        self
    }

    pub fn rcode(self, rcode: u8) -> Self {
        self.flags(0x8180 | rcode as u16)
    }

    pub fn truncated(self) -> Self {
        self.flags(0x8380)
    }

    pub fn not_a_response(self) -> Self {
        self.flags(0x0100)
    }

    /// Appends a record with a raw owner encoding.
    pub fn record(
        mut self,
        owner: &[u8],
        rtype: u16,
        rclass: u16,
        ttl: u32,
        rdata: &[u8],
    ) -> Self {
        self.buf.extend_from_slice(owner);
        self.buf.extend_from_slice(&rtype.to_be_bytes());
        self.buf.extend_from_slice(&rclass.to_be_bytes());
        self.buf.extend_from_slice(&ttl.to_be_bytes());
        self.buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        self.buf.extend_from_slice(rdata);
        self.ancount += 1;
        self
    }

    /// A record owned by the question name, via a compression pointer.
    pub fn a(self, address: Ipv4Addr, ttl: u32) -> Self {
        self.record(
            &QUESTION_PTR.to_be_bytes(),
            TYPE_A,
            CLASS_IN,
            ttl,
            &address.octets(),
        )
    }

    /// A record with an uncompressed owner name.
    pub fn a_named(self, owner: &str, address: Ipv4Addr, ttl: u32) -> Self {
        self.record(&encode_name(owner), TYPE_A, CLASS_IN, ttl, &address.octets())
    }

    /// CNAME owned by the question name, or by the previous CNAME's target
    /// when chaining.
    pub fn cname(mut self, target: &str, ttl: u32) -> Self {
        let owner = self.last_cname_target.unwrap_or(QUESTION_PTR);
        // rdata starts after owner(2) + type(2) + class(2) + ttl(4) + rdlength(2)
        let target_offset = (self.buf.len() + 12) as u16;
        self = self.record(
            &owner.to_be_bytes(),
            TYPE_CNAME,
            CLASS_IN,
            ttl,
            &encode_name(target),
        );
        self.last_cname_target = Some(0xC000 | target_offset);
        self
    }

    /// A record owned by the last CNAME target, via a compression pointer.
    pub fn a_for_cname_target(self, address: Ipv4Addr, ttl: u32) -> Self {
        let owner = self.last_cname_target.unwrap_or(QUESTION_PTR);
        self.record(
            &owner.to_be_bytes(),
            TYPE_A,
            CLASS_IN,
            ttl,
            &address.octets(),
        )
    }

    pub fn build(mut self) -> Vec<u8> {
        self.buf[4..6].copy_from_slice(&self.qdcount.to_be_bytes());
        self.buf[6..8].copy_from_slice(&self.ancount.to_be_bytes());
        self.buf
    }
}
