//! Bounds-checked cursors over DNS messages.
//!
//! Every read goes through [`WireReader`], which fails with
//! [`DomainError::TruncatedMessage`] instead of indexing past the buffer.

use stubdns_domain::domain_name::MAX_NAME_WIRE_LEN;
use stubdns_domain::{DomainError, DomainName};

/// Upper bound on compression pointers followed while reading one name.
const MAX_POINTER_JUMPS: usize = 64;

pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DomainError> {
        self.read_bytes(n).map(|_| ())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(n)
            .ok_or(DomainError::TruncatedMessage)?;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or(DomainError::TruncatedMessage)?;
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a possibly compressed name and returns it dotted, without the
    /// trailing root dot.
    ///
    /// The cursor ends up just past the name as it appears in place: after
    /// the terminating zero, or after the first compression pointer.
    pub fn read_name(&mut self) -> Result<String, DomainError> {
        let mut name = String::new();
        let mut pos = self.pos;
        let mut resume_at = None;
        let mut jumps = 0;
        let mut wire_len = 1;

        loop {
            let len = *self.buf.get(pos).ok_or(DomainError::TruncatedMessage)?;

            match len & 0xC0 {
                0x00 => {
                    pos += 1;
                    if len == 0 {
                        break;
                    }

                    let end = pos + len as usize;
                    let label = self
                        .buf
                        .get(pos..end)
                        .ok_or(DomainError::TruncatedMessage)?;

                    wire_len += label.len() + 1;
                    if wire_len > MAX_NAME_WIRE_LEN {
                        return Err(DomainError::MalformedName(format!(
                            "name at offset {} exceeds {} bytes",
                            self.pos, MAX_NAME_WIRE_LEN
                        )));
                    }

                    if !name.is_empty() {
                        name.push('.');
                    }
                    name.push_str(&String::from_utf8_lossy(label));
                    pos = end;
                }
                0xC0 => {
                    let low = *self.buf.get(pos + 1).ok_or(DomainError::TruncatedMessage)?;
                    let target = (((len & 0x3F) as usize) << 8) | low as usize;

                    if target >= pos {
                        return Err(DomainError::MalformedName(format!(
                            "compression pointer at offset {} does not point backwards",
                            pos
                        )));
                    }

                    jumps += 1;
                    if jumps > MAX_POINTER_JUMPS {
                        return Err(DomainError::MalformedName(
                            "too many compression pointers".to_string(),
                        ));
                    }

                    resume_at.get_or_insert(pos + 2);
                    pos = target;
                }
                _ => {
                    return Err(DomainError::MalformedName(format!(
                        "reserved label type {:#04x} at offset {}",
                        len, pos
                    )));
                }
            }
        }

        self.pos = resume_at.unwrap_or(pos);
        Ok(name)
    }
}

pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes `name` uncompressed: length-prefixed labels and a zero byte.
    pub fn write_name(&mut self, name: &DomainName) {
        for label in name.labels() {
            self.write_u8(label.len() as u8);
            self.write_bytes(label.as_bytes());
        }
        self.write_u8(0);
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
