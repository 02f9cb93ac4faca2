use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Longest label allowed on the wire (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name, length bytes and root terminator included.
pub const MAX_NAME_WIRE_LEN: usize = 255;

/// A normalized host name: lowercase, no trailing dot, every label 1..=63
/// bytes and at most 255 bytes once encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name is empty".to_string(),
            ));
        }

        let normalized = trimmed.to_ascii_lowercase();
        let mut wire_len = 1;

        for label in normalized.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    raw
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' is {} bytes, limit is {}",
                    label,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            if label.bytes().any(|b| b.is_ascii_whitespace() || b.is_ascii_control()) {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' contains whitespace or control characters",
                    label
                )));
            }
            wire_len += label.len() + 1;
        }

        if wire_len > MAX_NAME_WIRE_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' encodes to {} bytes, limit is {}",
                trimmed, wire_len, MAX_NAME_WIRE_LEN
            )));
        }

        Ok(Self(normalized.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Encoded size in a question section.
    pub fn wire_len(&self) -> usize {
        self.0.len() + 2
    }

    /// Case-insensitive comparison against a dotted name read off the wire.
    pub fn matches(&self, other: &str) -> bool {
        let other = other.strip_suffix('.').unwrap_or(other);
        self.0.eq_ignore_ascii_case(other)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for DomainName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_len_counts_length_bytes_and_terminator() {
        let name = DomainName::parse("a.bc").unwrap();
        // 1 'a' 2 'b' 'c' 0
        assert_eq!(name.wire_len(), 6);
    }

    #[test]
    fn test_matches_ignores_case_and_trailing_dot() {
        let name = DomainName::parse("example.test").unwrap();
        assert!(name.matches("EXAMPLE.test."));
        assert!(!name.matches("example.tes"));
    }
}
