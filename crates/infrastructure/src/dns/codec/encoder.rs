use quorum_dns_domain::{DomainError, RecordType};

use super::HEADER_LEN;

/// Labels longer than this cannot be length-prefixed in one byte.
const MAX_LABEL_LEN: usize = 63;
/// Upper bound on an encoded name, terminator included (RFC 1035 §2.3.4).
const MAX_NAME_LEN: usize = 255;

/// Builds DNS query messages in wire format.
pub struct MessageEncoder;

impl MessageEncoder {
    /// Build a standard recursive query for `domain` / `record_type`.
    ///
    /// The message is a 12-byte header (random transaction ID, RD flag
    /// set, one question) followed by the question section. Domains
    /// that cannot be encoded legally are rejected rather than emitted
    /// malformed.
    pub fn encode(domain: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        let name = Self::encode_name(domain)?;

        let mut message = Vec::with_capacity(HEADER_LEN + name.len() + 4);
        message.extend_from_slice(&fastrand::u16(..).to_be_bytes());
        message.extend_from_slice(&0x0100u16.to_be_bytes()); // standard query, recursion desired
        message.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
        message.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
        message.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
        message.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT

        message.extend_from_slice(&name);
        message.extend_from_slice(&record_type.to_u16().to_be_bytes());
        message.extend_from_slice(&1u16.to_be_bytes()); // QCLASS IN

        Ok(message)
    }

    /// Wire-encode a domain name: each non-empty label prefixed by its
    /// length, terminated by a zero byte. Empty labels (leading,
    /// trailing or doubled dots) are skipped.
    fn encode_name(domain: &str) -> Result<Vec<u8>, DomainError> {
        let mut encoded = Vec::with_capacity(domain.len() + 2);

        for label in domain.split('.').filter(|l| !l.is_empty()) {
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' exceeds {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            encoded.push(label.len() as u8);
            encoded.extend_from_slice(label.as_bytes());
        }

        if encoded.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains no labels",
                domain
            )));
        }

        encoded.push(0);

        if encoded.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "encoded name is {} bytes, limit is {}",
                encoded.len(),
                MAX_NAME_LEN
            )));
        }

        Ok(encoded)
    }
}
