use quorum_dns_domain::{Answer, DomainError};
use tracing::debug;

use super::{name, rdata, read_u16, read_u32, HEADER_LEN};

/// A decoded DNS response: the answer records, in wire order, with
/// duplicates preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsMessage {
    pub answers: Vec<Answer>,
}

/// Parses raw DNS response messages.
pub struct MessageDecoder;

impl MessageDecoder {
    /// Decode a response message.
    ///
    /// Fails hard only on a header that is too short or a nonzero
    /// response code. Record-level damage never escalates: parsing
    /// stops at the first record that would overrun the buffer and the
    /// answers collected so far are returned as a success.
    pub fn decode(message: &[u8]) -> Result<DnsMessage, DomainError> {
        if message.len() < HEADER_LEN {
            return Err(DomainError::TruncatedMessage(message.len()));
        }

        let flags = read_u16(message, 2).unwrap_or(0);
        let qdcount = read_u16(message, 4).unwrap_or(0);
        let ancount = read_u16(message, 6).unwrap_or(0);

        let rcode = (flags & 0x000F) as u8;
        if rcode != 0 {
            return Err(DomainError::Rcode(rcode));
        }

        if ancount == 0 {
            return Ok(DnsMessage::default());
        }

        let mut offset = HEADER_LEN;
        for _ in 0..qdcount {
            offset = name::skip_name(message, offset);
            offset += 4; // QTYPE + QCLASS
        }

        let mut answers = Vec::new();
        let mut remaining = ancount;

        while remaining > 0 && offset < message.len() {
            offset = name::skip_name(message, offset);

            if offset + 10 > message.len() {
                break;
            }

            let rtype = read_u16(message, offset).unwrap_or(0);
            let ttl = read_u32(message, offset + 4).unwrap_or(0);
            let rdlength = read_u16(message, offset + 8).unwrap_or(0) as usize;
            offset += 10;

            if offset + rdlength > message.len() {
                break;
            }

            if let Some(data) = rdata::decode(rtype, message, offset, rdlength) {
                answers.push(Answer::new(rtype, ttl, data));
            }

            offset += rdlength;
            remaining -= 1;
        }

        debug!(
            ancount = ancount,
            decoded = answers.len(),
            "DNS response parsed"
        );

        Ok(DnsMessage { answers })
    }
}
