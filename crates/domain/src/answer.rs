use serde::{Deserialize, Serialize};

use crate::record_type::RecordType;

/// One decoded resource record from an answer section.
///
/// `data` is the textual rendering of the RDATA and its shape depends on
/// the record type (dotted quad for A, "priority name" for MX, and so
/// on). Answers keep the order they appeared in on the wire and
/// duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Numeric record type code as it appeared on the wire.
    #[serde(rename = "type")]
    pub rtype: u16,

    /// Time-to-live in seconds.
    pub ttl: u32,

    /// Decoded textual representation of the RDATA.
    pub data: String,
}

impl Answer {
    pub fn new(rtype: u16, ttl: u32, data: impl Into<String>) -> Self {
        Self {
            rtype,
            ttl,
            data: data.into(),
        }
    }

    /// The known record type, if the wire code maps to one.
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }
}
