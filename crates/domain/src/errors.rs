use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("DNS message truncated: {0} bytes, need at least 12")]
    TruncatedMessage(usize),

    #[error("DNS error code {}: {}", .0, rcode_name(*.0))]
    Rcode(u8),

    #[error("Transport error from {server}: {detail}")]
    Transport { server: String, detail: String },

    #[error("Query timeout after {timeout_ms}ms from {server}")]
    QueryTimeout { server: String, timeout_ms: u64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::QueryTimeout { .. })
    }
}

/// Human-readable name for a DNS response code (RFC 1035 §4.1.1).
pub fn rcode_name(code: u8) -> &'static str {
    match code {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        _ => "UNKNOWN",
    }
}
