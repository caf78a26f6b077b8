#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use quorum_dns_infrastructure::dns::DohTransport;
use quorum_dns_domain::{DomainError, ResolverDescriptor};

// ---------------------------------------------------------------------------
// Wire-format builders for hand-crafted responses
// ---------------------------------------------------------------------------

/// 12-byte response header. Flags carry QR + RD + RA plus the given
/// response code.
pub fn header(rcode: u8, qdcount: u16, ancount: u16) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(12);
    bytes.extend_from_slice(&0x1234u16.to_be_bytes());
    let flags: u16 = 0x8180 | rcode as u16;
    bytes.extend_from_slice(&flags.to_be_bytes());
    bytes.extend_from_slice(&qdcount.to_be_bytes());
    bytes.extend_from_slice(&ancount.to_be_bytes());
    bytes.extend_from_slice(&0u16.to_be_bytes());
    bytes.extend_from_slice(&0u16.to_be_bytes());
    bytes
}

/// Wire-encode a domain name with its zero terminator.
pub fn name(domain: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        bytes.push(label.len() as u8);
        bytes.extend_from_slice(label.as_bytes());
    }
    bytes.push(0);
    bytes
}

/// A 2-byte compression pointer to `offset`.
pub fn pointer(offset: u16) -> Vec<u8> {
    vec![0xC0 | ((offset >> 8) as u8 & 0x3F), (offset & 0xFF) as u8]
}

/// Question section entry: name + QTYPE + QCLASS(IN).
pub fn question(domain: &str, qtype: u16) -> Vec<u8> {
    let mut bytes = name(domain);
    bytes.extend_from_slice(&qtype.to_be_bytes());
    bytes.extend_from_slice(&1u16.to_be_bytes());
    bytes
}

/// Answer record: owner name bytes + fixed fields + RDATA.
pub fn record(owner: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut bytes = owner.to_vec();
    bytes.extend_from_slice(&rtype.to_be_bytes());
    bytes.extend_from_slice(&1u16.to_be_bytes()); // CLASS IN
    bytes.extend_from_slice(&ttl.to_be_bytes());
    bytes.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    bytes.extend_from_slice(rdata);
    bytes
}

/// A complete response with one question and the given answer records.
pub fn response(rcode: u8, domain: &str, qtype: u16, records: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = header(rcode, 1, records.len() as u16);
    bytes.extend_from_slice(&question(domain, qtype));
    for record in records {
        bytes.extend_from_slice(record);
    }
    bytes
}

/// A minimal NOERROR response carrying one A answer for `domain`.
pub fn a_response(domain: &str, octets: [u8; 4], ttl: u32) -> Vec<u8> {
    let owner = pointer(12);
    let rec = record(&owner, 1, ttl, &octets);
    response(0, domain, 1, &[rec])
}

pub fn resolver(name: &str) -> ResolverDescriptor {
    ResolverDescriptor::new(name, format!("https://{name}.example/dns-query"))
}

// ---------------------------------------------------------------------------
// Scripted transport for exercising ResolverClient without a network
// ---------------------------------------------------------------------------

pub enum FakeBehavior {
    /// Return these bytes as the response body.
    Respond(Vec<u8>),
    /// Fail with a transport-level error.
    Error(String),
    /// Never complete; the client's timeout has to fire.
    Hang,
}

pub struct FakeTransport {
    behavior: FakeBehavior,
    calls: AtomicUsize,
    pub sent: Mutex<Vec<Vec<u8>>>,
}

impl FakeTransport {
    pub fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DohTransport for FakeTransport {
    async fn send(
        &self,
        resolver: &ResolverDescriptor,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(message_bytes.to_vec());

        match &self.behavior {
            FakeBehavior::Respond(bytes) => Ok(bytes.clone()),
            FakeBehavior::Error(detail) => Err(DomainError::Transport {
                server: resolver.name.clone(),
                detail: detail.clone(),
            }),
            FakeBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(86_400)).await;
                Err(DomainError::Transport {
                    server: resolver.name.clone(),
                    detail: "unreachable".to_string(),
                })
            }
        }
    }
}
