pub mod client;
pub mod codec;
pub mod transport;

pub use client::ResolverClient;
pub use codec::{DnsMessage, MessageDecoder, MessageEncoder};
pub use transport::{DohTransport, HttpsTransport};
