//! Quorum DNS Application Layer
pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::ResolverProbe;
pub use use_cases::ResolveDomainUseCase;
