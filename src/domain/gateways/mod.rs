//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod lockfile_repository;
pub mod range_source;

pub use lockfile_repository::LockfileRepository;
pub use range_source::TrustedRangeSource;
