//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::lockfile_repository::LockfileRepository;
pub use gateways::range_source::TrustedRangeSource;
pub use models::lockfile::{Lockfile, LockfileEntry, LockfileId, PutLockfileData};
pub use models::trusted_ranges::TrustedRangeSet;
