//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod lockfile;
pub mod trusted_ranges;

pub use lockfile::{Lockfile, LockfileEntry, LockfileId, PutLockfileData};
pub use trusted_ranges::TrustedRangeSet;
