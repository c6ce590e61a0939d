//! DTOs
//!
//! Data transfer objects for the REST API.

pub mod lockfile;

pub use lockfile::{DataEnvelope, EntryDto, LockfileResponseDto, PutLockfileDto};
