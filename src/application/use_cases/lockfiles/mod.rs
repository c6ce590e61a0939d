//! Lockfile Use Cases
//!
//! Business logic for reading and writing repository lockfiles.

mod get_lockfile;
mod put_lockfile;

pub use get_lockfile::GetLockfileUseCase;
pub use put_lockfile::PutLockfileUseCase;
