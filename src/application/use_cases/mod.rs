//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod lockfiles;

pub use lockfiles::{GetLockfileUseCase, PutLockfileUseCase};
