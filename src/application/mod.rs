//! Application Layer
//!
//! Contains use cases that orchestrate business logic and the allowlist
//! service maintaining the trusted range snapshot. Both depend on domain
//! gateways (abstractions), not concrete implementations.

pub mod allowlist;
pub mod use_cases;
