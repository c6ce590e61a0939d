//! Lockfile Registry API
//!
//! A Rust-based microservice for storing repository lockfiles following
//! Clean/Hexagonal Architecture principles. Writes are admission-checked
//! against a periodically refreshed CIDR allowlist.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
