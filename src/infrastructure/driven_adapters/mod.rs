//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - Upstream range directory client

pub mod config;
pub mod database;
pub mod lockfile_repository;
pub mod range_source;

pub use config::AppConfig;
pub use lockfile_repository::PostgresLockfileRepository;
pub use range_source::GithubMetaRangeSource;
