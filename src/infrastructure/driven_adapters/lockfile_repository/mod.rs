//! Lockfile Repository Adapters

pub mod postgres;

pub use postgres::PostgresLockfileRepository;
