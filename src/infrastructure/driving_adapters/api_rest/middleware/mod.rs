//! API Middleware
//!
//! Admission control and other middleware for the REST API.

pub mod admission;

pub use admission::AdmissionGuard;
