//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use crate::application::allowlist::Allowlist;
use crate::application::use_cases::lockfiles::{GetLockfileUseCase, PutLockfileUseCase};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub allowlist: Arc<Allowlist>,
    pub get_lockfile_use_case: Arc<GetLockfileUseCase>,
    pub put_lockfile_use_case: Arc<PutLockfileUseCase>,
}
