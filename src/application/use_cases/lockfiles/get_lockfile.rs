//! Get Lockfile Use Case
//!
//! Retrieves the lockfile stored for a repository identifier.

use std::sync::Arc;

use crate::domain::gateways::LockfileRepository;
use crate::domain::models::lockfile::Lockfile;
use crate::shared::errors::UseCaseError;

/// Use case for looking up a lockfile by repository identifier
pub struct GetLockfileUseCase {
    lockfile_repository: Arc<dyn LockfileRepository>,
}

impl GetLockfileUseCase {
    /// Create a new GetLockfileUseCase
    #[must_use]
    pub fn new(lockfile_repository: Arc<dyn LockfileRepository>) -> Self {
        Self {
            lockfile_repository,
        }
    }

    /// Execute the use case.
    ///
    /// A missing lockfile is `Ok(None)`, not an error: absence is a normal
    /// outcome distinct from a storage fault.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, repository_id: &str) -> Result<Option<Lockfile>, UseCaseError> {
        tracing::debug!(repository_id, "Getting lockfile");

        let lockfile = self
            .lockfile_repository
            .find_by_repository_id(repository_id)
            .await?;

        if lockfile.is_none() {
            tracing::debug!(repository_id, "No lockfile stored for repository");
        }

        Ok(lockfile)
    }
}
