//! Lockfile Repository Gateway
//!
//! Abstract trait defining the contract for lockfile persistence operations.

use async_trait::async_trait;

use crate::domain::models::lockfile::{Lockfile, PutLockfileData};
use crate::shared::errors::RepositoryError;

/// Repository trait for Lockfile persistence operations
#[async_trait]
pub trait LockfileRepository: Send + Sync {
    /// Find a lockfile by its external repository identifier.
    ///
    /// Absence is a normal outcome, not a storage fault.
    async fn find_by_repository_id(
        &self,
        repository_id: &str,
    ) -> Result<Option<Lockfile>, RepositoryError>;

    /// Create or replace the lockfile for a repository identifier.
    ///
    /// Must be a single atomic upsert keyed on the repository identifier
    /// uniqueness constraint: `id` and `created_at` are preserved for an
    /// existing row, everything else is replaced as one unit.
    async fn upsert(&self, data: &PutLockfileData) -> Result<Lockfile, RepositoryError>;
}
