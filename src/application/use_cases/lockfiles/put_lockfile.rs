//! Put Lockfile Use Case
//!
//! Creates or replaces the lockfile stored for a repository identifier.

use std::sync::Arc;

use crate::domain::gateways::LockfileRepository;
use crate::domain::models::lockfile::{Lockfile, PutLockfileData};
use crate::shared::errors::UseCaseError;

/// Use case for idempotent create-or-replace of a lockfile
pub struct PutLockfileUseCase {
    lockfile_repository: Arc<dyn LockfileRepository>,
}

impl PutLockfileUseCase {
    /// Create a new PutLockfileUseCase
    #[must_use]
    pub fn new(lockfile_repository: Arc<dyn LockfileRepository>) -> Self {
        Self {
            lockfile_repository,
        }
    }

    /// Execute the use case.
    ///
    /// The repository upsert is a single atomic statement, so concurrent
    /// writes for the same identifier resolve to last-write-wins with the
    /// whole row replaced as one unit.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: PutLockfileData) -> Result<Lockfile, UseCaseError> {
        tracing::info!(
            repository_id = %data.repository_id,
            repository_name = %data.repository_name,
            entries = data.entries.len(),
            "Storing lockfile"
        );

        let stored = self.lockfile_repository.upsert(&data).await?;

        tracing::info!(
            lockfile_id = %stored.id(),
            repository_id = %stored.repository_id(),
            "Lockfile stored successfully"
        );

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::lockfile::LockfileEntry;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockLockfileRepository {
        upsert_result: Mutex<Option<Result<Lockfile, RepositoryError>>>,
        last_upsert: Mutex<Option<PutLockfileData>>,
    }

    impl MockLockfileRepository {
        fn new() -> Self {
            Self {
                upsert_result: Mutex::new(None),
                last_upsert: Mutex::new(None),
            }
        }

        fn with_upsert(self, result: Result<Lockfile, RepositoryError>) -> Self {
            *self.upsert_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl LockfileRepository for MockLockfileRepository {
        async fn find_by_repository_id(
            &self,
            _repository_id: &str,
        ) -> Result<Option<Lockfile>, RepositoryError> {
            Ok(None)
        }

        async fn upsert(&self, data: &PutLockfileData) -> Result<Lockfile, RepositoryError> {
            *self.last_upsert.lock().unwrap() = Some(data.clone());
            self.upsert_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Lockfile::new(data.clone())))
        }
    }

    fn put_data() -> PutLockfileData {
        PutLockfileData {
            repository_id: "repo-1".to_string(),
            repository_name: "My Repo".to_string(),
            entries: vec![LockfileEntry {
                id: "a".to_string(),
                path: "/p".to_string(),
                url: "http://x".to_string(),
                hash: "h1".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn should_store_lockfile_and_return_it() {
        let repo = Arc::new(MockLockfileRepository::new());

        let use_case = PutLockfileUseCase::new(repo.clone());
        let result = use_case.execute(put_data()).await;

        assert!(result.is_ok());
        let stored = result.unwrap();
        assert_eq!(stored.repository_id(), "repo-1");
        assert_eq!(stored.repository_name(), "My Repo");
        assert_eq!(stored.entries().len(), 1);

        let sent = repo.last_upsert.lock().unwrap().take().unwrap();
        assert_eq!(sent.repository_name, "My Repo");
    }

    #[tokio::test]
    async fn should_accept_empty_entry_list() {
        let repo = Arc::new(MockLockfileRepository::new());

        let use_case = PutLockfileUseCase::new(repo);
        let result = use_case
            .execute(PutLockfileData {
                entries: vec![],
                ..put_data()
            })
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().entries().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_storage_fault() {
        let repo = Arc::new(MockLockfileRepository::new().with_upsert(Err(
            RepositoryError::Mapping("serialization failed".to_string()),
        )));

        let use_case = PutLockfileUseCase::new(repo);
        let result = use_case.execute(put_data()).await;

        assert!(matches!(result, Err(UseCaseError::Repository(_))));
    }
}
