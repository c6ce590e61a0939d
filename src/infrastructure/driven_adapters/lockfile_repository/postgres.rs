//! PostgreSQL Lockfile Repository Implementation
//!
//! Implements the LockfileRepository trait using SQLx for PostgreSQL.
//! The entry list is stored as an opaque JSONB column and round-trips
//! through an explicit codec (`StoredEntry`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::LockfileRepository;
use crate::domain::models::lockfile::{Lockfile, LockfileEntry, LockfileId, PutLockfileData};
use crate::shared::errors::RepositoryError;

/// Database row representation for the lockfiles table
#[derive(Debug, sqlx::FromRow)]
struct LockfileRow {
    id: Uuid,
    repository_id: String,
    repository_name: String,
    content: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Serialized form of one lockfile entry inside the content column
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    id: String,
    path: String,
    url: String,
    hash: String,
}

impl From<&LockfileEntry> for StoredEntry {
    fn from(entry: &LockfileEntry) -> Self {
        Self {
            id: entry.id.clone(),
            path: entry.path.clone(),
            url: entry.url.clone(),
            hash: entry.hash.clone(),
        }
    }
}

impl From<StoredEntry> for LockfileEntry {
    fn from(stored: StoredEntry) -> Self {
        Self {
            id: stored.id,
            path: stored.path,
            url: stored.url,
            hash: stored.hash,
        }
    }
}

/// Encode the entry list for the content column
fn encode_entries(entries: &[LockfileEntry]) -> Result<serde_json::Value, RepositoryError> {
    let stored: Vec<StoredEntry> = entries.iter().map(StoredEntry::from).collect();
    serde_json::to_value(stored)
        .map_err(|e| RepositoryError::Mapping(format!("Failed to serialize content: {e}")))
}

/// Decode the entry list from the content column
fn decode_entries(content: serde_json::Value) -> Result<Vec<LockfileEntry>, RepositoryError> {
    let stored: Vec<StoredEntry> = serde_json::from_value(content)
        .map_err(|e| RepositoryError::Mapping(format!("Failed to parse content: {e}")))?;
    Ok(stored.into_iter().map(LockfileEntry::from).collect())
}

impl TryFrom<LockfileRow> for Lockfile {
    type Error = RepositoryError;

    fn try_from(row: LockfileRow) -> Result<Self, Self::Error> {
        let entries = decode_entries(row.content)?;

        Ok(Lockfile::restore(
            LockfileId::from_uuid(row.id),
            row.repository_id,
            row.repository_name,
            entries,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL implementation of LockfileRepository
pub struct PostgresLockfileRepository {
    pool: PgPool,
}

impl PostgresLockfileRepository {
    /// Create a new PostgresLockfileRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LockfileRepository for PostgresLockfileRepository {
    async fn find_by_repository_id(
        &self,
        repository_id: &str,
    ) -> Result<Option<Lockfile>, RepositoryError> {
        let row = sqlx::query_as::<_, LockfileRow>(
            r#"
            SELECT id, repository_id, repository_name, content, created_at, updated_at
            FROM lockfiles
            WHERE repository_id = $1
            "#,
        )
        .bind(repository_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Lockfile::try_from).transpose()
    }

    async fn upsert(&self, data: &PutLockfileData) -> Result<Lockfile, RepositoryError> {
        let content = encode_entries(&data.entries)?;

        // Single conditional insert-or-update keyed on the repository_id
        // uniqueness constraint. The conflict arm leaves id and created_at
        // untouched, so they stay immutable once set.
        let row = sqlx::query_as::<_, LockfileRow>(
            r#"
            INSERT INTO lockfiles (id, repository_id, repository_name, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            ON CONFLICT (repository_id) DO UPDATE
            SET repository_name = EXCLUDED.repository_name,
                content = EXCLUDED.content,
                updated_at = NOW()
            RETURNING id, repository_id, repository_name, content, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.repository_id)
        .bind(&data.repository_name)
        .bind(&content)
        .fetch_one(&self.pool)
        .await?;

        Lockfile::try_from(row)
    }
}
