//! Lockfile DTOs
//!
//! Data transfer objects for lockfile API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::lockfile::{Lockfile, LockfileEntry, PutLockfileData};

/// One lockfile entry as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EntryDto {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "path must not be empty"))]
    pub path: String,

    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    #[validate(length(min = 1, message = "hash must not be empty"))]
    pub hash: String,
}

impl From<EntryDto> for LockfileEntry {
    fn from(dto: EntryDto) -> Self {
        Self {
            id: dto.id,
            path: dto.path,
            url: dto.url,
            hash: dto.hash,
        }
    }
}

impl From<&LockfileEntry> for EntryDto {
    fn from(entry: &LockfileEntry) -> Self {
        Self {
            id: entry.id.clone(),
            path: entry.path.clone(),
            url: entry.url.clone(),
            hash: entry.hash.clone(),
        }
    }
}

/// DTO for submitting a lockfile.
///
/// An empty `posts` list is permitted (clears the document's content);
/// only the two top-level fields are mandated.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PutLockfileDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "repositoryName must be between 1 and 255 characters"
    ))]
    pub repository_name: String,

    #[validate(nested)]
    pub posts: Vec<EntryDto>,
}

impl PutLockfileDto {
    /// Combine the validated body with the path identifier into write data
    #[must_use]
    pub fn into_data(self, repository_id: String) -> PutLockfileData {
        PutLockfileData {
            repository_id,
            repository_name: self.repository_name,
            entries: self.posts.into_iter().map(LockfileEntry::from).collect(),
        }
    }
}

/// Lockfile response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockfileResponseDto {
    pub id: Uuid,
    pub repository_id: String,
    pub repository_name: String,
    pub content: Vec<EntryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Lockfile> for LockfileResponseDto {
    fn from(lockfile: Lockfile) -> Self {
        Self {
            id: *lockfile.id().as_uuid(),
            repository_id: lockfile.repository_id().to_string(),
            repository_name: lockfile.repository_name().to_string(),
            content: lockfile.entries().iter().map(EntryDto::from).collect(),
            created_at: lockfile.created_at(),
            updated_at: lockfile.updated_at(),
        }
    }
}

/// Success envelope wrapping every 2xx payload
#[derive(Debug, Clone, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
