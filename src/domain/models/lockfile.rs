//! Lockfile Domain Model
//!
//! Represents a lockfile document stored for an external repository.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Newtype wrapper for the internal Lockfile ID providing type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LockfileId(Uuid);

impl LockfileId {
    /// Create a new random LockfileId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a LockfileId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LockfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LockfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for LockfileId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// One content item inside a lockfile. All fields are opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockfileEntry {
    pub id: String,
    pub path: String,
    pub url: String,
    pub hash: String,
}

/// Data required to create or replace a lockfile
#[derive(Debug, Clone)]
pub struct PutLockfileData {
    pub repository_id: String,
    pub repository_name: String,
    pub entries: Vec<LockfileEntry>,
}

/// Lockfile domain entity, at most one per external repository identifier
#[derive(Debug, Clone)]
pub struct Lockfile {
    id: LockfileId,
    repository_id: String,
    repository_name: String,
    entries: Vec<LockfileEntry>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Lockfile {
    /// Create a new Lockfile from write data
    #[must_use]
    pub fn new(data: PutLockfileData) -> Self {
        let now = Utc::now();
        Self {
            id: LockfileId::new(),
            repository_id: data.repository_id,
            repository_name: data.repository_name,
            entries: data.entries,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Lockfile from persisted data
    #[must_use]
    pub fn restore(
        id: LockfileId,
        repository_id: String,
        repository_name: String,
        entries: Vec<LockfileEntry>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            repository_id,
            repository_name,
            entries,
            created_at,
            updated_at,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &LockfileId {
        &self.id
    }

    #[must_use]
    pub fn repository_id(&self) -> &str {
        &self.repository_id
    }

    #[must_use]
    pub fn repository_name(&self) -> &str {
        &self.repository_name
    }

    #[must_use]
    pub fn entries(&self) -> &[LockfileEntry] {
        &self.entries
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
