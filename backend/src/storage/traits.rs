//! # Storage Traits
//!
//! Storage abstraction used by the domain layer, plus the error type every
//! backend reports through.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::coroinha::{Coroinha, CoroinhaPatch, NewCoroinha};

/// Failures a storage backend can report.
/// "Not found" is not an error here: lookups return `Option`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored record {id} is corrupt: {reason}")]
    Corrupt { id: String, reason: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Trait defining the interface for roster record storage
#[async_trait]
pub trait CoroinhaStorage: Send + Sync {
    /// Assign a fresh id, persist the record and return the stored form
    async fn insert(&self, coroinha: NewCoroinha) -> StorageResult<Coroinha>;

    /// Every stored record, in insertion order
    async fn list_all(&self) -> StorageResult<Vec<Coroinha>>;

    /// Exact id lookup
    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Coroinha>>;

    /// Replace the fields present in `patch` and return the updated record.
    /// Returns `None` when no record has this id.
    async fn update_by_id(&self, id: Uuid, patch: CoroinhaPatch) -> StorageResult<Option<Coroinha>>;

    /// Remove the record and return what was removed
    async fn delete_by_id(&self, id: Uuid) -> StorageResult<Option<Coroinha>>;
}
