use async_trait::async_trait;

use super::error::DataStoreError;
use crate::model::{Task, TaskPatch};

/// Query gateway for the task table.
///
/// Implementations execute bound-parameter statements against the store and
/// translate store-level failures into [`DataStoreError`]. Nothing here
/// retries; callers decide what a failure means.
#[async_trait]
pub trait TaskDataStore: Send + Sync {
    /// All rows, newest first (descending id).
    async fn list(&self) -> Result<Vec<Task>, DataStoreError>;

    /// Inserts a row with `finished = false` and returns it with the
    /// store-assigned id and timestamp.
    async fn insert(&self, title: &str) -> Result<Task, DataStoreError>;

    async fn fetch(&self, id: i64) -> Result<Option<Task>, DataStoreError>;

    /// Applies the patch and returns the row as it stands after this call's
    /// own write, or `None` when no row matches the id.
    async fn update(&self, id: i64, patch: &TaskPatch) -> Result<Option<Task>, DataStoreError>;

    /// Returns false when no row matched the id.
    async fn delete(&self, id: i64) -> Result<bool, DataStoreError>;

    /// Round-trips a trivial statement to prove the store is reachable.
    async fn ping(&self) -> Result<(), DataStoreError>;
}
