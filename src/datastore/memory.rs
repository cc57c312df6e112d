use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::datastore::TaskDataStore;
use super::error::DataStoreError;
use crate::model::{Task, TaskPatch};

/// In-memory task store for tests and development.
///
/// Mimics the production table's observable behavior: ids grow
/// monotonically and are never reused after deletion, `updated_at` is
/// refreshed on every update.
pub struct MemoryTaskStore {
    tasks: Mutex<BTreeMap<i64, Task>>,
    next_id: AtomicI64,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskDataStore for MemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>, DataStoreError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.values().rev().cloned().collect())
    }

    async fn insert(&self, title: &str) -> Result<Task, DataStoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let task = Task {
            id,
            title: title.to_string(),
            finished: false,
            updated_at: chrono::Utc::now().naive_utc(),
        };
        self.tasks.lock().unwrap().insert(id, task.clone());
        Ok(task)
    }

    async fn fetch(&self, id: i64) -> Result<Option<Task>, DataStoreError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.get(&id).cloned())
    }

    async fn update(&self, id: i64, patch: &TaskPatch) -> Result<Option<Task>, DataStoreError> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.get_mut(&id) {
            Some(task) => {
                patch.apply(task);
                task.updated_at = chrono::Utc::now().naive_utc();
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DataStoreError> {
        Ok(self.tasks.lock().unwrap().remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), DataStoreError> {
        Ok(())
    }
}
