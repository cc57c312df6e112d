use crate::model::Task;

/// Ordered client-held copy of the task collection.
///
/// Not authoritative: entries are replaced or removed as confirmed server
/// responses arrive, keyed by task id. Newest tasks sit at the front, which
/// matches the service's descending-id listing.
#[derive(Debug, Default)]
pub struct TaskMirror {
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
}

impl TaskMirror {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Rebuilds the mirror from a full listing.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loading = false;
        self.error = None;
    }

    /// Records a failed listing; existing entries are kept as-is.
    pub fn fail_loading(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Inserts a freshly created task at the front.
    pub fn prepend(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Replaces the entry with the same id by the server's row, so
    /// store-computed fields stay accurate. Unknown ids are ignored.
    pub fn replace(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|entry| entry.id == task.id) {
            *slot = task;
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.tasks.retain(|task| task.id != id);
    }
}
