use tracing::warn;

use super::mirror::TaskMirror;
use super::service::TaskService;
use crate::model::TaskPatch;

/// Transient edit mode for a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub task_id: i64,
    pub draft: String,
}

/// Intent layer of the task list: owns the mirror, the input field, the
/// per-row edit state and a blocking alert.
///
/// Every mutation waits for the service to confirm before the mirror
/// changes, so there is no rollback path. Completions for different rows
/// may land in any order; each mirror update is keyed by id, which makes
/// the interleaving safe.
pub struct TaskListView {
    service: TaskService,
    mirror: TaskMirror,
    input: String,
    editing: Option<EditDraft>,
    alert: Option<String>,
}

impl TaskListView {
    pub fn new(service: TaskService) -> Self {
        Self {
            service,
            mirror: TaskMirror::new(),
            input: String::new(),
            editing: None,
            alert: None,
        }
    }

    pub fn mirror(&self) -> &TaskMirror {
        &self.mirror
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    /// Takes the pending alert, clearing it; the caller decides how to show
    /// it.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Initial fetch, also used by the retry affordance of the error
    /// banner.
    pub async fn load(&mut self) {
        self.mirror.begin_loading();
        match self.service.list().await {
            Ok(tasks) => self.mirror.replace_all(tasks),
            Err(err) => {
                warn!(reason = %err, "Unable to load tasks.");
                self.mirror
                    .fail_loading(format!("unable to load tasks: {}", err));
            }
        }
    }

    /// Creates a task from the input field.
    ///
    /// Empty input is dropped without a network call. The row enters the
    /// mirror only after the service confirms, so a failed creation leaves
    /// no phantom row behind.
    pub async fn submit(&mut self) {
        let title = self.input.trim().to_string();
        if title.is_empty() {
            return;
        }
        match self.service.create(&title).await {
            Ok(task) => {
                self.mirror.prepend(task);
                self.input.clear();
            }
            Err(err) => self.alert = Some(format!("unable to add task: {}", err)),
        }
    }

    /// Flips the finished flag of one row.
    pub async fn toggle(&mut self, id: i64) {
        let Some(current) = self.mirror.get(id) else {
            return;
        };
        let patch = TaskPatch::finish(!current.finished);
        match self.service.update(id, &patch).await {
            // the whole row is replaced so the store-side timestamp stays
            // accurate
            Ok(task) => self.mirror.replace(task),
            Err(err) => self.alert = Some(format!("unable to update task: {}", err)),
        }
    }

    pub fn begin_edit(&mut self, id: i64) {
        if let Some(task) = self.mirror.get(id) {
            self.editing = Some(EditDraft {
                task_id: id,
                draft: task.title.clone(),
            });
        }
    }

    pub fn set_draft(&mut self, value: impl Into<String>) {
        if let Some(editing) = &mut self.editing {
            editing.draft = value.into();
        }
    }

    /// Confirms the edit. An empty draft keeps edit mode open; a failed
    /// update keeps the draft so nothing typed is lost.
    pub async fn confirm_edit(&mut self) {
        let Some(editing) = &self.editing else {
            return;
        };
        let title = editing.draft.trim().to_string();
        if title.is_empty() {
            return;
        }
        let id = editing.task_id;
        match self.service.update(id, &TaskPatch::rename(title)).await {
            Ok(task) => {
                self.mirror.replace(task);
                self.editing = None;
            }
            Err(err) => self.alert = Some(format!("unable to update task: {}", err)),
        }
    }

    /// Discards the draft without any network call.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub async fn remove(&mut self, id: i64) {
        match self.service.delete(id).await {
            Ok(()) => self.mirror.remove(id),
            Err(err) => self.alert = Some(format!("unable to delete task: {}", err)),
        }
    }
}
