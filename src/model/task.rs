use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::ModelError;

/// Minimum trimmed title length accepted on creation.
pub const MIN_TITLE_LEN: usize = 3;

/// Task is a unit of work tracked by the board.
///
/// `id` and `updated_at` are store-assigned: the id comes from the table's
/// auto-increment counter and is never reused after deletion, the timestamp
/// is refreshed by the store on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub finished: bool,
    pub updated_at: NaiveDateTime,
}

/// Creation payload. `finished` always starts out false.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewTask {
    pub title: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Returns the trimmed title, or a validation error when the title is
    /// absent or shorter than [`MIN_TITLE_LEN`] after trimming.
    pub fn validated_title(&self) -> Result<String, ModelError> {
        let title = self.title.as_deref().unwrap_or("").trim();
        if title.chars().count() < MIN_TITLE_LEN {
            return Err(ModelError::TitleTooShort(MIN_TITLE_LEN));
        }
        Ok(title.to_string())
    }
}

/// Partial update payload: a supplied field overwrites the stored value, an
/// omitted field keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub finished: Option<bool>,
}

impl TaskPatch {
    pub fn rename(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            finished: None,
        }
    }

    pub fn finish(finished: bool) -> Self {
        Self {
            title: None,
            finished: Some(finished),
        }
    }

    /// Applies the patch to an existing row, field by field.
    ///
    /// The store-side timestamp refresh is not modelled here; callers that
    /// mimic the store must set `updated_at` themselves.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(finished) = self.finished {
            task.finished = finished;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_validation() {
        // GIVEN
        let task = NewTask::new("  Buy milk  ");

        // WHEN
        let title = task.validated_title().unwrap();

        // THEN
        assert_eq!(title, "Buy milk", "title is trimmed before storage");
    }

    #[test]
    fn test_title_exactly_at_minimum() {
        let task = NewTask::new(" abc ");
        assert_eq!(task.validated_title().unwrap(), "abc");
    }

    #[test]
    fn test_title_too_short_after_trim() {
        let task = NewTask::new("  ab  ");
        assert_eq!(
            task.validated_title().unwrap_err(),
            ModelError::TitleTooShort(MIN_TITLE_LEN)
        );
    }

    #[test]
    fn test_title_absent() {
        let task = NewTask { title: None };
        assert!(task.validated_title().is_err());
    }

    #[test]
    fn test_title_whitespace_only() {
        let task = NewTask::new("   \t ");
        assert!(task.validated_title().is_err());
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        // GIVEN
        let mut task = Task {
            id: 1,
            title: "Buy milk".to_string(),
            finished: false,
            updated_at: chrono::Utc::now().naive_utc(),
        };

        // WHEN
        TaskPatch::finish(true).apply(&mut task);

        // THEN
        assert_eq!(task.title, "Buy milk", "omitted title keeps prior value");
        assert!(task.finished);

        // WHEN
        TaskPatch::rename("Buy oat milk").apply(&mut task);

        // THEN
        assert_eq!(task.title, "Buy oat milk");
        assert!(task.finished, "omitted finished keeps prior value");
    }

    #[test]
    fn test_patch_rejects_wrongly_typed_finished() {
        // the wire representation of finished must be a boolean, not a string
        let result = serde_json::from_str::<TaskPatch>(r#"{"finished": "yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_patch_deserializes() {
        let patch = serde_json::from_str::<TaskPatch>("{}").unwrap();
        assert_eq!(patch, TaskPatch::default());
    }
}
