use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskFields};

/// Transient edit buffer backing the create/update surface. Empty strings are
/// legal values; the remote service is the only validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskForm {
    pub title: String,
    pub time: String,
    pub description: String,
    pub status: String,
}

impl TaskForm {
    /// Pre-fills the buffer from an existing record, as the edit surface does
    /// when an update is started.
    pub fn prefill(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.time = task.time.clone();
        self.description = task.description.clone();
        self.status = task.status.clone();
    }

    /// Snapshot of the buffer as a request payload.
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            time: self.time.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
        }
    }

    /// Clears the buffer. Called after a successful submit or an explicit
    /// cancel, never after a failed request.
    pub fn reset(&mut self) {
        *self = TaskForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefill_copies_the_editable_fields() {
        let task = Task {
            id: 3,
            title: "Olahraga".to_string(),
            time: "06:00".to_string(),
            description: "lari pagi".to_string(),
            status: "Belum".to_string(),
        };

        let mut form = TaskForm::default();
        form.prefill(&task);
        assert_eq!(form.title, "Olahraga");
        assert_eq!(form.time, "06:00");
        assert_eq!(form.description, "lari pagi");
        assert_eq!(form.status, "Belum");
    }

    #[test]
    fn fields_snapshot_matches_the_buffer() {
        let form = TaskForm {
            title: "a".to_string(),
            time: "t".to_string(),
            description: "d".to_string(),
            status: "s".to_string(),
        };
        let fields = form.fields();
        assert_eq!(fields.title, "a");
        assert_eq!(fields.time, "t");
        assert_eq!(fields.description, "d");
        assert_eq!(fields.status, "s");
    }

    #[test]
    fn reset_returns_to_the_empty_buffer() {
        let mut form = TaskForm {
            title: "a".to_string(),
            time: "t".to_string(),
            description: "d".to_string(),
            status: "s".to_string(),
        };
        form.reset();
        assert_eq!(form, TaskForm::default());
    }
}
