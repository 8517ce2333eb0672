use std::sync::{Arc, Mutex};

use crate::models::{Task, TaskFields, TaskId};

/// Local mirror of the remote service's task collection. Mutated only by the
/// sync controller once the remote has acknowledged an operation; the
/// rendering surface holds a clone and reads snapshots.
#[derive(Clone, Default)]
pub struct TaskStore {
    inner: Arc<Mutex<Vec<Task>>>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tasks)),
        }
    }

    pub fn tasks(&self) -> Vec<Task> {
        let guard = self.inner.lock().expect("store poisoned");
        guard.clone()
    }

    pub fn get(&self, id: TaskId) -> Option<Task> {
        let guard = self.inner.lock().expect("store poisoned");
        guard.iter().find(|t| t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        let guard = self.inner.lock().expect("store poisoned");
        guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wholesale replacement from a freshly loaded page. Local contents are
    /// discarded, never merged.
    pub fn replace(&self, tasks: Vec<Task>) {
        let mut guard = self.inner.lock().expect("store poisoned");
        *guard = tasks;
    }

    pub fn push(&self, task: Task) {
        let mut guard = self.inner.lock().expect("store poisoned");
        guard.push(task);
    }

    /// Overwrites the editable fields of the record with the matching id,
    /// keeping its position and id. Returns false when no record matches.
    pub fn apply_fields(&self, id: TaskId, fields: &TaskFields) -> bool {
        let mut guard = self.inner.lock().expect("store poisoned");
        match guard.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = fields.title.clone();
                task.time = fields.time.clone();
                task.description = fields.description.clone();
                task.status = fields.status.clone();
                true
            }
            None => false,
        }
    }

    /// Removes the record with the matching id. Returns false when no record
    /// matches.
    pub fn remove(&self, id: TaskId) -> bool {
        let mut guard = self.inner.lock().expect("store poisoned");
        let before = guard.len();
        guard.retain(|task| task.id != id);
        guard.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: TaskId) -> Task {
        Task {
            id,
            title: format!("task-{id}"),
            time: "08:00".to_string(),
            description: "desc".to_string(),
            status: "Belum".to_string(),
        }
    }

    #[test]
    fn replace_discards_previous_contents() {
        let store = TaskStore::new(vec![make_task(1)]);
        store.replace(vec![make_task(2), make_task(3)]);
        let out = store.tasks();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 2);
        assert_eq!(out[1].id, 3);
    }

    #[test]
    fn push_appends_at_the_end() {
        let store = TaskStore::new(vec![make_task(1)]);
        store.push(make_task(2));
        let out = store.tasks();
        assert_eq!(out.last().map(|t| t.id), Some(2));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn apply_fields_merges_into_the_matching_record_only() {
        let store = TaskStore::new(vec![make_task(1), make_task(2)]);
        let fields = TaskFields {
            title: "b".to_string(),
            time: "09:00".to_string(),
            description: "changed".to_string(),
            status: "Selesai".to_string(),
        };

        assert!(store.apply_fields(1, &fields));
        let out = store.tasks();
        assert_eq!(out[0].id, 1);
        assert_eq!(out[0].title, "b");
        assert_eq!(out[0].time, "09:00");
        assert_eq!(out[0].status, "Selesai");
        // The other record is untouched.
        assert_eq!(out[1], make_task(2));
    }

    #[test]
    fn apply_fields_on_unknown_id_is_a_no_op() {
        let store = TaskStore::new(vec![make_task(1)]);
        let before = store.tasks();
        let fields = TaskFields {
            title: "x".to_string(),
            time: String::new(),
            description: String::new(),
            status: String::new(),
        };
        assert!(!store.apply_fields(999, &fields));
        assert_eq!(store.tasks(), before);
    }

    #[test]
    fn remove_drops_exactly_the_matching_id() {
        let store = TaskStore::new(vec![make_task(1), make_task(2)]);
        assert!(store.remove(1));
        let out = store.tasks();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);

        assert!(!store.remove(999));
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn get_and_len_reflect_contents() {
        let store = TaskStore::default();
        assert!(store.is_empty());
        store.push(make_task(5));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(5).map(|t| t.id), Some(5));
        assert!(store.get(6).is_none());
    }
}
