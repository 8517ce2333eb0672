use serde::{Deserialize, Serialize};

pub type Timestamp = i64;

/// Task ids are assigned by the remote service, never generated locally.
pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub time: String,
    pub description: String,
    pub status: String,
}

/// The four user-editable fields, as sent in create/update request bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskFields {
    pub title: String,
    pub time: String,
    pub description: String,
    pub status: String,
}

impl TaskFields {
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            time: self.time,
            description: self.description,
            status: self.status,
        }
    }
}

/// Response body of `GET /tasks?per_page=N`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPage {
    pub data: Vec<Task>,
}

/// Response body of `POST /tasks`. The service may echo more fields; only
/// the assigned id is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTask {
    pub id: TaskId,
}
