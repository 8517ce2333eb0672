use crate::models::Task;

pub const EVENT_STATE_UPDATED: &str = "state_updated";
pub const EVENT_NOTICE: &str = "notice";

/// Snapshot pushed to the rendering surface after every store mutation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StatePayload {
    pub tasks: Vec<Task>,
}

/// Informational confirmation shown after a mutating operation succeeds.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Seam to the rendering surface. The surface is a read-only observer: it
/// receives snapshots and notices, and is asked to close the edit surface
/// after a successful submit. It never mutates the store.
pub trait RenderSurface {
    fn state_updated(&self, payload: StatePayload);
    fn notice(&self, notice: Notice);
    fn dismiss_editor(&self);
}
