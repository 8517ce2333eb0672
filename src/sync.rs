use crate::events::{Notice, RenderSurface, StatePayload};
use crate::form::TaskForm;
use crate::models::{Task, TaskId};
use crate::remote::RemoteTaskService;
use crate::store::TaskStore;

/// Envelope handed back to the UI bridge. Failures carry a message for an
/// informational notice; they never panic and never leave the store half
/// mutated.
#[derive(Debug, serde::Serialize)]
pub struct CommandResult<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

fn ok<T>(data: T) -> CommandResult<T> {
    CommandResult {
        ok: true,
        data: Some(data),
        error: None,
    }
}

fn err<T>(message: &str) -> CommandResult<T> {
    CommandResult {
        ok: false,
        data: None,
        error: Some(message.to_string()),
    }
}

/// Fetches one page from the remote service and replaces the store contents
/// wholesale. On failure the store keeps its previous value.
pub async fn load_tasks(
    remote: &impl RemoteTaskService,
    surface: &impl RenderSurface,
    store: &TaskStore,
) -> CommandResult<Vec<Task>> {
    let page = match remote.list().await {
        Ok(tasks) => tasks,
        Err(error) => {
            log::warn!("load tasks failed: {error}");
            return err(&format!("task service error: {error}"));
        }
    };

    store.replace(page);
    let tasks = store.tasks();
    surface.state_updated(StatePayload {
        tasks: tasks.clone(),
    });
    ok(tasks)
}

/// Submits the form as a new task. The record enters the store only once the
/// service has acknowledged it and assigned an id.
pub async fn create_task(
    remote: &impl RemoteTaskService,
    surface: &impl RenderSurface,
    store: &TaskStore,
    form: &mut TaskForm,
) -> CommandResult<Task> {
    let fields = form.fields();
    let id = match remote.create(&fields).await {
        Ok(id) => id,
        Err(error) => {
            log::warn!("create task failed: {error}");
            return err(&format!("task service error: {error}"));
        }
    };

    let task = fields.into_task(id);
    store.push(task.clone());
    form.reset();

    surface.state_updated(StatePayload {
        tasks: store.tasks(),
    });
    surface.notice(Notice {
        title: "Task Created".to_string(),
        message: format!("task {id} added"),
    });
    surface.dismiss_editor();
    ok(task)
}

/// Submits the form as an update of `id` and merges the editable fields into
/// the matching record. The edit surface pre-fills the form, so unchanged
/// fields carry their prior values forward.
pub async fn update_task(
    remote: &impl RemoteTaskService,
    surface: &impl RenderSurface,
    store: &TaskStore,
    id: TaskId,
    form: &mut TaskForm,
) -> CommandResult<bool> {
    let fields = form.fields();
    if let Err(error) = remote.update(id, &fields).await {
        log::warn!("update task id={id} failed: {error}");
        return err(&format!("task service error: {error}"));
    }

    if !store.apply_fields(id, &fields) {
        // The service acknowledged an id the local mirror does not hold.
        log::debug!("update acknowledged for unknown task id={id}; store unchanged");
        #[cfg(feature = "strict-ids")]
        return err("task not found");
    }

    form.reset();
    surface.state_updated(StatePayload {
        tasks: store.tasks(),
    });
    surface.notice(Notice {
        title: "Task Updated".to_string(),
        message: format!("task {id} updated"),
    });
    surface.dismiss_editor();
    ok(true)
}

/// Deletes `id` on the service and drops the matching record from the store.
pub async fn delete_task(
    remote: &impl RemoteTaskService,
    surface: &impl RenderSurface,
    store: &TaskStore,
    id: TaskId,
) -> CommandResult<bool> {
    if let Err(error) = remote.delete(id).await {
        log::warn!("delete task id={id} failed: {error}");
        return err(&format!("task service error: {error}"));
    }

    if !store.remove(id) {
        log::debug!("delete acknowledged for unknown task id={id}; store unchanged");
        #[cfg(feature = "strict-ids")]
        return err("task not found");
    }

    surface.state_updated(StatePayload {
        tasks: store.tasks(),
    });
    surface.notice(Notice {
        title: "Task Deleted".to_string(),
        message: format!("task {id} removed"),
    });
    ok(true)
}
