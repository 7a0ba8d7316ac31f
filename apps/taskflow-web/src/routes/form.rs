//! Create and edit forms.
//!
//! Both flows share one template and one submission shape ([`TaskDraft`]).
//! A blank title never reaches the collaborator: the form re-renders with
//! the submitted values and an inline error instead.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use crud_client::CrudBackend;
use domain_tasks::{TaskDraft, TaskError};
use minijinja::context;
use tracing::error;
use uuid::Uuid;

use crate::routes::detail::not_found;
use crate::state::AppState;

enum FormMode {
    Create,
    Edit(Uuid),
}

pub async fn new_task_page<B: CrudBackend>(State(state): State<AppState<B>>) -> Response {
    render_form(&state, &FormMode::Create, &TaskDraft::default(), None)
}

pub async fn create_task<B: CrudBackend>(
    State(state): State<AppState<B>>,
    Form(draft): Form<TaskDraft>,
) -> Response {
    if draft.title_is_blank() {
        return render_form(
            &state,
            &FormMode::Create,
            &draft,
            Some("Title is required.".to_string()),
        );
    }

    match state.service.create_task(draft.clone()).await {
        Ok(task) => Redirect::to(&format!("/tasks/{}", task.id)).into_response(),
        Err(e) => {
            error!("Failed to create task: {}", e);
            render_form(&state, &FormMode::Create, &draft, Some(save_error(&e)))
        }
    }
}

/// Render the edit form pre-loaded with the stored task.
pub async fn edit_task_page<B: CrudBackend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<Uuid>() else {
        return not_found(&state);
    };

    match state.service.get_task(id).await {
        Ok(task) => render_form(&state, &FormMode::Edit(id), &TaskDraft::from(&task), None),
        Err(e) => {
            error!("Failed to load task {} for editing: {}", id, e);
            not_found(&state)
        }
    }
}

pub async fn update_task<B: CrudBackend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
    Form(draft): Form<TaskDraft>,
) -> Response {
    let Ok(id) = id.parse::<Uuid>() else {
        return not_found(&state);
    };

    if draft.title_is_blank() {
        return render_form(
            &state,
            &FormMode::Edit(id),
            &draft,
            Some("Title is required.".to_string()),
        );
    }

    match state.service.update_task(id, draft.clone()).await {
        Ok(task) => Redirect::to(&format!("/tasks/{}", task.id)).into_response(),
        Err(e) => {
            error!("Failed to update task {}: {}", id, e);
            render_form(&state, &FormMode::Edit(id), &draft, Some(save_error(&e)))
        }
    }
}

fn render_form<B: CrudBackend>(
    state: &AppState<B>,
    mode: &FormMode,
    draft: &TaskDraft,
    error: Option<String>,
) -> Response {
    let (heading, action, cancel_url, submit_label) = match mode {
        FormMode::Create => (
            "New Task",
            "/tasks/new".to_string(),
            "/".to_string(),
            "Create Task",
        ),
        FormMode::Edit(id) => (
            "Edit Task",
            format!("/tasks/{id}/edit"),
            format!("/tasks/{id}"),
            "Save Changes",
        ),
    };

    state.render(
        "form.html",
        context! {
            heading => heading,
            action => action,
            cancel_url => cancel_url,
            submit_label => submit_label,
            error => error,
            draft => context! {
                title => draft.title,
                description => draft.description,
                status => draft.status,
                priority => draft.priority,
                due_date => draft.due_date,
            },
        },
    )
}

fn save_error(error: &TaskError) -> String {
    match error {
        TaskError::TitleRequired => "Title is required.".to_string(),
        TaskError::InvalidDueDate(raw) => {
            format!("'{raw}' is not a valid due date. Use the YYYY-MM-DD format.")
        }
        TaskError::NotFound(_) | TaskError::Backend(_) => {
            "Could not save the task. Please try again.".to_string()
        }
    }
}
