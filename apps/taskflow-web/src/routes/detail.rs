//! Task detail page and deletion.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use crud_client::CrudBackend;
use minijinja::context;
use tracing::{error, warn};
use uuid::Uuid;

use crate::state::AppState;
use crate::views::TaskView;

/// Render a single task. A malformed id, a missing task, and a collaborator
/// failure all land on the same not-found page; the distinction only matters
/// in the logs.
pub async fn task_page<B: CrudBackend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<Uuid>() else {
        warn!("Rejecting malformed task id: {}", id);
        return not_found(&state);
    };

    match state.service.get_task(id).await {
        Ok(task) => state.render("detail.html", context! { task => TaskView::from(&task) }),
        Err(e) => {
            error!("Failed to load task {}: {}", id, e);
            not_found(&state)
        }
    }
}

/// Delete a task and return to the list. On failure the user is sent back
/// to the detail page, which still exists in that case.
pub async fn delete_task<B: CrudBackend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<Uuid>() else {
        return Redirect::to("/").into_response();
    };

    match state.service.delete_task(id).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => {
            error!("Failed to delete task {}: {}", id, e);
            Redirect::to(&format!("/tasks/{id}")).into_response()
        }
    }
}

pub(crate) fn not_found<B: CrudBackend>(state: &AppState<B>) -> Response {
    state.render_with_status(StatusCode::NOT_FOUND, "not_found.html", context! {})
}
