//! Task list page.

use axum::extract::{Query, State};
use axum::response::Response;
use crud_client::CrudBackend;
use domain_tasks::{StatusFilter, TaskCounts};
use minijinja::context;
use serde::Deserialize;
use tracing::error;

use crate::state::AppState;
use crate::views::TaskView;

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    status: Option<String>,
}

/// Render the list page. A collaborator failure is logged and the page is
/// served with an empty task set rather than an error page.
pub async fn home_page<B: CrudBackend>(
    State(state): State<AppState<B>>,
    Query(query): Query<HomeQuery>,
) -> Response {
    let all_tasks = match state.service.list_tasks().await {
        Ok(tasks) => tasks,
        Err(e) => {
            error!("Failed to load tasks: {}", e);
            Vec::new()
        }
    };

    // Counts always reflect the full set; the filter only narrows the cards.
    let filter = StatusFilter::parse(query.status.as_deref());
    let counts = TaskCounts::tally(&all_tasks);
    let cards: Vec<TaskView> = filter
        .apply(&all_tasks)
        .iter()
        .map(TaskView::from)
        .collect();

    state.render(
        "home.html",
        context! {
            filter => filter.label(),
            counts => counts,
            tasks => cards,
        },
    )
}
