//! Page routes.
//!
//! Every route renders HTML or redirects; there is no JSON surface besides
//! the health endpoint merged in `main`. Unknown paths redirect to the list
//! page instead of serving an error.

use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{middleware, Router};
use axum_helpers::member_context;
use crud_client::CrudBackend;

use crate::state::AppState;

mod detail;
mod form;
mod home;

pub fn router<B: CrudBackend + 'static>(state: AppState<B>) -> Router {
    Router::new()
        .route("/", get(home::home_page::<B>))
        .route(
            "/tasks/new",
            get(form::new_task_page::<B>).post(form::create_task::<B>),
        )
        .route("/tasks/{id}", get(detail::task_page::<B>))
        .route(
            "/tasks/{id}/edit",
            get(form::edit_task_page::<B>).post(form::update_task::<B>),
        )
        .route("/tasks/{id}/delete", post(detail::delete_task::<B>))
        .fallback(redirect_to_home)
        .layer(middleware::from_fn(member_context))
        .with_state(state)
}

async fn redirect_to_home() -> Redirect {
    Redirect::to("/")
}
