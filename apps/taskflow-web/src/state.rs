//! Application state management.
//!
//! The shared state passed to all request handlers: the task service (over
//! whichever collaborator backend the binary wired up) and the compiled
//! template environment.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use crud_client::CrudBackend;
use domain_tasks::TaskService;
use minijinja::Environment;
use serde::Serialize;
use tracing::error;

/// Shared application state.
///
/// Cloned for each handler (inexpensive Arc clones).
pub struct AppState<B: CrudBackend> {
    /// Task service over the CRUD collaborator
    pub service: TaskService<B>,
    /// Compiled page templates
    templates: Arc<Environment<'static>>,
}

impl<B: CrudBackend> AppState<B> {
    pub fn new(service: TaskService<B>) -> Self {
        Self {
            service,
            templates: Arc::new(crate::templates::build()),
        }
    }

    /// Render a page template to a 200 response.
    pub fn render<C: Serialize>(&self, name: &str, ctx: C) -> Response {
        self.render_with_status(StatusCode::OK, name, ctx)
    }

    /// Render a page template with an explicit status code. A template
    /// failure is a bug, not user error: it is logged and surfaced as a
    /// bare 500.
    pub fn render_with_status<C: Serialize>(
        &self,
        status: StatusCode,
        name: &str,
        ctx: C,
    ) -> Response {
        let rendered = self
            .templates
            .get_template(name)
            .and_then(|t| t.render(ctx));

        match rendered {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                error!("Failed to render template {}: {}", name, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong rendering this page.",
                )
                    .into_response()
            }
        }
    }
}

impl<B: CrudBackend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            templates: Arc::clone(&self.templates),
        }
    }
}
