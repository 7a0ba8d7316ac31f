//! Tasks Domain
//!
//! Domain layer for task records managed by the external CRUD collaborator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← title invariant, due-date conversion, id assignment
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ CrudBackend │  ← external collaborator (crud_client)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← wire shape, drafts, filters, counts
//! └─────────────┘
//! ```
//!
//! Status and priority are free-form strings compared case-insensitively;
//! the collaborator owns every other invariant (id uniqueness, timestamps).

pub mod error;
pub mod filter;
pub mod models;
pub mod service;

pub use error::{TaskError, TaskResult};
pub use filter::{StatusFilter, TaskCounts};
pub use models::{Task, TaskDraft};
pub use service::{TaskService, TASKS_COLLECTION};
