//! Generic CRUD Collaborator Client
//!
//! All persistence in this workspace is delegated to an external generic
//! CRUD service addressed by collection name. This crate is the only place
//! that knows how to talk to it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ CrudBackend  │  ← five-operation contract (trait)
//! └──────┬───────┘
//!        │
//!   ┌────┴─────────────────┐
//!   │                      │
//! ┌─▼──────────────┐  ┌────▼──────────────┐
//! │ HttpCrudClient │  │ MemoryCrudBackend │
//! │ (reqwest)      │  │ (tests, local dev)│
//! └────────────────┘  └───────────────────┘
//! ```
//!
//! Records are raw JSON values; typed domain crates (de)serialize on top of
//! this boundary. The collaborator owns record shape, id uniqueness, and the
//! `_createdDate` / `_updatedDate` timestamps.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;

pub use backend::CrudBackend;
pub use config::CrudConfig;
pub use error::{CrudError, CrudResult};
pub use http::HttpCrudClient;
pub use memory::MemoryCrudBackend;
