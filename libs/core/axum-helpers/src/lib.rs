//! # Axum Helpers
//!
//! Shared plumbing for the Axum applications in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`session`]**: member-session context supplied to every request
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let app = create_router(pages).merge(health_router(app_info!()));
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod http;
pub mod server;
pub mod session;

pub use http::security_headers;
pub use server::{
    create_app, create_production_app, create_router, health_router, HealthResponse,
    ShutdownCoordinator,
};
pub use session::{member_context, MemberSession};
