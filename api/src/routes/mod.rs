//! HTTP route entry point.
//!
//! Routes are organized by domain, each in its own module:
//! - `/register`, `/login` → account registration and login (public)
//! - `/api/admin` → admin dashboard aggregation endpoints
//! - `/health` → liveness check
//!
//! The student, technician, and report dashboards are served by separate
//! collaborating services and are not mounted here.

use crate::routes::{admin::admin_routes, auth::auth_routes, health::health_routes};
use crate::state::AppState;
use axum::Router;

pub mod admin;
pub mod auth;
pub mod health;

/// Builds the complete application router.
///
/// Auth endpoints stay at the root (`/register`, `/login`) for
/// compatibility with the front-end this service replaces; admin
/// aggregation lives under `/api/admin`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(auth_routes())
        .nest("/api/admin", admin_routes())
        .with_state(app_state)
}
