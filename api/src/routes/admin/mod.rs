//! # admin Routes Module
//!
//! Read-only aggregation endpoints behind `/api/admin`, consumed by the
//! admin dashboard.
//!
//! ## Structure
//! - `get.rs`: GET handlers (report statistics, technician overview)

pub mod get;

use crate::state::AppState;
use axum::{Router, routing::get};

use get::{get_reports, get_technicians};

/// Builds the `/api/admin` route group.
///
/// - `GET /api/admin/reports` → `get_reports`
/// - `GET /api/admin/technicians` → `get_technicians`
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(get_reports))
        .route("/technicians", get(get_technicians))
}
