//! # auth Routes Module
//!
//! Wires up the public account endpoints.
//!
//! ## Structure
//! - `post.rs`: POST handlers (register, login)
//!
//! No session token is issued on login; the caller keeps the returned
//! role client-side. Lookup and credential failures respond 400 rather
//! than 401/404, a convention preserved from the system this replaces.

pub mod post;

use crate::state::AppState;
use axum::{Router, routing::post};

use post::{login, register};

/// Builds the auth route group, mounted at the router root.
///
/// - `POST /register` → `register`
/// - `POST /login` → `login`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
