use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::config::Config;
use db::models::user::{Model as UserModel, Role};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub role: Role,
}

/// POST /register
///
/// Register a new account. The email must end with the institutional
/// domain, and the admin role is only accepted for the configured admin
/// address. Checks run in a fixed order so the responses below are stable.
///
/// ### Request Body
/// ```json
/// {
///   "email": "u12345678@cmrcet.ac.in",
///   "password": "strongpassword",
///   "role": "student"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Registration successful"
/// }
/// ```
///
/// - `400 Bad Request` (admin gate, wrong domain, weak password, or duplicate)
/// ```json
/// {
///   "success": false,
///   "message": "User already exists"
/// }
/// ```
///
/// - `500 Internal Server Error`
/// ```json
/// {
///   "success": false,
///   "message": "Server error"
/// }
/// ```
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    let db = app_state.db();
    let config = Config::get();

    // The only gate preventing arbitrary admin self-registration.
    if req.role == Role::Admin && req.email != config.admin_email {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error(format!(
                "Admin role can only be assigned to {}",
                config.admin_email
            ))),
        );
    }

    if !req.email.ends_with(&config.email_domain) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error(format!(
                "Only {} emails allowed",
                config.email_domain
            ))),
        );
    }

    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error(common::format_validation_errors(
                &validation_errors,
            ))),
        );
    }

    match UserModel::find_by_email(db, &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error("User already exists")),
            );
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, email = %req.email, "Failed to check for existing user");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Server error")),
            );
        }
    }

    match UserModel::create(db, &req.email, &req.password, req.role).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Registration successful")),
        ),
        Err(e) => {
            tracing::error!(error = %e, email = %req.email, "Failed to create user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Server error")),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub role: Role,
}

/// POST /login
///
/// Authenticate an existing account. No token or cookie is issued; the
/// caller persists the returned role client-side.
///
/// A login matching the configured admin address and bootstrap secret
/// skips hash verification and lazily creates the admin account if it
/// does not exist yet, so the first admin login always succeeds.
///
/// ### Request Body
/// ```json
/// {
///   "email": "u12345678@cmrcet.ac.in",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "role": "student" },
///   "message": "Login successful"
/// }
/// ```
///
/// - `400 Bad Request`: "User not found" or "Incorrect password"
/// - `500 Internal Server Error`: generic "Server error"
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let db = app_state.db();
    let config = Config::get();

    if req.email == config.admin_email && req.password == config.admin_bootstrap_secret {
        let existing = match UserModel::find_by_email(db, &config.admin_email).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error = %e, "Failed to look up admin account");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<LoginResponse>::error("Server error")),
                );
            }
        };

        if existing.is_none() {
            if let Err(e) =
                UserModel::create(db, &config.admin_email, &req.password, Role::Admin).await
            {
                tracing::error!(error = %e, "Failed to bootstrap admin account");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<LoginResponse>::error("Server error")),
                );
            }
            tracing::info!(email = %config.admin_email, "Bootstrapped admin account");
        }

        return (
            StatusCode::OK,
            Json(ApiResponse::success(
                LoginResponse { role: Role::Admin },
                "Login successful",
            )),
        );
    }

    let user = match UserModel::find_by_email(db, &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<LoginResponse>::error("User not found")),
            );
        }
        Err(e) => {
            tracing::error!(error = %e, email = %req.email, "Failed to look up user");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<LoginResponse>::error("Server error")),
            );
        }
    };

    if !user.verify_password(&req.password) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<LoginResponse>::error("Incorrect password")),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            LoginResponse { role: user.role },
            "Login successful",
        )),
    )
}
