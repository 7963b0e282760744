use api::routes::routes;
use api::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use common::config::Config;
use db::test_utils::setup_test_db;

pub const TEST_ADMIN_EMAIL: &str = "ceerhod@cmrcet.ac.in";
pub const TEST_ADMIN_SECRET: &str = "bootstrap-secret";

/// Fresh router over an in-memory database, plus the state for seeding
/// test data directly.
pub async fn make_test_app() -> (Router, AppState) {
    init_test_env();

    let db = setup_test_db().await;
    let app_state = AppState::new(db);

    (routes(app_state.clone()), app_state)
}

/// Config is process-global, so every test initializes it with the same
/// values exactly once.
fn init_test_env() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        unsafe {
            std::env::set_var("DATABASE_PATH", "sqlite::memory:");
            std::env::set_var("EMAIL_DOMAIN", "@cmrcet.ac.in");
            std::env::set_var("ADMIN_EMAIL", TEST_ADMIN_EMAIL);
            std::env::set_var("ADMIN_BOOTSTRAP_SECRET", TEST_ADMIN_SECRET);
        }
        Config::init(".env.test");
    });
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
