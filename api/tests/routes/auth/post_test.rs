use axum::http::StatusCode;
use db::models::user::{Model as UserModel, Role};
use serde_json::{Value, json};
use serial_test::serial;
use tower::ServiceExt;

use crate::helpers::app::{TEST_ADMIN_EMAIL, TEST_ADMIN_SECRET};
use crate::helpers::{json_post, make_test_app};

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
#[serial]
async fn register_rejects_non_institutional_email() {
    let (app, _app_state) = make_test_app().await;

    for role in ["student", "technician"] {
        let req = json_post(
            "/register",
            json!({
                "email": "outsider@gmail.com",
                "password": "strongpassword",
                "role": role,
            }),
        );

        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Only @cmrcet.ac.in emails allowed");
    }
}

#[tokio::test]
#[serial]
async fn register_rejects_admin_role_for_other_addresses() {
    let (app, _app_state) = make_test_app().await;

    let req = json_post(
        "/register",
        json!({
            "email": "impostor@cmrcet.ac.in",
            "password": "strongpassword",
            "role": "admin",
        }),
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        format!("Admin role can only be assigned to {}", TEST_ADMIN_EMAIL)
    );
}

#[tokio::test]
#[serial]
async fn register_accepts_admin_role_for_admin_address() {
    let (app, app_state) = make_test_app().await;

    let req = json_post(
        "/register",
        json!({
            "email": TEST_ADMIN_EMAIL,
            "password": "strongpassword",
            "role": "admin",
        }),
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Registration successful");

    let admin = UserModel::find_by_email(app_state.db(), TEST_ADMIN_EMAIL)
        .await
        .unwrap()
        .expect("admin should be persisted");
    assert_eq!(admin.role, Role::Admin);
}

#[tokio::test]
#[serial]
async fn register_rejects_short_password() {
    let (app, _app_state) = make_test_app().await;

    let req = json_post(
        "/register",
        json!({
            "email": "student@cmrcet.ac.in",
            "password": "short",
            "role": "student",
        }),
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Password must be at least 8 characters");
}

#[tokio::test]
#[serial]
async fn register_rejects_duplicate_email() {
    let (app, _app_state) = make_test_app().await;

    let payload = json!({
        "email": "student@cmrcet.ac.in",
        "password": "strongpassword",
        "role": "student",
    });

    let first = app
        .clone()
        .oneshot(json_post("/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(json_post("/register", payload)).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let json = body_json(second).await;
    assert_eq!(json["message"], "User already exists");
}

#[tokio::test]
#[serial]
async fn bootstrap_login_creates_admin_and_is_idempotent() {
    let (app, app_state) = make_test_app().await;

    // No admin account exists yet; the first bootstrap login creates it.
    for _ in 0..2 {
        let req = json_post(
            "/login",
            json!({
                "email": TEST_ADMIN_EMAIL,
                "password": TEST_ADMIN_SECRET,
            }),
        );

        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Login successful");
        assert_eq!(json["data"]["role"], "admin");
    }

    let admin = UserModel::find_by_email(app_state.db(), TEST_ADMIN_EMAIL)
        .await
        .unwrap()
        .expect("bootstrap should persist the admin account");
    assert_eq!(admin.role, Role::Admin);
    assert!(admin.verify_password(TEST_ADMIN_SECRET));
}

#[tokio::test]
#[serial]
async fn login_returns_stored_role() {
    let (app, app_state) = make_test_app().await;

    UserModel::create(
        app_state.db(),
        "tech@cmrcet.ac.in",
        "strongpassword",
        Role::Technician,
    )
    .await
    .unwrap();

    let req = json_post(
        "/login",
        json!({
            "email": "tech@cmrcet.ac.in",
            "password": "strongpassword",
        }),
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "technician");
}

#[tokio::test]
#[serial]
async fn login_rejects_wrong_password() {
    let (app, app_state) = make_test_app().await;

    UserModel::create(
        app_state.db(),
        "student@cmrcet.ac.in",
        "strongpassword",
        Role::Student,
    )
    .await
    .unwrap();

    let req = json_post(
        "/login",
        json!({
            "email": "student@cmrcet.ac.in",
            "password": "wrongpassword",
        }),
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Incorrect password");
}

#[tokio::test]
#[serial]
async fn login_rejects_unknown_email() {
    let (app, _app_state) = make_test_app().await;

    let req = json_post(
        "/login",
        json!({
            "email": "nobody@cmrcet.ac.in",
            "password": "strongpassword",
        }),
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "User not found");
}
