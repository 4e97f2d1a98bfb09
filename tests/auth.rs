//! Integration tests for the user/auth endpoints.
//!
//! These tests need a live PostgreSQL database with `schema.sql` applied and
//! `DATABASE_URL` set, so they are `#[ignore]`d by default. Run them with
//! `cargo test -- --ignored`.

use actix_web::{http::StatusCode, test, web, App};
use dotenv::dotenv;
use serde_json::json;
use sqlx::PgPool;
use taskdeck::auth::AuthResponse;
use taskdeck::config::Config;
use taskdeck::routes;

fn test_config() -> Config {
    Config {
        database_url: String::new(),
        jwt_secret: "integration_test_secret".to_string(),
        server_port: 3000,
        server_host: "127.0.0.1".to_string(),
        allowed_origin: "http://localhost:5173".to_string(),
    }
}

async fn test_pool() -> PgPool {
    dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test DB")
}

async fn cleanup_user(pool: &PgPool, email: &str) {
    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await;
}

macro_rules! test_app {
    ($pool:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new($config.clone()))
                .configure(routes::config),
        )
        .await
    };
}

#[ignore]
#[actix_rt::test]
async fn test_signup_login_profile_flow() {
    let pool = test_pool().await;
    let config = test_config();
    let email = "flow@example.com";
    cleanup_user(&pool, email).await;

    let app = test_app!(pool, config);

    // Signup
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({ "name": "Flow User", "email": email, "password": "p4ssword" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], email);
    assert!(
        body["user"].get("password").is_none(),
        "signup response must not carry a password field"
    );
    let token = body["token"].as_str().expect("token should be a string");
    assert!(!token.is_empty(), "token should be a non-empty string");

    // Duplicate signup fails regardless of the other fields
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({ "name": "Someone Else", "email": email, "password": "different" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Login
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": "p4ssword" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let login: AuthResponse = test::read_body_json(resp).await;
    assert!(!login.token.is_empty());

    // Profile with the login token
    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(("Authorization", format!("Bearer {}", login.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], email);
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());

    cleanup_user(&pool, email).await;
}

#[ignore]
#[actix_rt::test]
async fn test_login_does_not_reveal_which_part_was_wrong() {
    let pool = test_pool().await;
    let config = test_config();
    let email = "secrecy@example.com";
    cleanup_user(&pool, email).await;

    let app = test_app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({ "name": "Secrecy", "email": email, "password": "correct-horse" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Wrong password
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": "battery-staple" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let wrong_password: serde_json::Value = test::read_body_json(resp).await;

    // Unknown email
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "battery-staple" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let unknown_email: serde_json::Value = test::read_body_json(resp).await;

    assert_eq!(
        wrong_password["error"], unknown_email["error"],
        "both failure modes must produce the identical error"
    );

    cleanup_user(&pool, email).await;
}

#[ignore]
#[actix_rt::test]
async fn test_profile_requires_token() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let req = test::TestRequest::get().uri("/profile").to_request();
    let resp = test::try_call_service(&app, req).await;
    let err = resp.expect_err("request without token should be rejected");
    assert_eq!(
        err.as_response_error().error_response().status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(("Authorization", "Bearer bogus"))
        .to_request();
    let resp = test::try_call_service(&app, req).await;
    let err = resp.expect_err("request with a bad token should be rejected");
    assert_eq!(
        err.as_response_error().error_response().status(),
        StatusCode::FORBIDDEN
    );
}

#[ignore]
#[actix_rt::test]
async fn test_update_profile_rejects_empty_and_no_change_updates() {
    let pool = test_pool().await;
    let config = test_config();
    let email = "updates@example.com";
    cleanup_user(&pool, email).await;

    let app = test_app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({ "name": "Original Name", "email": email, "password": "p4ssword" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let signup: AuthResponse = test::read_body_json(resp).await;
    let auth = ("Authorization", format!("Bearer {}", signup.token));

    // Nothing supplied
    let req = test::TestRequest::patch()
        .uri("/profile")
        .insert_header(auth.clone())
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Empty strings count as absent
    let req = test::TestRequest::patch()
        .uri("/profile")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Same name, no password: zero fields would change
    let req = test::TestRequest::patch()
        .uri("/profile")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Original Name" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // A real change succeeds and returns the updated user without a password
    let req = test::TestRequest::patch()
        .uri("/profile")
        .insert_header(auth)
        .set_json(json!({ "name": "Renamed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Profile updated successfully.");
    assert_eq!(body["user"]["name"], "Renamed");
    assert!(body["user"].get("password").is_none());

    cleanup_user(&pool, email).await;
}
