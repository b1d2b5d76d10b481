use secrecy::Secret;
use warden_adapters::http::routes::{ErrorResponse, LoginResponse};
use warden_core::{Email, SecurityEventKind, UserStore};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_200_with_token_for_valid_credentials() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({
            "email": "admin@example.com",
            "password": "password123",
            "rememberMe": true
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(
        response
            .cookies()
            .any(|cookie| cookie.name() == "session_token" && cookie.http_only())
    );

    let body: LoginResponse = response.json().await.expect("Could not deserialize body");
    assert!(body.success);
    assert_eq!(body.message, "Login successful");
    assert!(!body.token.unwrap().is_empty());
}

#[tokio::test]
async fn should_give_remembered_session_cookie_a_max_age() {
    let app = TestApp::new().await;

    let remembered = app
        .post_login(&serde_json::json!({
            "email": "admin@example.com",
            "password": "password123",
            "rememberMe": true
        }))
        .await;
    let transient = app
        .post_login(&serde_json::json!({
            "email": "admin@example.com",
            "password": "password123",
            "rememberMe": false
        }))
        .await;

    let remembered = remembered
        .cookies()
        .find(|cookie| cookie.name() == "session_token")
        .expect("remembered login must set the session cookie");
    assert_eq!(
        remembered.max_age(),
        Some(std::time::Duration::from_secs(30 * 24 * 60 * 60))
    );

    let transient = transient
        .cookies()
        .find(|cookie| cookie.name() == "session_token")
        .expect("login must set the session cookie");
    assert_eq!(transient.max_age(), None);
    assert_eq!(transient.expires(), None);
}

#[tokio::test]
async fn should_update_last_login() {
    let app = TestApp::new().await;
    let admin = Email::parse(&Secret::new("admin@example.com".to_string())).unwrap();

    app.login_admin(false).await;

    let account = app.user_store.get_account(&admin).await.unwrap();
    assert!(account.last_login().is_some());
}

#[tokio::test]
async fn should_return_401_with_same_message_for_wrong_password_and_unknown_email() {
    let app = TestApp::new().await;

    let wrong_password = app
        .post_login(&serde_json::json!({
            "email": "admin@example.com",
            "password": "wrongpass"
        }))
        .await;
    let unknown_email = app
        .post_login(&serde_json::json!({
            "email": "notfound@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);

    let wrong_password: LoginResponse = wrong_password.json().await.unwrap();
    let unknown_email: LoginResponse = unknown_email.json().await.unwrap();
    assert!(!wrong_password.success);
    assert_eq!(wrong_password.message, "Invalid email or password");
    assert_eq!(wrong_password.message, unknown_email.message);
    assert!(wrong_password.token.is_none());
    assert!(unknown_email.token.is_none());
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        (
            serde_json::json!({ "email": "bad-email", "password": "password123" }),
            "Invalid email format",
        ),
        (
            serde_json::json!({ "email": "admin@example.com", "password": "abc" }),
            "Password must be at least 6 characters",
        ),
        (serde_json::json!({ "password": "password123" }), "Email is required"),
        (
            serde_json::json!({ "email": "admin@example.com" }),
            "Password is required",
        ),
    ];

    for (body, expected_message) in test_cases {
        let response = app.post_login(&body).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {body}");

        let body: LoginResponse = response.json().await.unwrap();
        assert!(!body.success);
        assert_eq!(body.message, expected_message);
        assert!(body.token.is_none());
    }
}

#[tokio::test]
async fn should_return_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/login", &app.address))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorResponse = response.json().await.unwrap();
    assert!(body.error.starts_with("Invalid input"));
}

#[tokio::test]
async fn should_return_403_for_disabled_account() {
    let app = TestApp::new().await;
    let demo = Email::parse(&Secret::new("demo@example.com".to_string())).unwrap();
    app.user_store.set_active(&demo, false).await.unwrap();

    let response = app
        .post_login(&serde_json::json!({
            "email": "demo@example.com",
            "password": "demo123"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 403);
    let body: LoginResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Account is disabled");
}

#[tokio::test]
async fn should_log_every_attempt() {
    let app = TestApp::new().await;

    app.post_login(&serde_json::json!({ "email": "bad-email", "password": "x" }))
        .await;
    app.post_login(&serde_json::json!({
        "email": "notfound@example.com",
        "password": "password123"
    }))
    .await;
    app.login_admin(false).await;

    let entries = app.security_log.entries().await;
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.kind == SecurityEventKind::Login));
    assert_eq!(entries[1].reason, "User not found");
    assert_eq!(entries[1].subject, "notfound@example.com");
    assert!(entries[2].is_success());
}
