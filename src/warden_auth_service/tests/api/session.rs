use chrono::Duration;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_account_for_valid_session() {
    let app = TestApp::new().await;
    let token = app.login_admin(false).await;

    let state = app.session_state(&token).await;

    assert!(state.valid);
    let account = state.account.unwrap();
    assert_eq!(account.email, "admin@example.com");
    assert_eq!(account.display_name, "Admin User");
    assert!(account.active);
    assert!(account.last_login.is_some());
}

#[tokio::test]
async fn should_not_expose_password_digest() {
    let app = TestApp::new().await;
    let token = app.login_admin(false).await;

    let body = app.get_session(Some(&token)).await.text().await.unwrap();

    assert!(!body.contains("ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f"));
    assert!(!body.to_lowercase().contains("digest"));
}

#[tokio::test]
async fn should_report_unknown_token_as_invalid() {
    let app = TestApp::new().await;

    let state = app.session_state("not-a-session").await;

    assert!(!state.valid);
    assert!(state.account.is_none());
}

#[tokio::test]
async fn should_return_400_without_token() {
    let app = TestApp::new().await;

    let response = app.get_session(None).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_use_session_cookie_when_no_token_given() {
    let app = TestApp::new().await;
    app.login_admin(false).await;

    let response = app.get_session(None).await;

    assert_eq!(response.status().as_u16(), 200);
    let state: warden_adapters::http::routes::SessionResponse = response.json().await.unwrap();
    assert!(state.valid);
}

#[tokio::test]
async fn should_expire_idle_session_after_thirty_minutes() {
    let app = TestApp::new().await;
    let token = app.login_admin(false).await;

    app.clock.advance(Duration::minutes(25));
    assert!(app.session_state(&token).await.valid);
    app.clock.advance(Duration::minutes(25));
    assert!(app.session_state(&token).await.valid);

    app.clock.advance(Duration::minutes(31));
    assert!(!app.session_state(&token).await.valid);
    assert!(app.session_store.is_empty());
}

#[tokio::test]
async fn should_keep_remembered_session_for_thirty_days() {
    let app = TestApp::new().await;
    let token = app.login_admin(true).await;

    app.clock.advance(Duration::days(29));
    assert!(app.session_state(&token).await.valid);

    app.clock.advance(Duration::days(1) + Duration::seconds(1));
    assert!(!app.session_state(&token).await.valid);
}
