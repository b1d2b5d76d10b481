use std::sync::Arc;

use serde::Serialize;
use tokio::net::TcpListener;
use warden_adapters::{
    HashMapSessionStore, HashMapUserStore, InMemorySecurityLog, ManualClock, Sha256PasswordHasher,
    config::test,
    http::routes::{LoginResponse, SessionResponse},
};
use warden_application::AuthService;
use warden_auth_service::{AuthServer, DEMO_ACCOUNTS, seed_accounts};
use warden_core::SessionPolicy;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub clock: ManualClock,
    pub user_store: HashMapUserStore,
    pub session_store: HashMapSessionStore,
    pub security_log: InMemorySecurityLog,
}

impl TestApp {
    pub async fn new() -> Self {
        let clock = ManualClock::default();
        let user_store = HashMapUserStore::new();
        seed_accounts(&user_store, &Sha256PasswordHasher, &clock, DEMO_ACCOUNTS)
            .await
            .expect("Failed to seed demo accounts");
        let session_store =
            HashMapSessionStore::new(SessionPolicy::default(), Arc::new(clock.clone()));
        let security_log = InMemorySecurityLog::new();

        let service = AuthService::new(
            user_store.clone(),
            session_store.clone(),
            Sha256PasswordHasher,
            security_log.clone(),
            Arc::new(clock.clone()),
        );

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(AuthServer::new(service).run_standalone(
            listener,
            None,
            std::future::pending(),
        ));

        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            http_client,
            clock,
            user_store,
            session_store,
            security_log,
        }
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_logout<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/logout", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_session(&self, token: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.get(format!("{}/session", &self.address));
        if let Some(token) = token {
            request = request.query(&[("token", token)]);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Logs in as the seeded admin and returns the session token.
    pub async fn login_admin(&self, remember_me: bool) -> String {
        let response = self
            .post_login(&serde_json::json!({
                "email": "admin@example.com",
                "password": "password123",
                "rememberMe": remember_me,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        let body: LoginResponse = response.json().await.expect("Could not deserialize body");
        body.token.expect("Successful login must return a token")
    }

    pub async fn session_state(&self, token: &str) -> SessionResponse {
        let response = self.get_session(Some(token)).await;
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.expect("Could not deserialize body")
    }
}
