use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE, request},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use warden_adapters::{
    config::AllowedOrigins,
    http::routes::{login, logout, session},
};
use warden_application::AuthService;
use warden_core::{PasswordHasher, SecurityLog, SessionStore, UserStore};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front of an [`AuthService`]: `POST /login`, `POST /logout` and
/// `GET /session`.
pub struct AuthServer {
    router: Router,
}

impl AuthServer {
    /// Create a new AuthServer around the given service.
    ///
    /// The service is shared by all routes behind an `Arc`; its stores
    /// synchronize internally.
    pub fn new<U, S, H, L>(service: AuthService<U, S, H, L>) -> Self
    where
        U: UserStore + 'static,
        S: SessionStore + 'static,
        H: PasswordHasher + 'static,
        L: SecurityLog + 'static,
    {
        let router = Router::new()
            .route("/login", post(login::<U, S, H, L>))
            .route("/logout", post(logout::<U, S, H, L>))
            .route("/session", get(session::<U, S, H, L>))
            .with_state(Arc::new(service));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthServer into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth server until `shutdown` resolves
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    /// * `shutdown` - Future that triggers a graceful shutdown
    pub async fn run_standalone<F>(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
        shutdown: F,
    ) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth server listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
