use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use warden_application::{AuthService, LoginRequest};
use warden_core::{AuthOutcome, AuthStatus, PasswordHasher, SecurityLog, SessionStore, UserStore};

use super::error::AuthApiError;
use crate::config::SESSION_COOKIE_NAME;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<&AuthOutcome> for LoginResponse {
    fn from(outcome: &AuthOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            message: outcome.message().to_string(),
            token: outcome.token().map(|token| token.as_str().to_string()),
        }
    }
}

fn status_code(status: AuthStatus) -> StatusCode {
    match status {
        AuthStatus::Success => StatusCode::OK,
        AuthStatus::InputInvalid => StatusCode::BAD_REQUEST,
        AuthStatus::AuthenticationFailed => StatusCode::UNAUTHORIZED,
        AuthStatus::AccountDisabled => StatusCode::FORBIDDEN,
        AuthStatus::InternalFault => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn cookie_max_age(lifetime: chrono::Duration) -> time::Duration {
    time::Duration::seconds(lifetime.num_seconds())
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, S, H, L>(
    State(service): State<Arc<AuthService<U, S, H, L>>>,
    jar: CookieJar,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + 'static,
    S: SessionStore + 'static,
    H: PasswordHasher + 'static,
    L: SecurityLog + 'static,
{
    let Json(body) = body?;
    let remember_me = body.remember_me;

    let outcome = service
        .authenticate(LoginRequest {
            email: body.email,
            password: body.password,
            remember_me: body.remember_me,
        })
        .await;

    let jar = match outcome.token() {
        Some(token) => {
            let cookie = Cookie::build((SESSION_COOKIE_NAME, token.as_str().to_owned()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);
            // Without a lifetime the cookie ends with the browser session.
            let cookie = if remember_me {
                cookie.max_age(cookie_max_age(service.session_policy().persistent_lifetime))
            } else {
                cookie
            };
            jar.add(cookie.build())
        }
        None => jar,
    };

    Ok((
        status_code(outcome.status()),
        jar,
        Json(LoginResponse::from(&outcome)),
    ))
}
