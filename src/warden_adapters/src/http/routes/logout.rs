use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use serde::{Deserialize, Serialize};
use warden_application::AuthService;
use warden_core::{PasswordHasher, SecurityLog, SessionStore, UserStore};

use super::{error::AuthApiError, resolve_token};
use crate::config::SESSION_COOKIE_NAME;

#[derive(Debug, Default, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, S, H, L>(
    State(service): State<Arc<AuthService<U, S, H, L>>>,
    jar: CookieJar,
    body: Result<Json<LogoutRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + 'static,
    S: SessionStore + 'static,
    H: PasswordHasher + 'static,
    L: SecurityLog + 'static,
{
    let Json(body) = body?;
    let token = resolve_token(body.token, &jar).ok_or(AuthApiError::MissingToken)?;

    let success = service.try_logout(&token).await?;

    // A token named in the body may belong to another session; keep the cookie then.
    let cookie_was_revoked = jar
        .get(SESSION_COOKIE_NAME)
        .is_some_and(|cookie| cookie.value().trim() == token.as_str());
    let jar = if cookie_was_revoked {
        jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"))
    } else {
        jar
    };

    Ok((StatusCode::OK, jar, Json(LogoutResponse { success })))
}
