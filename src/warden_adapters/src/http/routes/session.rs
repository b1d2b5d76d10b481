use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use warden_application::AuthService;
use warden_core::{Account, PasswordHasher, SecurityLog, SessionStore, UserStore};

use super::{error::AuthApiError, resolve_token};

#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub token: Option<String>,
}

/// Account details safe to hand to a client. Carries no password digest.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub email: String,
    pub display_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            email: account.email().to_string(),
            display_name: account.display_name().to_string(),
            active: account.is_active(),
            created_at: account.created_at(),
            last_login: account.last_login(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountView>,
}

#[tracing::instrument(name = "Session", skip_all)]
pub async fn session<U, S, H, L>(
    State(service): State<Arc<AuthService<U, S, H, L>>>,
    jar: CookieJar,
    Query(query): Query<SessionQuery>,
) -> Result<Json<SessionResponse>, AuthApiError>
where
    U: UserStore + 'static,
    S: SessionStore + 'static,
    H: PasswordHasher + 'static,
    L: SecurityLog + 'static,
{
    let token = resolve_token(query.token, &jar).ok_or(AuthApiError::MissingToken)?;

    let account = service.try_account_for_session(&token).await?;

    Ok(Json(SessionResponse {
        valid: account.is_some(),
        account: account.as_ref().map(AccountView::from),
    }))
}
