pub mod error;
pub mod login;
pub mod logout;
pub mod session;

pub use error::{AuthApiError, ErrorResponse};
pub use login::{LoginRequestBody, LoginResponse, login};
pub use logout::{LogoutRequest, LogoutResponse, logout};
pub use session::{AccountView, SessionQuery, SessionResponse, session};

use axum_extra::extract::CookieJar;
use warden_core::SessionToken;

use crate::config::SESSION_COOKIE_NAME;

/// Picks the token given explicitly in the request, falling back to the
/// session cookie.
fn resolve_token(explicit: Option<String>, jar: &CookieJar) -> Option<SessionToken> {
    explicit
        .filter(|token| !token.trim().is_empty())
        .or_else(|| {
            jar.get(SESSION_COOKIE_NAME)
                .map(|cookie| cookie.value().to_owned())
        })
        .filter(|token| !token.trim().is_empty())
        .map(|token| SessionToken::from(token.trim()))
}
