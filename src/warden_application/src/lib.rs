pub mod auth_service;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use auth_service::AuthService;
pub use use_cases::{
    CredentialMismatch, LoginError, LoginRequest, LoginSuccess, LoginUseCase, LogoutError,
    LogoutUseCase, SessionAccountError, SessionAccountUseCase,
};
