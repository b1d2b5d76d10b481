pub mod login;
pub mod logout;
pub mod session_account;

pub use login::{CredentialMismatch, LoginError, LoginRequest, LoginSuccess, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use session_account::{SessionAccountError, SessionAccountUseCase};
