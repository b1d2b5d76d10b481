pub mod account;
pub mod auth_outcome;
pub mod credentials;
pub mod email;
pub mod password;
pub mod security_event;
pub mod session;
pub mod session_token;
