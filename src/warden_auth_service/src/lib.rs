mod auth_server;
mod helpers;
mod tracing;

pub use auth_server::{AuthServer, shutdown_signal};
pub use helpers::{DEMO_ACCOUNTS, DemoAccount, SeedError, seed_accounts, spawn_session_sweeper};
