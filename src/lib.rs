//! # Warden - Credential and Session Service Library
//!
//! Facade crate re-exporting the public APIs of the warden components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! warden = { path = "../warden" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `Session`, etc.
//! - **Ports**: `UserStore`, `SessionStore`, `PasswordHasher`, `SecurityLog`, `Clock`
//! - **Use cases**: `LoginUseCase`, `LogoutUseCase`, `SessionAccountUseCase`
//! - **Adapters**: `HashMapUserStore`, `HashMapSessionStore`, hashers, security logs, clocks
//! - **Service**: `AuthService` and its HTTP front `AuthServer`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use warden_core::*;
}

pub use warden_core::{
    Account, AuthOutcome, AuthStatus, Credentials, CredentialsError, Email, EmailError, Password,
    PasswordDigest, PasswordError, SecurityEvent, SecurityEventKind, SecurityEventOutcome,
    Session, SessionPolicy, SessionToken,
};

// ============================================================================
// Ports
// ============================================================================

/// Store, hasher, log and clock contracts
pub mod ports {
    pub use warden_core::{
        Clock, PasswordHasher, PasswordHasherError, SecurityLog, SessionStore, SessionStoreError,
        UserStore, UserStoreError,
    };
}

pub use ports::{
    Clock, PasswordHasher, PasswordHasherError, SecurityLog, SessionStore, SessionStoreError,
    UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::use_cases::*;
}

pub use warden_application::{
    AuthService, LoginError, LoginRequest, LoginUseCase, LogoutUseCase, SessionAccountUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use warden_adapters::http::*;
    }

    /// In-memory stores
    pub mod persistence {
        pub use warden_adapters::persistence::*;
    }

    /// Password hashers
    pub mod hashing {
        pub use warden_adapters::hashing::*;
    }

    /// Security event sinks
    pub mod logging {
        pub use warden_adapters::logging::*;
    }

    /// Clocks
    pub mod time {
        pub use warden_adapters::time::*;
    }

    /// Configuration
    pub mod config {
        pub use warden_adapters::config::*;
    }
}

pub use warden_adapters::{
    Argon2PasswordHasher, ConfiguredHasher, HashMapSessionStore, HashMapUserStore,
    InMemorySecurityLog, ManualClock, Sha256PasswordHasher, SystemClock, TracingSecurityLog,
};

// ============================================================================
// Auth Server (HTTP Entry Point)
// ============================================================================

pub use warden_auth_service::{
    AuthServer, DEMO_ACCOUNTS, DemoAccount, SeedError, seed_accounts, shutdown_signal,
    spawn_session_sweeper,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
