pub mod config;
pub mod hashing;
pub mod http;
pub mod logging;
pub mod persistence;
pub mod time;

pub use hashing::{Argon2PasswordHasher, ConfiguredHasher, Sha256PasswordHasher};
pub use logging::{InMemorySecurityLog, TracingSecurityLog};
pub use persistence::{HashMapSessionStore, HashMapUserStore};
pub use time::{ManualClock, SystemClock};
