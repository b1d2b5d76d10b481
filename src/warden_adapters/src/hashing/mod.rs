pub mod argon2_hasher;
pub mod sha256_hasher;

pub use argon2_hasher::Argon2PasswordHasher;
pub use sha256_hasher::Sha256PasswordHasher;

use warden_core::{Password, PasswordDigest, PasswordHasher, PasswordHasherError};

use crate::config::{HashingAlgorithm, HashingSettings};

/// The hasher selected in configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredHasher {
    Argon2(Argon2PasswordHasher),
    Sha256(Sha256PasswordHasher),
}

impl ConfiguredHasher {
    pub fn from_settings(settings: &HashingSettings) -> Result<Self, PasswordHasherError> {
        match settings.algorithm {
            HashingAlgorithm::Argon2 => {
                let argon2 = &settings.argon2;
                Argon2PasswordHasher::new(argon2.memory_kib, argon2.iterations, argon2.parallelism)
                    .map(Self::Argon2)
            }
            HashingAlgorithm::Sha256 => {
                tracing::warn!("Using unsalted SHA-256 password digests");
                Ok(Self::Sha256(Sha256PasswordHasher))
            }
        }
    }
}

#[async_trait::async_trait]
impl PasswordHasher for ConfiguredHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        match self {
            Self::Argon2(hasher) => hasher.hash(password).await,
            Self::Sha256(hasher) => hasher.hash(password).await,
        }
    }

    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError> {
        match self {
            Self::Argon2(hasher) => hasher.verify(password, digest).await,
            Self::Sha256(hasher) => hasher.verify(password, digest).await,
        }
    }
}
