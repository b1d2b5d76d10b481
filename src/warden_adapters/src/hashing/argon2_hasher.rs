use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use secrecy::ExposeSecret;
use warden_core::{Password, PasswordDigest, PasswordHasher, PasswordHasherError};

/// Salted Argon2id, stored as a PHC string. The work runs on the blocking
/// thread pool.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub const DEFAULT_MEMORY_KIB: u32 = 15000;
    pub const DEFAULT_ITERATIONS: u32 = 2;
    pub const DEFAULT_PARALLELISM: u32 = 1;

    pub fn new(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordHasherError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(params: Params) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params.clone();
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                Self::argon2(params)
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| PasswordDigest::new(hash.to_string()))
                    .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params.clone();
        let password = password.clone();
        let digest = digest.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let expected = PasswordHash::new(digest.as_ref().expose_secret())
                    .map_err(|e| PasswordHasherError::MalformedDigest(e.to_string()))?;

                match Self::argon2(params)
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::HashingFailed(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
    }
}
