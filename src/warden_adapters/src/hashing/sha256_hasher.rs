use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use warden_core::{Password, PasswordDigest, PasswordHasher, PasswordHasherError};

/// Unsalted SHA-256, hex encoded.
///
/// Only for verifying digests carried over from systems that stored plain
/// SHA-256. Identical passwords produce identical digests, so a leaked table
/// is open to precomputed lookups; prefer [`super::Argon2PasswordHasher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    pub fn digest_hex(plaintext: &str) -> String {
        hex::encode(Sha256::digest(plaintext.as_bytes()))
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Sha256PasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        Ok(PasswordDigest::new(Self::digest_hex(
            password.as_ref().expose_secret(),
        )))
    }

    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError> {
        let candidate = Self::digest_hex(password.as_ref().expose_secret());
        Ok(constant_time_eq(
            candidate.as_bytes(),
            digest.as_ref().expose_secret().as_bytes(),
        ))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
