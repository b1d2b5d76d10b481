use std::fmt;

use rand::RngCore;

const TOKEN_BYTES: usize = 32;
const DEBUG_PREFIX_LEN: usize = 8;

/// Opaque bearer token identifying a session.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Draws a fresh token from the thread-local CSPRNG, hex encoded.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Only a prefix is printed so tokens don't end up whole in logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(DEBUG_PREFIX_LEN).collect();
        write!(f, "SessionToken({prefix}...)")
    }
}
