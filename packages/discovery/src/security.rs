//! Credential handling with secure memory.
//!
//! The search provider and the query generator both authenticate with API
//! keys. Keys are wrapped in [`SecretString`] (backed by the `secrecy`
//! crate) so they never leak through `Debug`, `Display`, or log output.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

const REDACTED: &str = "[REDACTED]";

/// A secret string that won't be logged or displayed.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Wrap a credential value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret for use in an outbound request.
    ///
    /// Call this only at the point the value goes on the wire.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_are_redacted() {
        let key = SecretString::new("tvly-abc123");
        assert_eq!(format!("{:?}", key), REDACTED);
        assert_eq!(format!("{}", key), REDACTED);
    }

    #[test]
    fn expose_returns_the_wrapped_value() {
        let key = SecretString::new("tvly-abc123");
        assert_eq!(key.expose(), "tvly-abc123");
    }

    #[test]
    fn clone_preserves_the_value() {
        let key = SecretString::new("csk-xyz");
        assert_eq!(key.clone().expose(), "csk-xyz");
    }
}
