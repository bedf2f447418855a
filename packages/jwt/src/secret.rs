//! Secret sources for signing and verification
//!
//! A secret either comes straight from the command line or from a fallback
//! provider, which in the `jwt` binary is a masked terminal prompt.

use std::fmt;

use jwtool_common::LoggingTransformer;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{JwtError, JwtResult};

/// Symmetric key material, wiped from memory on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Wrap raw key bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Borrow the key bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether the secret holds no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

/// Something that can hand over a secret on demand
pub trait SecretProvider {
    /// Produce the secret, possibly blocking on user input
    fn secret(&self) -> JwtResult<Secret>;

    /// Short description of where the secret comes from, for logs
    fn source(&self) -> &'static str;
}

/// A secret known up front, e.g. from `--secret`
#[derive(Debug, Clone)]
pub struct StaticSecret(Secret);

impl StaticSecret {
    /// Provider that always returns `secret`
    pub fn new(secret: impl Into<Secret>) -> Self {
        Self(secret.into())
    }
}

impl SecretProvider for StaticSecret {
    fn secret(&self) -> JwtResult<Secret> {
        Ok(self.0.clone())
    }

    fn source(&self) -> &'static str {
        "static value"
    }
}

/// Pick the signing secret: the flag value when non-empty, else `fallback`
///
/// An empty result is a [`JwtError::MissingSecret`].
pub fn resolve_secret(flag: Option<&str>, fallback: &dyn SecretProvider) -> JwtResult<Secret> {
    let (secret, source) = match flag.filter(|s| !s.is_empty()) {
        Some(value) => (Secret::from(value), "--secret"),
        None => (fallback.secret()?, fallback.source()),
    };
    if secret.is_empty() {
        return Err(JwtError::MissingSecret);
    }
    LoggingTransformer::log_secret_source(source, secret.as_bytes());
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingProvider {
        value: &'static str,
        calls: Cell<usize>,
    }

    impl SecretProvider for CountingProvider {
        fn secret(&self) -> JwtResult<Secret> {
            self.calls.set(self.calls.get() + 1);
            Ok(Secret::from(self.value))
        }

        fn source(&self) -> &'static str {
            "test"
        }
    }

    #[test]
    fn flag_wins_without_touching_fallback() {
        let fallback = CountingProvider { value: "prompted", calls: Cell::new(0) };
        let secret = resolve_secret(Some("flag"), &fallback);
        assert_eq!(secret.ok(), Some(Secret::from("flag")));
        assert_eq!(fallback.calls.get(), 0);
    }

    #[test]
    fn empty_flag_uses_fallback() {
        let fallback = CountingProvider { value: "prompted", calls: Cell::new(0) };
        assert_eq!(resolve_secret(Some(""), &fallback).ok(), Some(Secret::from("prompted")));
        assert_eq!(resolve_secret(None, &fallback).ok(), Some(Secret::from("prompted")));
        assert_eq!(fallback.calls.get(), 2);
    }

    #[test]
    fn empty_fallback_is_missing_secret() {
        let fallback = StaticSecret::new("");
        assert!(matches!(resolve_secret(None, &fallback), Err(JwtError::MissingSecret)));
    }

    #[test]
    fn debug_is_redacted() {
        assert_eq!(format!("{:?}", Secret::from("hunter2")), "Secret(<redacted>)");
    }
}
