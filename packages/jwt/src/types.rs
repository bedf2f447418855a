//! JWT type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{JwtError, JwtResult};

/// Algorithm identifier written into every header this crate signs
pub const HS256: &str = "HS256";

/// JWT claims: an ordered JSON object
///
/// Keys keep the order they were written in, so re-serialized claims look
/// like their source.
pub type Claims = Map<String, Value>;

/// JWT header structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl JwtHeader {
    /// Header for an HS256 signed JWT
    #[must_use]
    pub fn hs256() -> Self {
        Self {
            alg: HS256.to_string(),
            typ: Some("JWT".to_string()),
        }
    }
}

/// JWT token string wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtToken(pub String);

impl From<String> for JwtToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered time claims, in unix seconds
///
/// A value of `0` (or `null`) means the claim is not set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StandardClaims {
    #[serde(default)]
    pub iat: Option<i64>, // Issued at
    #[serde(default)]
    pub nbf: Option<i64>, // Not before
    #[serde(default)]
    pub exp: Option<i64>, // Expiration time
}

impl StandardClaims {
    /// Extract the time claims from a decoded claims value
    ///
    /// The value must be a JSON object whose `iat`, `nbf` and `exp`, when
    /// present, are integers within the representable date range.
    pub fn from_value(value: &Value) -> JwtResult<Self> {
        if !value.is_object() {
            return Err(JwtError::invalid_standard_claims("claims are not a JSON object"));
        }
        let claims = Self::deserialize(value)
            .map_err(|e| JwtError::invalid_standard_claims(&e.to_string()))?;

        for (name, secs) in [("iat", claims.iat), ("nbf", claims.nbf), ("exp", claims.exp)] {
            if let Some(secs) = secs {
                if DateTime::<Utc>::from_timestamp(secs, 0).is_none() {
                    return Err(JwtError::InvalidStandardClaims(format!(
                        "{name} is out of range: {secs}"
                    )));
                }
            }
        }
        Ok(claims)
    }

    /// Issued-at time, if set
    #[must_use]
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        to_time(self.iat)
    }

    /// Not-before time, if set
    #[must_use]
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        to_time(self.nbf)
    }

    /// Expiry time, if set
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        to_time(self.exp)
    }
}

fn to_time(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.filter(|&s| s != 0)
        .and_then(|s| DateTime::<Utc>::from_timestamp(s, 0))
}

/// Outcome of checking a token signature
///
/// Verification only happens when a secret is supplied, and a mismatch is
/// reported rather than raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// No secret was supplied
    NotAttempted,
    /// The signature matches the secret
    Verified,
    /// The signature does not match the secret
    Failed,
}

impl Verification {
    /// Whether a secret was checked at all
    #[must_use]
    pub fn attempted(self) -> bool {
        !matches!(self, Verification::NotAttempted)
    }
}
