//! Token encoding: claims text in, signed compact token out

use chrono::{DateTime, TimeDelta, Utc};
use jwtool_common::LoggingTransformer;
use log::debug;
use serde_json::Value;

use crate::{
    crypto::hmac_sha256::sign_hs256,
    error::{JwtError, JwtResult},
    types::{Claims, JwtHeader, JwtToken},
    utils::base64_url_encode,
};

/// HS256 token encoder
///
/// ```
/// use jwtool_jwt::Encoder;
///
/// let token = Encoder::new(b"secret").encode(r#"{"sub":"alice"}"#).unwrap();
/// assert_eq!(token.as_ref().split('.').count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Encoder<'a> {
    secret: &'a [u8],
    lifetime: TimeDelta,
}

impl<'a> Encoder<'a> {
    /// Encoder signing with `secret` and no lifetime
    #[must_use]
    pub fn new(secret: &'a [u8]) -> Self {
        Self {
            secret,
            lifetime: TimeDelta::zero(),
        }
    }

    /// Set the token lifetime; a non-zero lifetime overwrites `exp`
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: TimeDelta) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Parse `claims_text` as a JSON object and sign it, relative to the current time
    pub fn encode(&self, claims_text: &str) -> JwtResult<JwtToken> {
        self.encode_at(claims_text, Utc::now())
    }

    /// Parse `claims_text` as a JSON object and sign it, computing `exp` from `now`
    pub fn encode_at(&self, claims_text: &str, now: DateTime<Utc>) -> JwtResult<JwtToken> {
        if self.secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }
        let mut claims = parse_claims(claims_text)?;

        if !self.lifetime.is_zero() {
            let exp = now
                .checked_add_signed(self.lifetime)
                .ok_or_else(|| JwtError::signing_failure("expiry is out of range"))?;
            debug!("Setting exp to {} (lifetime {})", exp.timestamp(), self.lifetime);
            claims.insert("exp".to_string(), Value::from(exp.timestamp()));
        }

        self.sign_claims(&claims)
    }

    /// Sign an already-built claims object as-is
    pub fn sign_claims(&self, claims: &Claims) -> JwtResult<JwtToken> {
        if self.secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }
        let header = serde_json::to_vec(&JwtHeader::hs256())
            .map_err(|e| JwtError::signing_failure(&e.to_string()))?;
        let payload =
            serde_json::to_vec(claims).map_err(|e| JwtError::signing_failure(&e.to_string()))?;

        let signing_input = format!("{}.{}", base64_url_encode(&header), base64_url_encode(&payload));
        let signature = sign_hs256(&signing_input, self.secret)?;
        let token = format!("{signing_input}.{}", base64_url_encode(&signature));

        LoggingTransformer::log_token_operation("encode", token.len(), true);
        Ok(JwtToken(token))
    }
}

/// Sign `claims_text` with `secret`, setting `exp` when `lifetime` is non-zero
pub fn encode(claims_text: &str, secret: &[u8], lifetime: TimeDelta) -> JwtResult<JwtToken> {
    Encoder::new(secret).with_lifetime(lifetime).encode(claims_text)
}

fn parse_claims(claims_text: &str) -> JwtResult<Claims> {
    match serde_json::from_str::<Value>(claims_text) {
        Ok(Value::Object(claims)) => Ok(claims),
        Ok(other) => Err(JwtError::InvalidClaimsJson(format!(
            "expected an object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(JwtError::invalid_claims_json(&e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
