//! JWT error types

use crate::duration::SUPPORTED_UNITS;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Errors raised while encoding, decoding or inspecting a token
///
/// A signature that does not match is not an error; it is reported through
/// [`crate::Verification::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// No token was given to decode
    #[error("failed to decode, no token specified")]
    MissingToken,
    /// The token is empty or is not three dot-separated segments
    #[error("JWT token provided does not look valid")]
    MalformedToken,
    /// The header segment is not valid base64url
    #[error("failed to decode JWT header: {0}")]
    MalformedHeader(String),
    /// The claims segment is not valid base64url
    #[error("failed to decode JWT claims: {0}")]
    MalformedClaims(String),
    /// The decoded claims are not an object with integer time fields
    #[error("unable to parse standard claims from JWT: {0}")]
    InvalidStandardClaims(String),
    /// No secret could be resolved for signing
    #[error("missing signing secret, please specify with --secret")]
    MissingSecret,
    /// The claims to sign are not a JSON object
    #[error("claims to sign must be a JSON object: {0}")]
    InvalidClaimsJson(String),
    /// The lifetime expression could not be parsed
    #[error(
        "invalid --exp {0:?}, please use one of these supported --exp units: {units}",
        units = SUPPORTED_UNITS
    )]
    InvalidDurationExpression(String),
    /// Producing the signed token failed
    #[error("failed to generate JWT token: {0}")]
    SigningFailure(String),
    /// The interactive secret prompt could not be read
    #[error("failed to read input: {0}")]
    TerminalReadFailure(#[source] std::io::Error),
    /// Writing the result failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl JwtError {
    /// Create a malformed header error
    #[inline]
    #[must_use]
    pub fn malformed_header(msg: &str) -> Self {
        JwtError::MalformedHeader(msg.to_string())
    }

    /// Create a malformed claims error
    #[inline]
    #[must_use]
    pub fn malformed_claims(msg: &str) -> Self {
        JwtError::MalformedClaims(msg.to_string())
    }

    /// Create an invalid standard claims error
    #[inline]
    #[must_use]
    pub fn invalid_standard_claims(msg: &str) -> Self {
        JwtError::InvalidStandardClaims(msg.to_string())
    }

    /// Create an invalid claims JSON error
    #[inline]
    #[must_use]
    pub fn invalid_claims_json(msg: &str) -> Self {
        JwtError::InvalidClaimsJson(msg.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing_failure(msg: &str) -> Self {
        JwtError::SigningFailure(msg.to_string())
    }
}
