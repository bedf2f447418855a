//! Token decoding and signature verification

use jwtool_common::LoggingTransformer;
use log::debug;
use serde_json::{Map, Value};

use crate::{
    crypto::hmac_sha256::verify_hs256,
    error::{JwtError, JwtResult},
    types::{Claims, HS256, StandardClaims, Verification},
    utils::base64_url_decode,
};

/// Decoded token header
///
/// Headers are opaque metadata for display, so one that is not a JSON
/// object is kept as text instead of failing the decode.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedHeader {
    /// Header parsed as a JSON object
    Json(Map<String, Value>),
    /// Header bytes that are not a JSON object
    Raw(String),
}

impl DecodedHeader {
    fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => DecodedHeader::Json(map),
            _ => DecodedHeader::Raw(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    /// The `alg` header field, when present
    #[must_use]
    pub fn alg(&self) -> Option<&str> {
        match self {
            DecodedHeader::Json(map) => map.get("alg").and_then(Value::as_str),
            DecodedHeader::Raw(_) => None,
        }
    }
}

/// Everything recovered from a compact token
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    /// First segment
    pub header: DecodedHeader,
    /// Second segment, key order preserved
    pub claims: Claims,
    /// Time claims pulled out of `claims`
    pub standard: StandardClaims,
    /// Third segment, as written in the token
    pub signature: String,
    /// Result of checking the signature against the supplied secret
    pub verification: Verification,
}

/// Split, decode and optionally verify a compact token
///
/// Surrounding whitespace is ignored. The signature is only checked when a
/// non-empty `secret` is given, and a mismatch is reported through
/// [`DecodedToken::verification`] rather than as an error.
pub fn decode(token: &str, secret: Option<&[u8]>) -> JwtResult<DecodedToken> {
    let token = token.trim();
    if token.is_empty() {
        return Err(JwtError::MalformedToken);
    }
    let parts: Vec<&str> = token.split('.').collect();
    let [header_b64, claims_b64, signature_b64] = parts[..] else {
        debug!("Token has {} segments, expected 3", parts.len());
        return Err(JwtError::MalformedToken);
    };

    let header_json =
        base64_url_decode(header_b64).map_err(|e| JwtError::malformed_header(&e.to_string()))?;
    let claims_json =
        base64_url_decode(claims_b64).map_err(|e| JwtError::malformed_claims(&e.to_string()))?;

    let claims_value: Value = serde_json::from_slice(&claims_json)
        .map_err(|e| JwtError::invalid_standard_claims(&e.to_string()))?;
    let standard = StandardClaims::from_value(&claims_value)?;
    let Value::Object(claims) = claims_value else {
        return Err(JwtError::invalid_standard_claims("claims are not a JSON object"));
    };

    let header = DecodedHeader::from_bytes(&header_json);

    let verification = match secret.filter(|s| !s.is_empty()) {
        None => Verification::NotAttempted,
        Some(secret) => verify(&header, header_b64, claims_b64, signature_b64, secret),
    };

    LoggingTransformer::log_token_operation("decode", token.len(), true);
    Ok(DecodedToken {
        header,
        claims,
        standard,
        signature: signature_b64.to_string(),
        verification,
    })
}

fn verify(
    header: &DecodedHeader,
    header_b64: &str,
    claims_b64: &str,
    signature_b64: &str,
    secret: &[u8],
) -> Verification {
    if header.alg() != Some(HS256) {
        debug!("Cannot verify algorithm {:?} with a shared secret", header.alg());
        return Verification::Failed;
    }
    let Ok(signature) = base64_url_decode(signature_b64) else {
        debug!("Signature segment is not valid base64url");
        return Verification::Failed;
    };
    let signing_input = format!("{header_b64}.{claims_b64}");
    if verify_hs256(&signing_input, &signature, secret) {
        Verification::Verified
    } else {
        Verification::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const JWT_IO: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9\
        .eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ\
        .SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

    #[test]
    fn decodes_known_token() {
        let decoded = decode(JWT_IO, None);
        let Ok(decoded) = decoded else {
            panic!("decode failed: {decoded:?}");
        };
        assert_eq!(decoded.header.alg(), Some("HS256"));
        assert_eq!(decoded.claims.get("name"), Some(&json!("John Doe")));
        assert_eq!(decoded.standard.iat, Some(1_516_239_022));
        assert_eq!(decoded.signature, "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c");
        assert_eq!(decoded.verification, Verification::NotAttempted);
    }

    #[test]
    fn verifies_with_secret() {
        let ok = decode(JWT_IO, Some(b"your-256-bit-secret")).map(|d| d.verification);
        assert_eq!(ok.ok(), Some(Verification::Verified));

        let bad = decode(JWT_IO, Some(b"wrong")).map(|d| d.verification);
        assert_eq!(bad.ok(), Some(Verification::Failed));

        let empty = decode(JWT_IO, Some(b"")).map(|d| d.verification);
        assert_eq!(empty.ok(), Some(Verification::NotAttempted));
    }

    #[test]
    fn segment_count_must_be_three() {
        for token in ["", "   ", "abc", "a.b", "a.b.c.d"] {
            assert!(
                matches!(decode(token, None), Err(JwtError::MalformedToken)),
                "{token:?} should be malformed"
            );
        }
    }

    #[test]
    fn bad_segments_name_the_segment() {
        assert!(matches!(decode("!!!.e30.sig", None), Err(JwtError::MalformedHeader(_))));
        assert!(matches!(decode("abc.!!!.sig", None), Err(JwtError::MalformedClaims(_))));
        assert!(matches!(
            decode("e30.WzEsMl0.sig", None),
            Err(JwtError::InvalidStandardClaims(_))
        ));
    }

    #[test]
    fn non_json_header_is_kept_as_text() {
        // "hello" / {}
        let decoded = decode("aGVsbG8.e30.sig", Some(b"key"));
        let Ok(decoded) = decoded else {
            panic!("decode failed: {decoded:?}");
        };
        assert_eq!(decoded.header, DecodedHeader::Raw("hello".to_string()));
        assert_eq!(decoded.verification, Verification::Failed);
    }

    #[test]
    fn other_algorithms_do_not_verify() {
        // {"alg":"none"} / {}
        let decoded = decode("eyJhbGciOiJub25lIn0.e30.", Some(b"key")).map(|d| d.verification);
        assert_eq!(decoded.ok(), Some(Verification::Failed));
    }
}
