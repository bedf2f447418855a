//! Human-readable rendering of a decoded token
//!
//! The annotation block explains the time claims relative to "now" and, when
//! a secret was supplied, whether it matched the signature.

use std::fmt::{self, Write as _};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::{
    decoder::{DecodedHeader, DecodedToken},
    duration::readable_duration,
    types::{StandardClaims, Verification},
};

/// RFC 822 layout with a numeric zone, e.g. `02 Jan 06 15:04 -0700`
const RFC822_NUMERIC_ZONE: &str = "%d %b %y %H:%M %z";

/// Line reported when the supplied secret matches
pub const SIGNATURE_VERIFIED: &str = "JWT Token signature verified, key is valid";
/// Line reported when the supplied secret does not match
pub const SIGNATURE_NOT_MATCHING: &str = "JWT Token signature not matching, key is not valid";

fn format_time<Tz>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.with_timezone(tz).format(RFC822_NUMERIC_ZONE).to_string()
}

/// Build the annotation lines for a token, one `\n`-terminated line each
///
/// Only claims that are set produce a line. The token lifetime is measured
/// from `iat`, or from `nbf` when there is no `iat`.
pub fn annotations<Tz>(
    standard: &StandardClaims,
    verification: Verification,
    now: DateTime<Utc>,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut meta = String::new();
    let issued_at = standard.issued_at();
    let not_before = standard.not_before();

    if let Some(iat) = issued_at {
        let _ = write!(meta, "Issued At: {}", format_time(iat, tz));
        if iat > now {
            meta.push_str("\t// invalid time, issued in future");
        } else {
            let _ = write!(meta, "\t// {} ago", readable_duration(now - iat));
        }
        meta.push('\n');
    }

    if let Some(nbf) = not_before {
        let _ = write!(meta, "Not Before: {}", format_time(nbf, tz));
        if now < nbf {
            let _ = write!(meta, "\t// cannot be used for {}", readable_duration(nbf - now));
        }
        meta.push('\n');
    }

    if let Some(exp) = standard.expires_at() {
        let _ = write!(meta, "Expires At: {}", format_time(exp, tz));
        if now > exp {
            let _ = write!(meta, "\t// expired {} ago", readable_duration(now - exp));
        } else {
            let _ = write!(meta, "\t// expires in {}", readable_duration(exp - now));
        }
        meta.push('\n');

        if let Some(start) = issued_at.or(not_before) {
            let _ = writeln!(meta, "Token Lifetime: {}", readable_duration(exp - start));
        }
    }

    match verification {
        Verification::NotAttempted => {}
        Verification::Verified => {
            let _ = writeln!(meta, "{SIGNATURE_VERIFIED}");
        }
        Verification::Failed => {
            let _ = writeln!(meta, "{SIGNATURE_NOT_MATCHING}");
        }
    }
    meta
}

/// Indent a JSON object with two spaces, keeping its key order
#[must_use]
pub fn indent_json(value: &serde_json::Map<String, Value>) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

impl DecodedHeader {
    /// Header as shown in a report
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            DecodedHeader::Json(map) => indent_json(map),
            DecodedHeader::Raw(text) => text.clone(),
        }
    }
}

impl DecodedToken {
    /// Claims as indented JSON
    #[must_use]
    pub fn claims_json(&self) -> String {
        indent_json(&self.claims)
    }

    /// Annotation block for this token, see [`annotations`]
    pub fn annotations<Tz>(&self, now: DateTime<Utc>, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        annotations(&self.standard, self.verification, now, tz)
    }

    /// Full report: header, claims, raw signature and annotations
    pub fn render<Tz>(&self, now: DateTime<Utc>, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format!(
            "\n✻ Header\n{}\n\n✻ Claims\n{}\n\nSignature: {}\n\n{}\n",
            self.header.render(),
            self.claims_json(),
            self.signature,
            self.annotations(now, tz),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap_or_default()
    }

    const NOW: i64 = 1_700_000_000;
    const DAY: i64 = 86_400;

    fn standard(iat: Option<i64>, nbf: Option<i64>, exp: Option<i64>) -> StandardClaims {
        StandardClaims { iat, nbf, exp }
    }

    #[test]
    fn empty_without_time_claims_or_secret() {
        let meta = annotations(&StandardClaims::default(), Verification::NotAttempted, at(NOW), &Utc);
        assert_eq!(meta, "");
    }

    #[test]
    fn only_verification_line_without_time_claims() {
        let meta = annotations(&StandardClaims::default(), Verification::Verified, at(NOW), &Utc);
        assert_eq!(meta, format!("{SIGNATURE_VERIFIED}\n"));

        let meta = annotations(&StandardClaims::default(), Verification::Failed, at(NOW), &Utc);
        assert_eq!(meta, format!("{SIGNATURE_NOT_MATCHING}\n"));
    }

    #[test]
    fn past_token_reports_expiry_and_lifetime() {
        let claims = standard(Some(NOW - 30 * DAY), None, Some(NOW - 10 * DAY));
        let meta = annotations(&claims, Verification::NotAttempted, at(NOW), &Utc);
        assert_eq!(
            meta,
            "Issued At: 15 Oct 23 22:13 +0000\t// 4w ago\n\
             Expires At: 04 Nov 23 22:13 +0000\t// expired 10d ago\n\
             Token Lifetime: 3w\n"
        );
    }

    #[test]
    fn future_claims() {
        let claims = standard(Some(NOW + 60), Some(NOW + 2 * DAY), Some(NOW + 20 * DAY));
        let meta = annotations(&claims, Verification::NotAttempted, at(NOW), &Utc);
        let lines: Vec<&str> = meta.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("\t// invalid time, issued in future"));
        assert!(lines[1].ends_with("\t// cannot be used for 2d"));
        assert!(lines[2].ends_with("\t// expires in 3w"));
        assert_eq!(lines[3], "Token Lifetime: 3w");
    }

    #[test]
    fn lifetime_falls_back_to_not_before() {
        let claims = standard(None, Some(NOW - DAY), Some(NOW + 9 * DAY));
        let meta = annotations(&claims, Verification::NotAttempted, at(NOW), &Utc);
        assert!(meta.starts_with("Not Before: "));
        assert!(!meta.contains("cannot be used"));
        assert!(meta.ends_with("Token Lifetime: 10d\n"));
    }

    #[test]
    fn expiry_alone_has_no_lifetime() {
        let claims = standard(None, None, Some(NOW + 3 * DAY));
        let meta = annotations(&claims, Verification::NotAttempted, at(NOW), &Utc);
        assert!(!meta.contains("Token Lifetime"));
        assert!(meta.contains("expires in 3d"));
    }

    #[test]
    fn renders_in_requested_zone() {
        let Some(tz) = chrono::FixedOffset::east_opt(2 * 3600) else {
            panic!("offset out of range");
        };
        assert_eq!(format_time(at(NOW), &tz), "15 Nov 23 00:13 +0200");
    }

    #[test]
    fn full_report_layout() {
        // {"alg":"HS256","typ":"JWT"} / {"sub":"a"} / "sig"
        let decoded = decode("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJhIn0.sig", None);
        let Ok(decoded) = decoded else {
            panic!("decode failed: {decoded:?}");
        };
        assert_eq!(
            decoded.render(at(NOW), &Utc),
            "\n✻ Header\n{\n  \"alg\": \"HS256\",\n  \"typ\": \"JWT\"\n}\n\n\
             ✻ Claims\n{\n  \"sub\": \"a\"\n}\n\n\
             Signature: sig\n\n\n"
        );
    }
}
