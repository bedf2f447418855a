//! Encode and decode handlers

use std::io::Write;

use chrono::{Local, Utc};
use jwtool_jwt::{Encoder, JwtResult, SecretProvider, decode, parse_exp, resolve_secret};
use log::debug;

/// Sign `claims` and write the token on its own line
///
/// The lifetime is parsed before the secret is requested, so an invalid
/// `--exp` warning shows up ahead of any prompt.
pub fn handle_encode<W: Write>(
    claims: &str,
    exp: &str,
    secret_flag: Option<&str>,
    fallback: &dyn SecretProvider,
    out: &mut W,
) -> JwtResult<()> {
    let lifetime = parse_exp(exp);
    let secret = resolve_secret(secret_flag, fallback)?;
    debug!("Encoding claims ({} bytes)", claims.len());

    let token = Encoder::new(secret.as_bytes())
        .with_lifetime(lifetime)
        .encode(claims)?;
    writeln!(out, "{token}")?;
    Ok(())
}

/// Decode `token` and write either the full report or only the claims
///
/// No secret is requested interactively; verification only happens when one
/// was supplied up front.
pub fn handle_decode<W: Write>(
    token: &str,
    secret: Option<&str>,
    claims_only: bool,
    out: &mut W,
) -> JwtResult<()> {
    let decoded = decode(token, secret.map(str::as_bytes))?;
    debug!("Signature verification: {:?}", decoded.verification);

    if claims_only {
        writeln!(out, "{}", decoded.claims_json())?;
    } else {
        write!(out, "{}", decoded.render(Utc::now(), &Local))?;
    }
    Ok(())
}
