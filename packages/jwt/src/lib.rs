//! JSON Web Token (JWT) encoding and inspection
//!
//! This crate provides:
//! - HS256 signing of arbitrary JSON object claims ([`Encoder`])
//! - Decoding with optional, non-fatal signature verification ([`decode`])
//! - Human-readable reports of the time claims ([`DecodedToken::render`])
//! - Lifetime parsing with coarse suffixes (`yr`, `mo`, `w`, `d`) ([`parse_exp`])
//! - Pluggable secret sources ([`SecretProvider`])

pub(crate) mod crypto;
pub mod decoder;
pub mod duration;
pub mod encoder;
mod error;
pub mod report;
pub mod secret;
mod types;
pub(crate) mod utils;

pub use decoder::{DecodedHeader, DecodedToken, decode};
pub use duration::{SUPPORTED_UNITS, UNITS, Unit, parse_exp, parse_lifetime, readable_duration};
pub use encoder::{Encoder, encode};
pub use error::*;
pub use report::annotations;
pub use secret::{Secret, SecretProvider, StaticSecret, resolve_secret};
pub use types::*;
