//! CLI command definitions

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "jwt")]
#[command(version, about = "Sign claims into an HS256 JWT, or decode and inspect one")]
pub struct Cli {
    /// JSON to sign as claims
    #[arg(long, value_name = "JSON")]
    pub sign: Option<String>,

    /// Encode a JWT token (alias for --sign)
    #[arg(long, value_name = "JSON")]
    pub encode: Option<String>,

    /// Secret to use in signing or verifying the JWT token (will prompt when signing if not provided)
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Expiry - lifetime of the token (optional) (yr, mo, w, d, h, m, s)
    #[arg(long, value_name = "DURATION", allow_hyphen_values = true)]
    pub exp: Option<String>,

    /// Decode a JWT token (the default when nothing is signed)
    #[arg(long)]
    pub decode: bool,

    /// Only print the claims when decoding
    #[arg(long)]
    pub claims: bool,

    /// JWT token to decode
    pub token: Option<String>,
}
