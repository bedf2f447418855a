//! Run configuration assembled from the command line and environment

use jwtool_jwt::{JwtError, JwtResult};

use crate::commands::Cli;

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Sign the given claims text
    Encode {
        /// JSON object text
        claims: String,
    },
    /// Decode and inspect the given token
    Decode {
        /// Compact token text
        token: String,
        /// Print only the claims JSON
        claims_only: bool,
    },
}

/// Everything needed to run one invocation
#[derive(Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    /// `--secret` / `JWT_SECRET`, when given and non-empty
    pub secret: Option<String>,
    /// Raw `--exp` expression, empty when absent
    pub exp: String,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("mode", &self.mode)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("exp", &self.exp)
            .finish()
    }
}

impl RunConfig {
    /// Pick the mode: signing when `--sign` (or its alias `--encode`) has
    /// content, decoding otherwise
    pub fn from_cli(cli: Cli) -> JwtResult<Self> {
        let non_empty = |value: Option<String>| value.filter(|s| !s.is_empty());

        let mode = match non_empty(cli.sign).or_else(|| non_empty(cli.encode)) {
            Some(claims) => Mode::Encode { claims },
            None => {
                let token = non_empty(cli.token).ok_or(JwtError::MissingToken)?;
                Mode::Decode {
                    token,
                    claims_only: cli.claims,
                }
            }
        };

        Ok(Self {
            mode,
            secret: non_empty(cli.secret),
            exp: cli.exp.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> JwtResult<RunConfig> {
        let cli = Cli::try_parse_from(std::iter::once("jwt").chain(args.iter().copied()));
        let Ok(cli) = cli else {
            panic!("parse failed: {cli:?}");
        };
        RunConfig::from_cli(cli)
    }

    #[test]
    fn sign_wins_over_encode() {
        let cfg = config(&["--sign", "{\"a\":1}", "--encode", "{\"b\":2}"]);
        assert_eq!(
            cfg.ok().map(|c| c.mode),
            Some(Mode::Encode { claims: "{\"a\":1}".to_string() })
        );
    }

    #[test]
    fn encode_is_an_alias() {
        let cfg = config(&["--encode", "{}", "--exp", "1d"]);
        let Ok(cfg) = cfg else {
            panic!("config failed: {cfg:?}");
        };
        assert_eq!(cfg.mode, Mode::Encode { claims: "{}".to_string() });
        assert_eq!(cfg.exp, "1d");
    }

    #[test]
    fn empty_sign_falls_through_to_decode() {
        let cfg = config(&["--sign", "", "a.b.c"]);
        assert_eq!(
            cfg.ok().map(|c| c.mode),
            Some(Mode::Decode { token: "a.b.c".to_string(), claims_only: false })
        );
    }

    #[test]
    fn decode_without_token_is_missing_token() {
        assert!(matches!(config(&[]), Err(JwtError::MissingToken)));
        assert!(matches!(config(&["--decode", ""]), Err(JwtError::MissingToken)));
    }

    #[test]
    fn empty_secret_is_treated_as_absent() {
        let cfg = config(&["--secret", "", "a.b.c"]);
        assert_eq!(cfg.ok().and_then(|c| c.secret), None);
    }

    #[test]
    fn debug_hides_secret() {
        let cfg = config(&["--secret", "hunter2", "a.b.c"]);
        let rendered = format!("{:?}", cfg.ok());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
