//! `jwt` command-line tool
//!
//! Signs JSON claims into HS256 tokens and decodes tokens into a readable
//! report. See [`commands::Cli`] for the flags.

pub mod commands;
pub mod config;
pub mod prompt;
pub mod token_operations;

use std::io::Write;

use jwtool_jwt::{JwtResult, SecretProvider};

pub use commands::Cli;
pub use config::{Mode, RunConfig};
pub use prompt::TerminalSecret;

/// Run one invocation, writing results to `out`
///
/// `prompt` is only consulted when signing without a secret.
pub fn run<W: Write>(config: RunConfig, prompt: &dyn SecretProvider, out: &mut W) -> JwtResult<()> {
    match config.mode {
        Mode::Encode { claims } => token_operations::handle_encode(
            &claims,
            &config.exp,
            config.secret.as_deref(),
            prompt,
            out,
        ),
        Mode::Decode { token, claims_only } => {
            token_operations::handle_decode(&token, config.secret.as_deref(), claims_only, out)
        }
    }
}
