//! Interactive secret entry
//!
//! Uses rpassword to read from the controlling terminal with echo disabled.
//! The read blocks until a line is entered or the terminal is closed.

use jwtool_jwt::{JwtError, JwtResult, Secret, SecretProvider};

/// Prompt shown before the masked read
pub const SECRET_PROMPT: &str = "Please enter a secret to sign the JWT (and press Enter)";

/// Secret typed at the terminal
#[derive(Debug, Clone)]
pub struct TerminalSecret {
    prompt: String,
}

impl TerminalSecret {
    /// Terminal provider with a custom prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Default for TerminalSecret {
    fn default() -> Self {
        Self::new(SECRET_PROMPT)
    }
}

impl SecretProvider for TerminalSecret {
    fn secret(&self) -> JwtResult<Secret> {
        eprintln!("{}", self.prompt);
        let secret = rpassword::read_password().map_err(JwtError::TerminalReadFailure)?;
        Ok(Secret::from(secret))
    }

    fn source(&self) -> &'static str {
        "terminal prompt"
    }
}
