//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of key material.
//! The `jwt` tool writes its results to the same stream as its logs, so the
//! default format is the bare message for user-facing levels.

use log::{Level, LevelFilter, debug, warn};
use sha2::{Digest, Sha256};
use std::io::Write;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Warnings and errors are shown by default. Configure logging levels via
    /// the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=error` - Only errors, hides duration warnings
    /// - `RUST_LOG=jwtool_jwt=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::new()
                .filter_level(LevelFilter::Warn)
                .parse_default_env()
                .format(|buf, record| match record.level() {
                    Level::Error | Level::Warn | Level::Info => {
                        writeln!(buf, "{}", record.args())
                    }
                    level => writeln!(buf, "[{level} {}] {}", record.target(), record.args()),
                })
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a token operation together with the size of the token involved
    pub fn log_token_operation(operation: &str, token_len: usize, success: bool) {
        if success {
            debug!("Token operation succeeded: {operation} (token_len: {token_len})");
        } else {
            warn!("Token operation failed: {operation} (token_len: {token_len})");
        }
    }

    /// Log where a secret came from without exposing it
    ///
    /// The secret is reduced to a truncated SHA-256 fingerprint.
    pub fn log_secret_source(source: &str, secret: &[u8]) {
        let fingerprint = Self::secure_hash_key(secret);
        debug!("Using secret from {source} (key_hash: {fingerprint})");
    }

    /// Cryptographically secure key hashing for logging
    ///
    /// Returns `#` followed by the first 12 hex characters of the SHA-256 digest.
    pub fn secure_hash_key(key: &[u8]) -> String {
        let hash = Sha256::digest(key);
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
