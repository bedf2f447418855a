//! Common infrastructure for the jwtool workspace
//!
//! Currently this is the logging bootstrap shared by the `jwtool_jwt`
//! library and the `jwt` binary.

pub mod logging;

pub use logging::LoggingTransformer;
