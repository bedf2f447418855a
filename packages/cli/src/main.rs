//! Main entry point for the `jwt` CLI application

use std::process::ExitCode;

use clap::Parser;
use jwtool_cli::{Cli, RunConfig, TerminalSecret};
use jwtool_common::LoggingTransformer;
use log::error;

fn main() -> ExitCode {
    LoggingTransformer::init();

    let result = RunConfig::from_cli(Cli::parse())
        .and_then(|config| jwtool_cli::run(config, &TerminalSecret::default(), &mut std::io::stderr()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("[jwt] {err}");
            ExitCode::FAILURE
        }
    }
}
