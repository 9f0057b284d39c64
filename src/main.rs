//! vpn-prefixes: collects the prefixes announced by VPN providers' ASNs.

use std::path::Path;
use std::process::ExitCode;

use vpn_prefixes::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match &cli.command {
        Some(Command::Init { output }) => write_template(output),
        None => collect(&cli),
    }
}

/// Writes the commented configuration template to `output`.
fn write_template(output: &Path) -> ExitCode {
    if let Err(e) = write_default_config(output) {
        eprintln!("Error: {e}");
        return exit_code::CONFIG_ERROR;
    }

    println!("Configuration template written to: {}", output.display());
    exit_code::SUCCESS
}

/// Resolves the configuration and runs every selected collection pass.
///
/// Configuration problems are reported on stderr before logging exists.
#[cfg(not(tarpaulin_include))]
fn collect(cli: &Cli) -> ExitCode {
    let config = match ValidatedConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::info!("{config}");

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("cannot start async runtime: {e}"))
        .and_then(|runtime| {
            runtime
                .block_on(run::execute(config))
                .map_err(|e| e.to_string())
        });

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(message) => {
            tracing::error!("Collection failed: {message}");
            exit_code::runtime_error()
        }
    }
}
