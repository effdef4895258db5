#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! signature-names — fetch, clean, and sort the signer names of a petition.

mod api;
mod cli;
mod commands;
mod config;
mod signatures;
mod telemetry;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

use api::HttpFetcher;
use cli::{Cli, write_error};
use config::ApiConfig;
use signatures::SignatureError;

fn main() {
    if let Err(err) = telemetry::init(telemetry::DEFAULT_LOG_LEVEL) {
        eprintln!("{err}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            debug!(error = %err, "argument parsing failed");
            let usage = SignatureError::Usage;
            write_error(&mut out, &usage);
            std::process::exit(usage.exit_code());
        }
    };

    let config = ApiConfig::default();
    let result = HttpFetcher::new(&config)
        .map_err(SignatureError::from)
        .and_then(|fetcher| commands::run(&cli, &config, &fetcher, &mut out));

    if let Err(err) = result {
        write_error(&mut out, &err);
        std::process::exit(err.exit_code());
    }
}
