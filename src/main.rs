//! bankmatch - Reconcile bank transfers against pretix ticket orders
//!
//! Configuration comes entirely from the environment (optionally seeded from
//! a `.env` file). The process runs until it is stopped; it only exits on
//! its own when the configuration is unusable.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use log::info;

use bankmatch::app::App;
use bankmatch::config::Config;

/// Main entry point for the bankmatch daemon
fn main() -> ExitCode {
    // before the logger, which reads RUST_LOG
    let dotenv = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(dotenv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn run(dotenv: dotenvy::Result<PathBuf>) -> anyhow::Result<()> {
    match dotenv {
        Ok(path) => info!("Loaded settings from {}", path.display()),
        Err(e) if e.not_found() => {},
        Err(e) => return Err(e).context("failed to read .env file"),
    }

    info!("bankmatch v{}", bankmatch::VERSION);

    let config = Config::from_env().context("invalid configuration")?;
    let app = App::new(config).context("failed to initialise")?;
    app.run_forever()
}
