#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod app;
mod exporters;

use std::io::stderr;

use tracing_subscriber::EnvFilter;

use crate::app::{
    options::{from_command_line, Options},
    runtime::Config,
};

/// Log level used when `RUST_LOG` is unset
const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() {
    // Logs go to stderr so they never mix with an export written to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(stderr)
        .init();

    // Get exporter configuration from command line
    let args = from_command_line();

    match Options::from_args(&args) {
        Ok(options) => match Config::new(options) {
            Ok(app) => {
                if let Err(why) = app.start() {
                    eprintln!("Unable to export: {why}");
                    std::process::exit(1);
                }
            }
            Err(why) => {
                eprintln!("Unable to read the Lockdown archive: {why}");
                std::process::exit(1);
            }
        },
        Err(why) => {
            eprintln!("{why}");
            std::process::exit(1);
        }
    }
}
