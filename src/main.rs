//! Greeter entry point.
//!
//! Asks for a name on standard output, reads it from standard input and
//! greets according to the local time of day. Diagnostics go to standard
//! error, filtered by `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use deferred_io::greeting::program;
use deferred_io::runtime::{StdConsole, SystemClock};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("starting greeter");

    match program(StdConsole, SystemClock).run_unsafe() {
        Ok(_) => {
            tracing::info!("greeter finished");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "greeter failed");
            let error = anyhow::Error::from(error);
            eprintln!("greeter: {error:#}");
            ExitCode::FAILURE
        }
    }
}
