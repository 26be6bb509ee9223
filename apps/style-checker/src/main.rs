//! Style checker binary
//!
//! Exit status: 0 when the document conforms, 1 when violations were found,
//! 2 when the check could not run.

use std::process::ExitCode;

use clap::Parser;
use style_checker::{init_tracing, run, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    tracing::info!("Starting style checker v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("Error: {error:#}");
            ExitCode::from(2)
        }
    }
}
