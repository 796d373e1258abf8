//! Partir CLI
//!
//! Dataset-splitting entry point for the partir library.
//!
//! # Usage
//!
//! ```bash
//! # Split datasets from manifests
//! partir split corpus.yaml ablation.yaml
//!
//! # Split with overrides
//! partir split corpus.yaml --seed 7 --overwrite
//!
//! # Validate manifests
//! partir validate corpus.yaml --detailed
//!
//! # Inspect a manifest and its cached artifacts
//! partir info corpus.yaml
//!
//! # Generate a starter manifest
//! partir init corpus --template full --output corpus.yaml
//! ```

use clap::Parser;
use partir::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
