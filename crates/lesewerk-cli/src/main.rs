// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lesewerk — readability reports for UI copy.
//
// Entry point. Initialises logging, parses the command line, and dispatches.
// Reports go to stdout as JSON; logs and failures go to stderr.

mod commands;
mod scan;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lesewerk_analysis::export::DEFAULT_EXPORT_FILENAME;
use lesewerk_core::error::{LesewerkError, Result};
use lesewerk_core::human_errors::humanize_error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lesewerk",
    about = "Readability analysis for UI text and screenshots",
    version
)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a readability report for each text file (stdin if none given)
    Analyze {
        files: Vec<PathBuf>,
    },

    /// Analyse text files and write the aggregate export document
    Export {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(short, long, default_value = DEFAULT_EXPORT_FILENAME)]
        output: PathBuf,
    },

    /// Extract text from screenshots, analyse, and export
    Scan {
        #[arg(required = true)]
        images: Vec<PathBuf>,

        #[arg(short, long, default_value = DEFAULT_EXPORT_FILENAME)]
        output: PathBuf,

        /// Use the read service at LESEWERK_OCR_ENDPOINT instead of local OCR
        #[arg(long)]
        remote: bool,

        /// Directory holding text-detection.rten and text-recognition.rten
        #[arg(long, conflicts_with = "remote")]
        models: Option<PathBuf>,

        /// Substitute placeholder text when extraction fails
        #[arg(long)]
        fallback: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze { files } => {
            let inputs = commands::read_inputs(&files, std::io::stdin().lock())?;
            commands::write_reports(&inputs, &mut std::io::stdout().lock())
        }
        Command::Export { files, output } => {
            let inputs = commands::read_inputs(&files, std::io::empty())?;
            commands::export(&inputs, &output).map(|_| ())
        }
        Command::Scan {
            images,
            output,
            remote,
            models,
            fallback,
        } => {
            let options = scan::ScanOptions {
                remote,
                models,
                fallback,
            };
            scan::run(&images, &output, &options).map(|_| ())
        }
    }
}

fn report_error(err: &LesewerkError) {
    let human = humanize_error(err);
    eprintln!("error: {err}");
    eprintln!("  {} {}", human.message, human.suggestion);
}
