//! Lumen unified CLI
//!
//! Command-line interface for the Lumen embedding host: runs entry scripts
//! and evaluates inline chunks, mapping outcomes to process exit codes.

use clap::{Parser, Subcommand};
use lumen_host::RuntimeError;
use std::path::PathBuf;

mod commands;
mod manifest;
mod output;

/// Exit code when the entry script fails to load or raises.
const EXIT_SCRIPT_FAILURE: i32 = 1;
/// Exit code when the runtime itself cannot be brought up.
const EXIT_INIT_FAILURE: i32 = 2;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Lua embedding host", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an entry script
    Run {
        /// Script file (defaults to [package].main from lumen.toml, then main.lua)
        file: Option<PathBuf>,
    },

    /// Evaluate an inline chunk and print its result
    Eval {
        /// Lua source text
        code: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // The command helpers own the runtime; by the time an outcome reaches
    // this match the interpreter has already been torn down.
    let outcome = match cli.command {
        Commands::Run { file } => commands::run::execute(file.as_deref()),
        Commands::Eval { code } => commands::eval::execute(&code),
    };

    if let Err(err) = outcome {
        output::report_error(&format!("{:#}", err));
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<RuntimeError>() {
        Some(RuntimeError::Init(_)) | Some(RuntimeError::Register { .. }) => EXIT_INIT_FAILURE,
        _ => EXIT_SCRIPT_FAILURE,
    }
}
