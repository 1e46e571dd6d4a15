//! Inspect and exercise the `PKL_DEBUG` diagnostic switch.
//!
//! `pkl-diag status` reports whether diagnostics are on; `pkl-diag emit`
//! writes one diagnostic line through the same path library callers use.

use std::path::{Path, PathBuf};
use std::process;
use std::thread;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use pkl_diag::config::{DiagConfig, load_config};
use pkl_diag::toggle::{self, DiagnosticToggle};
use pkl_diag::{exit_codes, logging};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pkl-diag",
    version,
    about = "Inspect and exercise PKL_DEBUG diagnostic output"
)]
struct Cli {
    /// Read the toggle from a TOML file instead of `PKL_DEBUG`.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print `enabled` or `disabled`; exit 0 when enabled, 2 when disabled.
    Status,
    /// Write the words, joined by spaces, as one diagnostic line.
    Emit {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        /// Emit the line from this many threads at once, suffixed with
        /// ` worker=<n>`.
        #[arg(long, default_value_t = 1)]
        threads: usize,
    },
}

fn main() {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let toggle = resolve_toggle(cli.config.as_deref())?;
    match cli.command {
        Command::Status => Ok(cmd_status(toggle)),
        Command::Emit { words, threads } => Ok(cmd_emit(&words, threads)),
    }
}

/// Install the toggle from `config` if given, otherwise from the environment.
fn resolve_toggle(config: Option<&Path>) -> Result<DiagnosticToggle> {
    let cfg = match config {
        Some(path) => load_config(path)?,
        None => DiagConfig::from_env(),
    };
    let toggle = cfg.toggle();
    toggle::install(toggle)
        .map_err(|current| anyhow!("diagnostic toggle already resolved to {current:?}"))?;
    Ok(toggle)
}

fn cmd_status(toggle: DiagnosticToggle) -> i32 {
    if toggle.is_enabled() {
        println!("enabled");
        exit_codes::OK
    } else {
        println!("disabled");
        exit_codes::DISABLED
    }
}

fn cmd_emit(words: &[String], threads: usize) -> i32 {
    let line = words.join(" ");
    debug!(threads, "emitting diagnostic line");
    if threads <= 1 {
        pkl_diag::pkl_debug!("{line}");
        return exit_codes::OK;
    }
    thread::scope(|scope| {
        for worker in 0..threads {
            let line = &line;
            scope.spawn(move || pkl_diag::pkl_debug!("{line} worker={worker}"));
        }
    });
    exit_codes::OK
}
