//! # Jot CLI
//!
//! The `jot` binary is a thin client of the `jotter` library. Everything that
//! touches the terminal lives in `cli/`:
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: context wiring and one handler per command
//! - `print.rs`: colored output of `CmdResult` values
//!
//! This file only runs the CLI and turns errors into an exit status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
