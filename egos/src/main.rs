//! Egos - run a command and annotate its output lines.
//!
//! Egos launches a single child process, captures stdout and stderr
//! independently, and re-emits each completed line prefixed with the
//! stream it arrived on and a microsecond timestamp. Output that
//! arrives in arbitrary-sized chunks is reassembled into lines before
//! emission; a trailing unterminated line is flushed when its stream
//! ends. The parent exits with the child's exit status.
//!
//! Architecture:
//! - `process` spawns the child with both output streams piped
//! - `stream` is the core: per-stream line reassembly plus a readiness
//!   loop that waits on both pipes at once
//! - `output` renders tagged, timestamped records to our own stdout

mod cli;
mod error;
mod output;
mod process;
mod stream;

use std::process::exit;

use clap::Parser;

use cli::{execute, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    match execute(cli).await {
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("egos: {err}");
            exit(err.exit_code());
        }
    }
}
