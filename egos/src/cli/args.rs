//! CLI argument definitions.

use clap::Parser;

/// Egos - run a command and annotate each output line with its stream
/// and a timestamp
#[derive(Parser, Debug)]
#[command(name = "egos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reproduce lines verbatim, without the stream tag and timestamp
    #[arg(short, long)]
    pub plain: bool,

    /// Program to execute
    pub program: String,

    /// Arguments passed to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
