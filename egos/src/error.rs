//! Error taxonomy and exit-code mapping.
//!
//! Every failure here is unrecoverable for this tool's purpose, so
//! errors carry only enough structure to pick the right exit code and
//! print one diagnostic line.

use std::io;

use thiserror::Error;

/// Exit code for setup failures: bad usage, spawn, pipe wiring.
pub const EXIT_SETUP: i32 = 2;

/// Exit code for runtime failures: forwarding output, waiting on the
/// child.
pub const EXIT_RUNTIME: i32 = 3;

#[derive(Debug, Error)]
pub enum SuperviseError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to capture child {stream}")]
    Capture { stream: &'static str },

    #[error("failed to forward child output: {0}")]
    Forward(#[source] io::Error),

    #[error("failed to wait for child: {0}")]
    Wait(#[source] io::Error),
}

impl SuperviseError {
    /// Setup and runtime failures exit with distinct codes.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { .. } | Self::Capture { .. } => EXIT_SETUP,
            Self::Forward(_) | Self::Wait(_) => EXIT_RUNTIME,
        }
    }
}
