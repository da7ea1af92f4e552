//! Spawns the supervised child with its output piped back to us.

use std::process::Stdio;

use tokio::process::{Child, ChildStderr, ChildStdout, Command};

use crate::error::SuperviseError;

/// A running child plus its two pipe ends, each independently readable.
#[derive(Debug)]
pub struct ChildStreams {
    pub child: Child,
    pub stdout: ChildStdout,
    pub stderr: ChildStderr,
}

/// Launches `program` with the given arguments.
///
/// stdout and stderr are redirected into distinct pipes; stdin is
/// inherited so interactive children keep working. The returned `Child`
/// is later waited on for the exit status the parent propagates.
pub fn spawn_child(program: &str, args: &[String]) -> Result<ChildStreams, SuperviseError> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| SuperviseError::Spawn {
        program: program.to_owned(),
        source,
    })?;

    let stdout = child
        .stdout
        .take()
        .ok_or(SuperviseError::Capture { stream: "stdout" })?;
    let stderr = child
        .stderr
        .take()
        .ok_or(SuperviseError::Capture { stream: "stderr" })?;

    Ok(ChildStreams {
        child,
        stdout,
        stderr,
    })
}
