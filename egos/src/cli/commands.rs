//! Supervision entry point: spawn, forward, propagate the exit status.

use std::io;
use std::process::ExitStatus;

use crate::error::{SuperviseError, EXIT_RUNTIME};
use crate::output::{OutputMode, OutputSink};
use crate::process::{spawn_child, ChildStreams};
use crate::stream::StreamMux;

use super::args::Cli;

/// Runs the child to completion and returns the exit code the parent
/// should propagate.
pub async fn execute(cli: Cli) -> Result<i32, SuperviseError> {
    let mode = if cli.plain {
        OutputMode::Plain
    } else {
        OutputMode::Annotated
    };

    let ChildStreams {
        mut child,
        stdout,
        stderr,
    } = spawn_child(&cli.program, &cli.args)?;

    let mut sink = OutputSink::new(io::stdout(), mode);
    StreamMux::new(stdout, stderr)
        .run(&mut sink)
        .await
        .map_err(SuperviseError::Forward)?;

    let status = child.wait().await.map_err(SuperviseError::Wait)?;
    Ok(exit_code_of(status))
}

/// Maps the child's exit status to our own exit code: the status code
/// when there is one, otherwise the conventional shell encoding of a
/// signal death.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    EXIT_RUNTIME
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use anyhow::Result;

    use super::*;

    /// Spawns `sh -c script` and collects its multiplexed plain output
    /// plus the exit code.
    async fn supervise_sh(script: &str) -> Result<(String, i32)> {
        let ChildStreams {
            mut child,
            stdout,
            stderr,
        } = spawn_child("sh", &["-c".to_owned(), script.to_owned()])?;

        let mut sink = OutputSink::new(Vec::new(), OutputMode::Plain);
        StreamMux::new(stdout, stderr).run(&mut sink).await?;
        let status = child.wait().await?;
        Ok((String::from_utf8(sink.into_inner())?, exit_code_of(status)))
    }

    #[tokio::test]
    async fn forwards_both_streams() -> Result<()> {
        let (output, code) = supervise_sh("echo one; echo two >&2").await?;
        let mut lines: Vec<&str> = output.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["one", "two"]);
        assert_eq!(code, 0);
        Ok(())
    }

    #[tokio::test]
    async fn propagates_the_child_exit_code() -> Result<()> {
        let (output, code) = supervise_sh("exit 42").await?;
        assert!(output.is_empty());
        assert_eq!(code, 42);
        Ok(())
    }

    #[tokio::test]
    async fn flushes_an_unterminated_final_line() -> Result<()> {
        let (output, code) = supervise_sh("printf 'no newline'").await?;
        assert_eq!(output, "no newline\n");
        assert_eq!(code, 0);
        Ok(())
    }

    #[tokio::test]
    async fn a_line_longer_than_the_initial_buffer_survives() -> Result<()> {
        let long = "x".repeat(40_000);
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "{long}")?;

        let script = format!("cat {}", file.path().display());
        let (output, code) = supervise_sh(&script).await?;
        assert_eq!(output, format!("{long}\n"));
        assert_eq!(code, 0);
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn signal_death_uses_the_shell_encoding() -> Result<()> {
        let (_, code) = supervise_sh("kill -TERM $$").await?;
        assert_eq!(code, 128 + 15);
        Ok(())
    }
}
