//! Readiness loop over the child's two output streams.

use std::io::{self, Write};

use tokio::io::AsyncRead;

use crate::output::{OutputSink, StreamTag};

use super::reassemble::StreamReassembler;

/// Waits on both streams at once, forwards completed lines as they
/// arrive, and detects end of stream per source.
#[derive(Debug)]
pub struct StreamMux<O, E> {
    out: StreamReassembler<O>,
    err: StreamReassembler<E>,
}

impl<O, E> StreamMux<O, E>
where
    O: AsyncRead + Unpin,
    E: AsyncRead + Unpin,
{
    pub fn new(stdout: O, stderr: E) -> Self {
        Self {
            out: StreamReassembler::new(stdout),
            err: StreamReassembler::new(stderr),
        }
    }

    /// Runs until both streams reach end of stream, then flushes any
    /// unterminated remainder through the sink.
    ///
    /// The select below is the program's sole suspension point; it has
    /// no timeout and blocks until one stream has data or ends. Lines
    /// keep their per-stream order; no ordering is guaranteed between
    /// the two streams.
    pub async fn run<W: Write>(mut self, sink: &mut OutputSink<W>) -> io::Result<()> {
        loop {
            let out_done = self.out.is_done();
            let err_done = self.err.is_done();
            tokio::select! {
                res = self.out.ingest(), if !out_done => {
                    forward(sink, StreamTag::Out, res)?;
                }
                res = self.err.ingest(), if !err_done => {
                    forward(sink, StreamTag::Err, res)?;
                }
                else => break,
            }
        }
        sink.flush_pending(&self.out.take_pending())?;
        sink.flush_pending(&self.err.take_pending())
    }
}

/// Hands one ingest pass's lines to the sink. A read error already
/// marked the stream done; it is reported but does not stop the loop,
/// matching the treatment of end of stream.
fn forward<W: Write>(
    sink: &mut OutputSink<W>,
    tag: StreamTag,
    res: io::Result<Vec<Vec<u8>>>,
) -> io::Result<()> {
    match res {
        Ok(lines) => sink.emit(tag, &lines),
        Err(err) => {
            eprintln!("egos: failed to read child {tag}: {err}");
            Ok(())
        }
    }
}
