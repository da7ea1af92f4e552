//! Turns raw byte chunks from one stream into discrete lines.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt};

use super::buffer::LineBuffer;

/// Per-call read cap, in bytes. Small reads keep visible latency low for
/// interactive children: one large read could absorb output that would
/// otherwise have been forwarded line by line.
pub const READ_CHUNK: usize = 100;

/// Consumes one stream source into a [`LineBuffer`], emitting completed
/// lines and tracking end of stream.
#[derive(Debug)]
pub struct StreamReassembler<R> {
    source: R,
    buffer: LineBuffer,
    done: bool,
}

impl<R: AsyncRead + Unpin> StreamReassembler<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffer: LineBuffer::new(),
            done: false,
        }
    }

    #[cfg(test)]
    fn with_capacity(source: R, capacity: usize) -> Self {
        Self {
            source,
            buffer: LineBuffer::with_capacity(capacity),
            done: false,
        }
    }

    /// True once the source has reported end of stream or a read error.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Reads one chunk from the source and returns every line it
    /// completes, in arrival order.
    ///
    /// A zero-length read marks the stream done and returns no lines. A
    /// read error also marks the stream done but is surfaced to the
    /// caller; the functional outcome (stop reading, flush at exit) is
    /// the same either way.
    ///
    /// Cancel-safe: the only await is the read itself, and a cancelled
    /// read transfers no bytes.
    pub async fn ingest(&mut self) -> io::Result<Vec<Vec<u8>>> {
        let scan_from = self.buffer.len();
        let slot = self.buffer.read_slot(READ_CHUNK);
        let n = match self.source.read(slot).await {
            Ok(n) => n,
            Err(err) => {
                self.done = true;
                return Err(err);
            }
        };
        if n == 0 {
            self.done = true;
            return Ok(Vec::new());
        }
        self.buffer.advance(n);
        Ok(self.buffer.take_lines(scan_from))
    }

    /// Drains the trailing unterminated data for the end-of-stream flush.
    pub fn take_pending(&mut self) -> Vec<u8> {
        self.buffer.take_pending()
    }
}
