//! Tagged, timestamped line emission.

use std::fmt;
use std::io::{self, Write};

use chrono::Local;

/// Which child stream a line arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamTag {
    Out,
    Err,
}

impl StreamTag {
    /// Single-character form used in the output prefix.
    const fn label(self) -> char {
        match self {
            Self::Out => 'O',
            Self::Err => 'E',
        }
    }
}

impl fmt::Display for StreamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Out => "stdout",
            Self::Err => "stderr",
        })
    }
}

/// How completed lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `[egos:<tag> <timestamp>] <line>` per line.
    #[default]
    Annotated,
    /// The line verbatim, nothing added.
    Plain,
}

/// Writes output records for completed lines and the end-of-stream
/// flush. Lines are raw bytes end to end; no encoding validation, no
/// whitespace changes.
#[derive(Debug)]
pub struct OutputSink<W> {
    writer: W,
    mode: OutputMode,
}

impl<W: Write> OutputSink<W> {
    pub fn new(writer: W, mode: OutputMode) -> Self {
        Self { writer, mode }
    }

    /// Writes one record per line and flushes the writer once.
    ///
    /// The timestamp is captured once per call and shared by every line
    /// of the batch: all lines completed by a single read carry the same
    /// stamp.
    pub fn emit(&mut self, tag: StreamTag, lines: &[Vec<u8>]) -> io::Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        match self.mode {
            OutputMode::Annotated => {
                let stamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f");
                let prefix = format!("[egos:{} {stamp}] ", tag.label());
                for line in lines {
                    self.writer.write_all(prefix.as_bytes())?;
                    self.writer.write_all(line)?;
                    self.writer.write_all(b"\n")?;
                }
            }
            OutputMode::Plain => {
                for line in lines {
                    self.writer.write_all(line)?;
                    self.writer.write_all(b"\n")?;
                }
            }
        }
        self.writer.flush()
    }

    /// Emits a stream's trailing unterminated bytes at end of stream.
    ///
    /// This is a separate path from [`Self::emit`]: the remainder is
    /// written verbatim plus a newline, untagged and untimestamped in
    /// both modes. Empty pending data emits nothing.
    pub fn flush_pending(&mut self, pending: &[u8]) -> io::Result<()> {
        if pending.is_empty() {
            return Ok(());
        }
        self.writer.write_all(pending)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&[u8]]) -> Vec<Vec<u8>> {
        items.iter().map(|l| l.to_vec()).collect()
    }

    #[test]
    fn annotated_lines_share_one_timestamp() {
        let mut sink = OutputSink::new(Vec::new(), OutputMode::Annotated);
        sink.emit(StreamTag::Out, &lines(&[b"first", b"second"]))
            .unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let records: Vec<&str> = output.lines().collect();
        assert_eq!(records.len(), 2);

        let stamp_of = |record: &str| {
            let (prefix, rest) = record.split_once("] ").unwrap();
            let stamp = prefix.strip_prefix("[egos:O ").unwrap();
            // 2026-08-30T12:34:56.123456
            assert_eq!(stamp.len(), 26);
            assert_eq!(stamp.as_bytes()[10], b'T');
            assert_eq!(stamp.as_bytes()[19], b'.');
            (stamp.to_owned(), rest.to_owned())
        };
        let (stamp_a, line_a) = stamp_of(records[0]);
        let (stamp_b, line_b) = stamp_of(records[1]);
        assert_eq!(stamp_a, stamp_b);
        assert_eq!(line_a, "first");
        assert_eq!(line_b, "second");
    }

    #[test]
    fn stderr_lines_get_the_err_label() {
        let mut sink = OutputSink::new(Vec::new(), OutputMode::Annotated);
        sink.emit(StreamTag::Err, &lines(&[b"oops"])).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("[egos:E "));
        assert!(output.ends_with("] oops\n"));
    }

    #[test]
    fn plain_mode_reproduces_lines_verbatim() {
        let mut sink = OutputSink::new(Vec::new(), OutputMode::Plain);
        sink.emit(StreamTag::Out, &lines(&[b"a", b"", b"  spaced  "]))
            .unwrap();
        assert_eq!(sink.into_inner(), b"a\n\n  spaced  \n".to_vec());
    }

    #[test]
    fn empty_batch_writes_nothing() {
        let mut sink = OutputSink::new(Vec::new(), OutputMode::Annotated);
        sink.emit(StreamTag::Out, &[]).unwrap();
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn pending_flush_is_untagged_in_both_modes() {
        for mode in [OutputMode::Annotated, OutputMode::Plain] {
            let mut sink = OutputSink::new(Vec::new(), mode);
            sink.flush_pending(b"tail").unwrap();
            assert_eq!(sink.into_inner(), b"tail\n".to_vec());
        }
    }

    #[test]
    fn empty_pending_flush_writes_nothing() {
        let mut sink = OutputSink::new(Vec::new(), OutputMode::Annotated);
        sink.flush_pending(b"").unwrap();
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let mut sink = OutputSink::new(Vec::new(), OutputMode::Plain);
        sink.emit(StreamTag::Out, &lines(&[&[0xff, 0xfe, 0x00]]))
            .unwrap();
        assert_eq!(sink.into_inner(), vec![0xff, 0xfe, 0x00, b'\n']);
    }
}
