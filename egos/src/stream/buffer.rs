//! Growable byte buffer for pending, newline-unterminated stream data.

/// Starting allocation for each stream's buffer. Comfortably holds
/// typical log lines while bounding the size of individual reads.
pub const INITIAL_CAPACITY: usize = 16_300;

/// Owned storage for bytes read from one stream that have not yet been
/// emitted as part of a completed line.
///
/// Pending data stays left-aligned: after every scan that emitted at
/// least one line, `[0, pos)` holds exactly the unterminated remainder,
/// and nothing before `pos` contains a newline.
#[derive(Debug)]
pub struct LineBuffer {
    /// Backing storage; its length is the current capacity.
    buf: Vec<u8>,
    /// Write cursor: number of pending bytes.
    pos: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(1)],
            pos: 0,
        }
    }

    /// Number of pending bytes.
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The pending bytes awaiting a terminating newline.
    pub fn pending_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// The writable region for the next read, at most `limit` bytes.
    ///
    /// If the buffer is full, the allocation is doubled first. Growth is
    /// unbounded: a single line longer than available memory keeps
    /// doubling until allocation fails. A read that exactly fills the
    /// buffer triggers the doubling on the next call, not this one.
    pub fn read_slot(&mut self, limit: usize) -> &mut [u8] {
        if self.pos == self.buf.len() {
            self.buf.resize(self.buf.len() * 2, 0);
        }
        let end = (self.pos + limit).min(self.buf.len());
        &mut self.buf[self.pos..end]
    }

    /// Advances the write cursor after `n` bytes were read into the slot
    /// returned by [`Self::read_slot`].
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.buf.len());
        self.pos += n;
    }

    /// Extracts every complete line whose terminating newline lies at or
    /// after `scan_from`, in order, then compacts the remainder down to
    /// offset zero.
    ///
    /// Bytes before `scan_from` were scanned by earlier passes and hold
    /// no newline. Each returned line excludes its newline; empty lines
    /// are returned, not collapsed. If no newline is found the buffer is
    /// left untouched and data accumulates for the next pass.
    pub fn take_lines(&mut self, scan_from: usize) -> Vec<Vec<u8>> {
        debug_assert!(scan_from <= self.pos);
        let mut lines = Vec::new();
        let mut print_start = 0;
        let mut search = scan_from;
        while let Some(off) = self.buf[search..self.pos].iter().position(|&b| b == b'\n') {
            let newline = search + off;
            lines.push(self.buf[print_start..newline].to_vec());
            print_start = newline + 1;
            search = print_start;
        }
        if print_start > 0 {
            self.buf.copy_within(print_start..self.pos, 0);
            self.pos -= print_start;
        }
        lines
    }

    /// Returns and clears the unterminated remainder, for the
    /// end-of-stream flush.
    pub fn take_pending(&mut self) -> Vec<u8> {
        let pending = self.buf[..self.pos].to_vec();
        self.pos = 0;
        pending
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
