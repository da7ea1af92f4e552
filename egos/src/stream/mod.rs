//! The line-reassembly and multiplexing core.
//!
//! Raw bytes arrive on two independent sources in arbitrary-sized
//! chunks. Each source feeds a [`StreamReassembler`], which accumulates
//! bytes in a growable [`LineBuffer`], extracts completed lines, and
//! compacts the remainder. [`StreamMux`] waits on both sources at once
//! and forwards lines the moment they complete.

mod buffer;
mod mux;
mod reassemble;

pub use buffer::LineBuffer;
pub use mux::StreamMux;
pub use reassemble::StreamReassembler;
