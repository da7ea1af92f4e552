//! Child process launching with both output streams piped.

mod spawn;

pub use spawn::{spawn_child, ChildStreams};
