//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! the pretty JSON renderer and the sinks that receive it.

pub mod json;
pub mod sink;

pub use json::render_pretty;
pub use sink::{InMemorySink, JsonFileSink};
