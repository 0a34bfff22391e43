//! Ports - trait definitions for where generated fixtures go.
//! Infrastructure provides the implementations.

mod sink;

pub use sink::{FixtureSink, SinkError};
