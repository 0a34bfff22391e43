//! Fixture sinks - the output file and an in-memory fallback.

mod file;
mod memory;

pub use file::JsonFileSink;
pub use memory::InMemorySink;

#[cfg(test)]
mod tests;
