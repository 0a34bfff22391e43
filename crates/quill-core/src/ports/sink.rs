use std::path::PathBuf;

use crate::domain::BlogPost;

/// Fixture sink - destination for a generated collection (file, memory).
pub trait FixtureSink {
    /// Write the whole collection, replacing anything written before.
    fn write(&self, posts: &[BlogPost]) -> Result<(), SinkError>;
}

/// Sink operation errors.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
