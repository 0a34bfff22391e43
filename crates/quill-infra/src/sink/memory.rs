//! In-memory sink - keeps the rendered document instead of touching disk.

use std::sync::{PoisonError, RwLock};

use quill_core::domain::BlogPost;
use quill_core::ports::{FixtureSink, SinkError};

use crate::json::render_pretty;

/// Holds the bytes of the most recent write.
#[derive(Debug, Default)]
pub struct InMemorySink {
    contents: RwLock<Option<Vec<u8>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered bytes of the last successful write, if any.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FixtureSink for InMemorySink {
    fn write(&self, posts: &[BlogPost]) -> Result<(), SinkError> {
        let rendered = render_pretty(posts)?;
        tracing::debug!(bytes = rendered.len(), "Fixture kept in memory");

        *self
            .contents
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(rendered);
        Ok(())
    }
}
