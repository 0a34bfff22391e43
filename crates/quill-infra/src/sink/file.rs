//! JSON file sink - the production output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use quill_core::domain::BlogPost;
use quill_core::ports::{FixtureSink, SinkError};

use crate::json::render_pretty;

/// Writes the collection to a single file, overwriting it.
///
/// The file handle lives only for the duration of [`FixtureSink::write`].
/// A failed write may leave a truncated file behind; nothing is cleaned up.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl FixtureSink for JsonFileSink {
    fn write(&self, posts: &[BlogPost]) -> Result<(), SinkError> {
        let rendered = render_pretty(posts)?;

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&rendered)
            .and_then(|()| writer.flush())
            .map_err(|e| self.io_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            bytes = rendered.len(),
            post_count = posts.len(),
            "Fixture file written"
        );

        Ok(())
    }
}
