//! File handles that can be imported as a source
//!
//! A handle exposes its display name synchronously and its contents
//! through a future, mirroring a browser `File` or a path on disk.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use crate::error::{SourceError, SourceResult};

/// Boxed future returned by [`SourceFile::read_text`]
pub type ReadFuture<'a> = Pin<Box<dyn Future<Output = SourceResult<String>> + Send + 'a>>;

/// An externally supplied file that produces text or fails
pub trait SourceFile {
    /// Display name of the file
    fn name(&self) -> &str;

    /// Read the full textual contents
    fn read_text(&self) -> ReadFuture<'_>;
}

/// A file on the local filesystem
///
/// Gzip-compressed files are decoded transparently.
#[derive(Debug, Clone)]
pub struct PathFile {
    path: PathBuf,
    name: String,
}

impl PathFile {
    /// Create a handle; the name is the path's file name
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        PathFile { path, name }
    }

    /// Create a handle with an explicit display name
    pub fn with_name(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        PathFile {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Underlying path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceFile for PathFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_text(&self) -> ReadFuture<'_> {
        Box::pin(async move {
            let bytes = tokio::fs::read(&self.path)
                .await
                .map_err(|e| SourceError::read_failed(&self.name, e))?;
            xyzview_io::decode_text(&bytes).map_err(|e| SourceError::read_failed(&self.name, e))
        })
    }
}
