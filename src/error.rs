use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by load operations.
///
/// Per-row problems are not errors: they become [`crate::loader::RowSkip`] diagnostics
/// and loading continues. Only a source that cannot be read at all fails a load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error while reading from an already-open source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The source at `path` could not be opened or read.
    ///
    /// Fatal to the one load call that produced it; the caller decides whether to
    /// report and stop or retry with a different path.
    #[error("source unavailable: {}: {cause}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}
