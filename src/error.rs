use std::path::PathBuf;

/// Errors raised while building a language model or exporting results.
#[derive(thiserror::Error, Debug)]
pub enum DetectorError {
    /// Maximum n-gram order must be at least 1.
    #[error("invalid n-gram order {0}: must be at least 1")]
    InvalidOrder(usize),
    /// Corpus directory does not exist.
    #[error("corpus directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
    /// Listing the corpus directory failed.
    #[error("failed to list corpus directory: {0}")]
    Walk(#[from] walkdir::Error),
    /// A corpus file could not be read or was not valid UTF-8.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The corpus contains no documents.
    #[error("corpus contains no documents")]
    EmptyCorpus,
    /// Reading queries or writing results failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Writing exported results failed.
    #[error("failed to export results: {0}")]
    Export(#[from] csv::Error),
}
