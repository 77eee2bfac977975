use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures while reading the mortality source. Nothing downstream can run without
/// a dataset, so callers should abort startup on any of these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("mortality source not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to open mortality source {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unparsable mortality source {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: deaths must be a finite, non-negative number (got {value})")]
    InvalidDeaths { line: u64, value: f64 },

    #[error("mortality source {} has no data rows", path.display())]
    Empty { path: PathBuf },
}

/// A single dashboard view could not be produced for the current filters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("No country-level data available for the selected filters.")]
    NoCountryData,
}
