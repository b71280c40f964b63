use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed storage data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid salary range: min {min} is greater than max {max}")]
    InvalidSalaryRange { min: u64, max: u64 },

    #[error("Invalid page: pages are numbered from 1")]
    InvalidPage,

    #[error("Invalid page size: must be at least 1")]
    InvalidPageSize,

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown job type: {0}")]
    UnknownJobType(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
