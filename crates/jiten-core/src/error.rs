use std::path::PathBuf;

/// A required base dataset could not be read or parsed. Fatal: the
/// pipeline never proceeds with partial base data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The translation root could not be enumerated, or a translation file
/// that does exist could not be parsed. A merely absent file is not an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read translation root {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in translation file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The snapshot artifact could not be written
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to write snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
