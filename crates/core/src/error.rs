// crates/core/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the counting pipeline.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The supplied root path does not exist. Reported, never raised:
    /// the driver logs it through the sink and ends the run with zero
    /// reports.
    #[error("source directory \"{}\" is not valid", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("unknown encoding \"{name}\"")]
    UnknownEncoding { name: String },

    /// A single file could not be opened or decoded. Non-fatal: the run
    /// continues with the next file.
    #[error("error while reading source file [{}]: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory enumeration failed mid-walk. Fatal to the whole run.
    #[error("directory traversal failed: {0}")]
    Walk(#[from] ignore::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;
