//! Error types for ankidown-engine.
//!
//! An export fails for one of two reasons:
//!
//! 1. **Client errors**: AnkiConnect could not be reached or reported an
//!    error, wrapped from [`ankidown::Error`]
//! 2. **I/O errors**: a directory or file under the output root could not be
//!    written
//!
//! There is no partial recovery; the first error ends the run.
//!
//! # Example
//!
//! ```no_run
//! use ankidown_engine::{Engine, Error, ExportOptions};
//!
//! # async fn example() {
//! let engine = Engine::new();
//!
//! match engine.markdown(ExportOptions::default()).run().await {
//!     Ok(report) => println!("Wrote {} files", report.file_count()),
//!     Err(Error::Client(ankidown::Error::ConnectionRefused)) => {
//!         eprintln!("Is Anki running?");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use std::fmt;
use std::path::PathBuf;

/// Result type for ankidown-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during an export.
#[derive(Debug)]
pub enum Error {
    /// An error from the underlying ankidown client.
    Client(ankidown::Error),

    /// Creating a directory or writing a file failed.
    Io {
        /// The path being created or written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Client(e) => Some(e),
            Error::Io { source, .. } => Some(source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Client(e) => write!(f, "{}", e),
            Error::Io { path, source } => {
                write!(f, "I/O error at {}: {}", path.display(), source)
            }
        }
    }
}

impl From<ankidown::Error> for Error {
    fn from(err: ankidown::Error) -> Self {
        Error::Client(err)
    }
}
