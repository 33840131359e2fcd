use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SOURCE_UNAVAILABLE: i32 = -1;
pub const EXIT_EMPTY_SOURCE: i32 = -2;
pub const EXIT_USAGE: i32 = -3;
pub const EXIT_CLIPBOARD_UNAVAILABLE: i32 = -4;

/// Every way a run can fail. Each variant maps to exactly one exit code.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("{0}")]
    Usage(String),

    #[error("Quote file '{}' is not available: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Quote file '{}' is empty.", path.display())]
    EmptySource { path: PathBuf },

    #[error("Cannot select a quote from an empty collection.")]
    EmptyCollection,

    #[error("Could not publish quote to the clipboard: {0}")]
    ClipboardUnavailable(String),
}

impl QuoteError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            Self::SourceUnavailable { .. } => EXIT_SOURCE_UNAVAILABLE,
            Self::EmptySource { .. } | Self::EmptyCollection => EXIT_EMPTY_SOURCE,
            Self::ClipboardUnavailable(_) => EXIT_CLIPBOARD_UNAVAILABLE,
        }
    }
}

pub type Result<T, E = QuoteError> = std::result::Result<T, E>;
