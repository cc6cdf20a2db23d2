//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Request carried no usable credentials
    #[error("Unauthorized: no user matches the supplied login secret")]
    Unauthorized,

    /// Authenticated user lacks the required band role
    #[error("Forbidden: {0}")]
    Forbidden(&'static str),

    /// Entity lookup failed
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of entity that was looked up (band, song, user).
        entity: &'static str,
        /// Identifier that failed to resolve.
        id: i32,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// File or document parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// Playlist decoding or persistence error
    #[error("Playlist error: {0}")]
    Playlist(String),

    /// Chord-sheet export error
    #[error("Export error: {0}")]
    Export(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a not-found error for the given entity kind and id
    pub const fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Playlist(e.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn not_found_formats_entity_and_id() {
        let err = Error::not_found("band", 42);
        assert_eq!(err.to_string(), "band 42 not found");
    }

    #[test]
    fn config_error_carries_hint() {
        let err = Error::config(
            "SONGBOOK_PATH is not a directory",
            "Set SONGBOOK_PATH to a directory of OpenSong files",
        );
        assert!(err.to_string().contains("SONGBOOK_PATH"));
    }
}
