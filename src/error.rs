//! Error handling for traffic incident analysis.
//!
//! Loader failures (`SourceNotFound`, `EmptySource`, `MalformedSource`,
//! `UnknownFailure`) are fatal and abort the run before cleaning starts.
//! `DegenerateInput` is the only non-fatal variant: it reports that no
//! usable records survived cleaning so downstream stages can skip work.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Source contains no data rows: {path}")]
    EmptySource { path: PathBuf },

    #[error("Malformed source {path}{}: {reason}", line_suffix(.line))]
    MalformedSource {
        path: PathBuf,
        line: Option<u64>,
        reason: String,
    },

    #[error("No usable records reached the {stage} stage")]
    DegenerateInput { stage: &'static str },

    #[error("Failed to load {path}: {message}")]
    UnknownFailure {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to write report output {path}: {message}")]
    Output { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

impl Error {
    /// Create a source not found error
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create an empty source error
    pub fn empty_source(path: impl Into<PathBuf>) -> Self {
        Self::EmptySource { path: path.into() }
    }

    /// Create a malformed source error, optionally pinned to a 1-based line
    pub fn malformed_source(
        path: impl Into<PathBuf>,
        line: Option<u64>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedSource {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create a degenerate input signal for the named stage
    pub fn degenerate_input(stage: &'static str) -> Self {
        Self::DegenerateInput { stage }
    }

    /// Create an unknown load failure with an optional underlying cause
    pub fn unknown_failure(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::UnknownFailure {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report output error
    pub fn output(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error must halt the pipeline.
    ///
    /// Only `DegenerateInput` is recoverable; everything else aborts the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::DegenerateInput { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_degenerate_input_is_recoverable() {
        assert!(!Error::degenerate_input("aggregation").is_fatal());

        assert!(Error::source_not_found("a.csv").is_fatal());
        assert!(Error::empty_source("a.csv").is_fatal());
        assert!(Error::malformed_source("a.csv", Some(3), "bad row").is_fatal());
        assert!(Error::unknown_failure("a.csv", "boom", None).is_fatal());
        assert!(Error::configuration("bad").is_fatal());
    }

    #[test]
    fn test_malformed_source_message_includes_line() {
        let error = Error::malformed_source("data.csv", Some(7), "too many fields");
        assert_eq!(
            error.to_string(),
            "Malformed source data.csv (line 7): too many fields"
        );

        let error = Error::malformed_source("data.csv", None, "missing columns");
        assert_eq!(error.to_string(), "Malformed source data.csv: missing columns");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io { .. }));
    }
}
