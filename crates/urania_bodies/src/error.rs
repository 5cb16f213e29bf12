//! Error types for lunar and planetary computations.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use urania_time::TimeError;

/// Errors from series loading, configuration or date handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BodyError {
    /// A date computation failed.
    Time(TimeError),
    /// A series file held something other than numeric triples.
    SeriesParse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    /// No order of a required coordinate series is available.
    MissingSeries { planet: &'static str, axis: char },
    /// I/O error.
    Io(String),
    /// Configuration rejected by `validate()`.
    InvalidConfig(&'static str),
}

impl Display for BodyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::SeriesParse {
                path,
                line,
                message,
            } => write!(f, "{}:{line}: {message}", path.display()),
            Self::MissingSeries { planet, axis } => {
                write!(f, "no series for {planet} coordinate {axis}")
            }
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for BodyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for BodyError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<std::io::Error> for BodyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
