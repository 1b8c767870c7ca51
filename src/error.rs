//! Central error type.

use core::fmt::{self, Display};
use std::io;
use std::path::PathBuf;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    /// The input file does not exist.
    NotFound(PathBuf),
    /// The input already contains the marker line.
    AlreadyProcessed(PathBuf),
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::AlreadyProcessed(path) => write!(f, "Already processed: {}", path.display()),
            Self::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
