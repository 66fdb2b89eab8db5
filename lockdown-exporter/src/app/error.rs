/*!
Errors that can happen during the application's runtime
*/

use std::{
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
    path::PathBuf,
};

use lockdown_archive::error::{archive::ArchiveError, graph::GraphError};

/// Errors that can happen during the application's runtime
#[derive(Debug)]
pub enum RuntimeError {
    InvalidOptions(String),
    CreateError(IoError, PathBuf),
    DiskError(IoError),
    ArchiveError(ArchiveError),
    QrCodeError(String),
}

impl Display for RuntimeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            RuntimeError::InvalidOptions(why) => write!(fmt, "Invalid options!\n{why}"),
            RuntimeError::CreateError(why, path) => write!(fmt, "{why}: {path:?}"),
            RuntimeError::DiskError(why) => write!(fmt, "{why}"),
            RuntimeError::ArchiveError(why) => write!(fmt, "{why}"),
            RuntimeError::QrCodeError(why) => write!(fmt, "Unable to build QR code: {why}"),
        }
    }
}

impl From<GraphError> for RuntimeError {
    fn from(why: GraphError) -> Self {
        RuntimeError::ArchiveError(ArchiveError::Graph(why))
    }
}
