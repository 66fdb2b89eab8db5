/*!
 Errors that can happen when loading a Lockdown archive from disk.
*/

use std::{
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
    path::PathBuf,
};

use crate::error::{format::FormatError, graph::GraphError};

/// Errors that can happen when loading a Lockdown archive
#[derive(Debug)]
pub enum ArchiveError {
    CannotRead(IoError, PathBuf),
    Format(FormatError),
    Graph(GraphError),
}

impl Display for ArchiveError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            ArchiveError::CannotRead(why, path) => {
                write!(fmt, "could not read plist {}: {why}", path.display())
            }
            ArchiveError::Format(why) => write!(fmt, "{why}"),
            ArchiveError::Graph(why) => write!(fmt, "{why}"),
        }
    }
}

impl std::error::Error for ArchiveError {}
