/*!
 Reads the preferences file that wraps Lockdown's keyed archive.

 The file is an ordinary property list. Its [`EXTENSION_ITEMS_KEY`] value holds the bytes of a
 second property list, the [`KeyedArchive`], so decoding happens in two separate stages.
*/

use std::{
    fs::File,
    io::{BufReader, Cursor},
    path::Path,
};

use plist::{Dictionary, Value};
use tracing::debug;

use crate::{
    archive::KeyedArchive,
    error::{archive::ArchiveError, format::FormatError, graph::GraphError},
    util::plist::{extract_bytes_key, invalid_type},
};

/// Key in the preferences file that holds the archived items
pub const EXTENSION_ITEMS_KEY: &str = "kLDExtensionItemsKey";

/// The decoded outer preferences file
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    contents: Dictionary,
}

impl Container {
    /// Read and decode the preferences file at `path`
    pub fn from_path(path: &Path) -> Result<Self, ArchiveError> {
        let file =
            File::open(path).map_err(|why| ArchiveError::CannotRead(why, path.to_path_buf()))?;
        let value = Value::from_reader(BufReader::new(file))
            .map_err(|why| ArchiveError::Format(FormatError::Container(why)))?;
        debug!(path = %path.display(), "decoded container");
        Self::from_value(value).map_err(ArchiveError::Graph)
    }

    /// Decode a preferences file from memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        let value = Value::from_reader(Cursor::new(bytes))
            .map_err(|why| ArchiveError::Format(FormatError::Container(why)))?;
        Self::from_value(value).map_err(ArchiveError::Graph)
    }

    /// Wrap an already decoded preferences file, which must be a dictionary
    pub fn from_value(value: Value) -> Result<Self, GraphError> {
        match value {
            Value::Dictionary(contents) => Ok(Self { contents }),
            other => Err(invalid_type("container", "dictionary", &other)),
        }
    }

    /// The raw bytes of the nested keyed archive
    pub fn archive_bytes(&self) -> Result<&[u8], GraphError> {
        extract_bytes_key(&self.contents, EXTENSION_ITEMS_KEY)
    }

    /// Decode the nested keyed archive
    pub fn archive(&self) -> Result<KeyedArchive, ArchiveError> {
        let bytes = self.archive_bytes().map_err(ArchiveError::Graph)?;
        debug!(bytes = bytes.len(), "decoding nested archive");
        KeyedArchive::from_bytes(bytes)
    }
}
