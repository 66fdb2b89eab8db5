use std::io::{BufWriter, Write};

use lockdown_archive::items::entry::Entry;

use crate::app::{error::RuntimeError, runtime::Config};

/// Defines behavior for writing decoded entries to the export destination
pub trait Exporter<'a> {
    /// Create a new exporter with a reference to the runtime state
    fn new(config: &'a Config) -> Self;
    /// Write every entry, in order, as a single document
    fn export(&mut self, entries: &[Entry]) -> Result<(), RuntimeError>;
}

/// Defines behavior for formatting entries to the desired output format
pub(super) trait Writer<T> {
    /// Format a single entry
    fn format_entry(&self, entry: &Entry) -> Result<T, RuntimeError>;
    fn write_to_file(file: &mut BufWriter<Box<dyn Write>>, text: &str) -> Result<(), RuntimeError> {
        file.write_all(text.as_bytes())
            .map_err(RuntimeError::DiskError)
    }
    /// Open the destination and write a fully rendered document to it.
    ///
    /// The destination is only opened here, so a document that fails to render never
    /// truncates an existing export.
    fn write_document(config: &Config, document: &str) -> Result<(), RuntimeError> {
        let mut file = BufWriter::new(config.output()?);
        Self::write_to_file(&mut file, document)?;
        file.flush().map_err(RuntimeError::DiskError)
    }
}
