/*!
 Diagnostic counts for a [`KeyedArchive`].
*/

use crate::{archive::KeyedArchive, error::graph::GraphError, items::entry::UriSource};

/// Counts describing the items stored in an archive
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Size of the `$objects` array
    pub objects: usize,
    /// Number of items referenced by the root object
    pub items: usize,
    /// Items moved to the archive
    pub archived: usize,
    /// Items pinned as favorites
    pub favorites: usize,
    /// Items that stored a full `otpauth://` URI
    pub passthrough: usize,
    /// Items whose URI was built from a raw secret
    pub synthesized: usize,
}

impl KeyedArchive {
    /// Decode every item, archived ones included, and count what was found.
    ///
    /// This fails on the same malformed items [`KeyedArchive::entries`] would.
    pub fn summarize(&self) -> Result<ArchiveSummary, GraphError> {
        let mut summary = ArchiveSummary {
            objects: self.objects().len(),
            ..Default::default()
        };

        for (entry, source) in self.decode_members(true)? {
            summary.items += 1;
            if entry.archived {
                summary.archived += 1;
            }
            if entry.favorite {
                summary.favorites += 1;
            }
            match source {
                UriSource::Passthrough => summary.passthrough += 1,
                UriSource::Synthesized => summary.synthesized += 1,
            }
        }

        Ok(summary)
    }
}
