/*!
 Logic and containers for the `NSKeyedArchiver` object graph that holds Lockdown's items.

 ## Layout

 A keyed archive is a property list dictionary with four keys:

 - `$archiver`: the name of the archiver, normally `NSKeyedArchiver`
 - `$version`: the archive format version
 - `$objects`: a flat array of every archived object
 - `$top`: a dictionary whose `root` key references the top-level object

 Objects never nest directly. Wherever one object holds another, the archive stores a
 `UID`, which is an index into `$objects`. Index `0` is conventionally the string `$null`,
 which stands for "no object" and is different from a key that is absent.

 Lockdown's root object is an `NSArray` whose `NS.objects` key lists a `UID` for every item.
*/

pub mod container;
pub mod summary;

use std::io::Cursor;

use plist::{Dictionary, Uid, Value};
use tracing::{debug, warn};

use crate::{
    error::{archive::ArchiveError, format::FormatError, graph::GraphError},
    items::entry::{decode_item, service_name, Entry, UriSource},
    util::plist::{extract_array_key, extract_dictionary, extract_uid_key, invalid_type},
};

/// Key for the name of the archiver class
pub const ARCHIVER: &str = "$archiver";
/// Key for the archive format version
pub const VERSION: &str = "$version";
/// Key for the dictionary that references the root object
pub const TOP: &str = "$top";
/// Key in [`TOP`] for the root object
pub const ROOT: &str = "root";
/// Key for the flat object array
pub const OBJECTS: &str = "$objects";
/// Key for the members of an archived `NSArray`
pub const NS_OBJECTS: &str = "NS.objects";
/// The archiver Lockdown uses
pub const ARCHIVER_NAME: &str = "NSKeyedArchiver";

/// Look up the object a `UID` refers to.
///
/// This does not check the shape of the resolved value.
pub fn resolve(objects: &[Value], uid: Uid) -> Result<&Value, GraphError> {
    usize::try_from(uid.get())
        .ok()
        .and_then(|idx| objects.get(idx))
        .ok_or(GraphError::OutOfBounds(uid.get(), objects.len()))
}

/// Read `key` from `dict`, following one reference if the stored value is a `UID`.
///
/// Direct values are returned as they are.
pub fn resolve_key<'a>(
    objects: &'a [Value],
    dict: &'a Dictionary,
    key: &str,
) -> Result<&'a Value, GraphError> {
    match dict.get(key) {
        Some(Value::Uid(uid)) => resolve(objects, *uid),
        Some(value) => Ok(value),
        None => Err(GraphError::MissingKey(key.to_string())),
    }
}

/// A decoded keyed archive: the flat object array plus the reference to its root
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedArchive {
    /// The `$objects` array every `UID` indexes into
    objects: Vec<Value>,
    /// The `UID` stored at `$top.root`
    root: Uid,
    /// The `$archiver` name, if present
    archiver: Option<String>,
    /// The `$version` number, if present
    version: Option<u64>,
}

impl KeyedArchive {
    /// Decode a keyed archive from binary or XML property list bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        let value = Value::from_reader(Cursor::new(bytes))
            .map_err(|why| ArchiveError::Format(FormatError::Archive(why)))?;
        Self::from_value(value).map_err(ArchiveError::Graph)
    }

    /// Build a keyed archive from an already decoded property list
    pub fn from_value(value: Value) -> Result<Self, GraphError> {
        let mut archive = match value {
            Value::Dictionary(archive) => archive,
            other => return Err(invalid_type("archive", "dictionary", &other)),
        };

        let archiver = archive
            .get(ARCHIVER)
            .and_then(Value::as_string)
            .map(String::from);
        let version = archive.get(VERSION).and_then(Value::as_unsigned_integer);
        let root = extract_uid_key(extract_dictionary(&archive, TOP)?, ROOT)?;

        let objects = match archive.remove(OBJECTS) {
            Some(Value::Array(objects)) => objects,
            Some(other) => return Err(invalid_type(OBJECTS, "array", &other)),
            None => return Err(GraphError::MissingKey(OBJECTS.to_string())),
        };

        match archiver.as_deref() {
            Some(ARCHIVER_NAME) => {}
            Some(other) => warn!(archiver = other, "unexpected archiver"),
            None => warn!("archive does not name its archiver"),
        }
        debug!(
            objects = objects.len(),
            root = root.get(),
            version,
            "decoded keyed archive"
        );

        Ok(Self {
            objects,
            root,
            archiver,
            version,
        })
    }

    /// The flat object array
    pub fn objects(&self) -> &[Value] {
        &self.objects
    }

    /// The name stored in `$archiver`
    pub fn archiver(&self) -> Option<&str> {
        self.archiver.as_deref()
    }

    /// The number stored in `$version`
    pub fn version(&self) -> Option<u64> {
        self.version
    }

    /// Look up the object a `UID` refers to in this archive
    pub fn resolve(&self, uid: Uid) -> Result<&Value, GraphError> {
        resolve(&self.objects, uid)
    }

    /// Resolve the root descriptor, which must be a dictionary
    pub fn root(&self) -> Result<&Dictionary, GraphError> {
        let root = self.resolve(self.root)?;
        root.as_dictionary()
            .ok_or_else(|| invalid_type(ROOT, "dictionary", root))
    }

    /// Get the `UID` of every item listed in the root's `NS.objects`
    pub fn members(&self) -> Result<Vec<Uid>, GraphError> {
        extract_array_key(self.root()?, NS_OBJECTS)?
            .iter()
            .enumerate()
            .map(|(idx, member)| match member {
                Value::Uid(uid) => Ok(*uid),
                _ => Err(GraphError::InvalidTypeIndex(idx, "uid".to_string())),
            })
            .collect()
    }

    /// Decode every item into an [`Entry`], in archive order.
    ///
    /// Archived items are left out unless `include_archived` is set. Any item that fails
    /// to decode fails the whole call; no partial list is returned.
    ///
    /// # Example:
    ///
    /// ```no_run
    /// use lockdown_archive::archive::container::Container;
    ///
    /// let archive = Container::from_path("Lockdown.plist".as_ref())
    ///     .and_then(|container| container.archive())
    ///     .unwrap();
    /// let entries = archive.entries(false).unwrap();
    /// ```
    pub fn entries(&self, include_archived: bool) -> Result<Vec<Entry>, GraphError> {
        Ok(self
            .decode_members(include_archived)?
            .into_iter()
            .map(|(entry, _)| entry)
            .collect())
    }

    /// Decode every member, keeping track of where each URL came from
    pub(crate) fn decode_members(
        &self,
        include_archived: bool,
    ) -> Result<Vec<(Entry, UriSource)>, GraphError> {
        let members = self.members()?;
        let mut decoded = Vec::with_capacity(members.len());

        for (idx, uid) in members.into_iter().enumerate() {
            match decode_item(&self.objects, uid, include_archived) {
                Ok(Some(item)) => decoded.push(item),
                Ok(None) => debug!(item = idx, "skipping archived item"),
                Err(why) => {
                    return Err(GraphError::InvalidEntry(
                        idx,
                        service_name(&self.objects, uid),
                        Box::new(why),
                    ))
                }
            }
        }

        Ok(decoded)
    }
}
