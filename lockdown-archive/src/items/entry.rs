/*!
 Logic and containers for a single Lockdown item.

 The main data type used to represent these items is [`Entry`].
*/

use std::time::SystemTime;

use chrono::{DateTime, Utc};
use plist::{Dictionary, Uid, Value};
use tracing::debug;

use crate::{
    archive::{resolve, resolve_key},
    error::graph::GraphError,
    items::{
        keys::{
            ACCOUNT_NAME_KEY, ARCHIVED_KEY, DATE_CREATED_KEY, DATE_MODIFIED_KEY, FAVORITE_KEY,
            ITEM_KEY_KEY, ITEM_URL_KEY, NS_TIME, SERVICE_NAME_KEY,
        },
        otpauth::{is_otpauth, synthesize_uri},
    },
    util::{
        dates::from_ns_time,
        plist::{as_bool, as_str, extract_seconds_key, invalid_type, is_null, NULL_SENTINEL},
    },
};

/// A one-time-password credential stored in Lockdown
///
/// # Internal Representation
///
/// Each item is a dictionary in the keyed archive's `$objects` array. Booleans are stored
/// inline; strings and dates are stored as `UID` references to other objects:
///
/// - `serviceNameKey` and `accountNameKey` reference strings
/// - `dateCreatedKey` references an `NSDate` dictionary whose `NS.time` holds seconds since 2001
/// - `dateModifiedKey` does the same, or references `$null` if the item was never changed
/// - `itemURLString` references either a full `otpauth://` URI or a placeholder, in which case
///   `itemKeyKey` references the raw secret and the URI is rebuilt from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The issuer of the credential
    pub service: String,
    /// The account name, may be empty
    pub login: String,
    /// When the item was added
    pub created: DateTime<Utc>,
    /// When the item was last changed, equal to `created` if it never was
    pub modified: DateTime<Utc>,
    /// A full `otpauth://` URI
    pub url: String,
    /// Whether the item is pinned as a favorite
    pub favorite: bool,
    /// Whether the item was moved to the archive
    pub archived: bool,
}

/// Where an [`Entry`]'s URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriSource {
    /// The archive stored a full `otpauth://` URI
    Passthrough,
    /// The URI was built from the raw secret
    Synthesized,
}

/// Decode the item `uid` points to.
///
/// Returns [`None`] when the item is archived and `include_archived` is not set. The
/// archived flag is read before anything else, so skipped items are never validated.
pub fn decode_entry(
    objects: &[Value],
    uid: Uid,
    include_archived: bool,
) -> Result<Option<Entry>, GraphError> {
    Ok(decode_item(objects, uid, include_archived)?.map(|(entry, _)| entry))
}

pub(crate) fn decode_item(
    objects: &[Value],
    uid: Uid,
    include_archived: bool,
) -> Result<Option<(Entry, UriSource)>, GraphError> {
    let item = item_dictionary(objects, uid)?;

    let archived = as_bool(resolve_key(objects, item, ARCHIVED_KEY)?, ARCHIVED_KEY)?;
    if archived && !include_archived {
        return Ok(None);
    }
    let favorite = as_bool(resolve_key(objects, item, FAVORITE_KEY)?, FAVORITE_KEY)?;

    let service = read_string(objects, item, SERVICE_NAME_KEY)?;
    if service.is_empty() || service == NULL_SENTINEL {
        return Err(GraphError::NullValue(SERVICE_NAME_KEY.to_string()));
    }
    let login = match read_string(objects, item, ACCOUNT_NAME_KEY)? {
        NULL_SENTINEL => "",
        login => login,
    };

    let created = read_date(objects, item, DATE_CREATED_KEY)?
        .ok_or_else(|| GraphError::NullValue(DATE_CREATED_KEY.to_string()))?;
    let modified = read_date(objects, item, DATE_MODIFIED_KEY)?.unwrap_or(created);

    let url_ref = match item.get(ITEM_URL_KEY) {
        Some(Value::Uid(url_ref)) => *url_ref,
        Some(other) => return Err(invalid_type(ITEM_URL_KEY, "uid", other)),
        None => return Err(GraphError::MissingKey(ITEM_URL_KEY.to_string())),
    };
    let stored_url = as_str(resolve(objects, url_ref)?, ITEM_URL_KEY)?;

    let (url, source) = if is_otpauth(stored_url) {
        (stored_url.to_string(), UriSource::Passthrough)
    } else {
        let item_key_ref = match item.get(ITEM_KEY_KEY) {
            Some(Value::Uid(item_key_ref)) => *item_key_ref,
            Some(other) => return Err(invalid_type(ITEM_KEY_KEY, "uid", other)),
            None => return Err(GraphError::MissingKey(ITEM_KEY_KEY.to_string())),
        };
        debug!(service, "building URI from stored secret");
        (
            synthesize_uri(service, login, objects, item_key_ref)?,
            UriSource::Synthesized,
        )
    };
    if url.is_empty() || url == NULL_SENTINEL {
        return Err(GraphError::NullValue(ITEM_URL_KEY.to_string()));
    }

    Ok(Some((
        Entry {
            service: service.to_string(),
            login: login.to_string(),
            created,
            modified,
            url,
            favorite,
            archived,
        },
        source,
    )))
}

/// Read the service name of an item without validating anything else, for error messages
pub(crate) fn service_name(objects: &[Value], uid: Uid) -> Option<String> {
    let item = item_dictionary(objects, uid).ok()?;
    resolve_key(objects, item, SERVICE_NAME_KEY)
        .ok()?
        .as_string()
        .filter(|service| *service != NULL_SENTINEL)
        .map(String::from)
}

fn item_dictionary(objects: &[Value], uid: Uid) -> Result<&Dictionary, GraphError> {
    let item = resolve(objects, uid)?;
    item.as_dictionary()
        .ok_or_else(|| invalid_type(&format!("item {}", uid.get()), "dictionary", item))
}

fn read_string<'a>(
    objects: &'a [Value],
    item: &'a Dictionary,
    key: &str,
) -> Result<&'a str, GraphError> {
    as_str(resolve_key(objects, item, key)?, key)
}

/// Read a date field, returning [`None`] if it references `$null`
fn read_date(
    objects: &[Value],
    item: &Dictionary,
    key: &str,
) -> Result<Option<DateTime<Utc>>, GraphError> {
    let value = resolve_key(objects, item, key)?;
    if is_null(value) {
        return Ok(None);
    }
    match value {
        Value::Dictionary(date) => {
            let seconds = extract_seconds_key(date, NS_TIME)?;
            from_ns_time(seconds)
                .map(Some)
                .ok_or_else(|| GraphError::InvalidTimestamp(key.to_string(), seconds))
        }
        Value::Date(date) => Ok(Some(DateTime::from(SystemTime::from(*date)))),
        other => Err(invalid_type(key, "dictionary", other)),
    }
}
