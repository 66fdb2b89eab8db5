/*!
 Errors that can happen when walking the object graph of a keyed archive.
*/

use std::fmt::{Display, Formatter, Result};

/// Errors that can happen when resolving references or reading typed fields from a keyed archive
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A `UID` points outside of the `$objects` array: `(index, length)`
    OutOfBounds(u64, usize),
    /// A required key is not present
    MissingKey(String),
    /// A value has the wrong shape: `(field, expected, found)`
    InvalidType(String, String, String),
    /// An array element has the wrong shape: `(index, expected)`
    InvalidTypeIndex(usize, String),
    /// A required value is empty or the `$null` sentinel
    NullValue(String),
    /// A `NS.time` value that does not fit in a date: `(field, value)`
    InvalidTimestamp(String, f64),
    /// A member of the root list failed to decode: `(position, service name if readable, cause)`
    InvalidEntry(usize, Option<String>, Box<GraphError>),
}

impl Display for GraphError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            GraphError::OutOfBounds(idx, len) => {
                write!(fmt, "Reference {idx} is outside of $objects with length {len}!")
            }
            GraphError::MissingKey(key) => write!(fmt, "Missing required key {key}"),
            GraphError::InvalidType(field, expected, found) => {
                write!(fmt, "Invalid type for {field}: expected {expected}, found {found}")
            }
            GraphError::InvalidTypeIndex(idx, expected) => {
                write!(fmt, "Invalid type at index {idx}: expected {expected}")
            }
            GraphError::NullValue(field) => write!(fmt, "{field} is empty or $null"),
            GraphError::InvalidTimestamp(field, value) => {
                write!(fmt, "{field} holds an invalid timestamp: {value}")
            }
            GraphError::InvalidEntry(idx, Some(service), why) => {
                write!(fmt, "Failed to decode item {idx} ({service}): {why}")
            }
            GraphError::InvalidEntry(idx, None, why) => {
                write!(fmt, "Failed to decode item {idx}: {why}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use crate::error::graph::GraphError;

    #[test]
    fn can_display_nested_entry_error() {
        let error = GraphError::InvalidEntry(
            2,
            Some("Example".to_string()),
            Box::new(GraphError::MissingKey("itemURLString".to_string())),
        );
        assert_eq!(
            error.to_string(),
            "Failed to decode item 2 (Example): Missing required key itemURLString"
        );
    }

    #[test]
    fn can_display_out_of_bounds() {
        let error = GraphError::OutOfBounds(12, 4);
        assert_eq!(
            error.to_string(),
            "Reference 12 is outside of $objects with length 4!"
        );
    }
}
