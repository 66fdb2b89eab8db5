/*!
 Errors that can happen when decoding property list bytes.
*/

use std::fmt::{Display, Formatter, Result};

/// Errors that can happen when decoding one of the two property list layers
#[derive(Debug)]
pub enum FormatError {
    /// The outer preferences file is not a valid property list
    Container(plist::Error),
    /// The nested keyed archive blob is not a valid property list
    Archive(plist::Error),
}

impl Display for FormatError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            FormatError::Container(why) => write!(fmt, "could not decode plist: {why}"),
            FormatError::Archive(why) => write!(fmt, "could not decode nested plist: {why}"),
        }
    }
}

impl std::error::Error for FormatError {}
