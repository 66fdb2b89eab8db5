/*!
 This module defines common utilities used when reading Lockdown data.
*/

pub mod dates;
pub mod dirs;
pub mod plist;
