/*!
 This module contains logic to decode Lockdown items from a [`KeyedArchive`](crate::archive::KeyedArchive).
*/

pub mod entry;
pub mod keys;
pub mod otpauth;
