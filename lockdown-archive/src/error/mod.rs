/*!
 Errors that can happen when reading Lockdown data.
*/

pub mod archive;
pub mod format;
pub mod graph;
