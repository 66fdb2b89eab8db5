#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod archive;
pub mod error;
pub mod items;
pub mod util;

#[cfg(test)]
pub(crate) mod test_utils;
