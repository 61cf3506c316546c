#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod archive;
pub mod codec;
pub mod error;
pub mod records;
pub mod util;
