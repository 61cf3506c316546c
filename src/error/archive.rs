/*!
 Errors that can happen when resolving the object graph of a keyed archive.
*/

use std::fmt::{Display, Formatter, Result};

/// Errors that can happen when resolving the object graph of a keyed archive
#[derive(Debug)]
pub enum ArchiveError {
    InvalidPlist(plist::Error),
    MalformedArchive(&'static str),
    DanglingReference(u64, usize),
}

impl Display for ArchiveError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            ArchiveError::InvalidPlist(why) => {
                write!(fmt, "Unable to convert property list payload: {why}")
            }
            ArchiveError::MalformedArchive(why) => write!(fmt, "Malformed keyed archive: {why}"),
            ArchiveError::DanglingReference(idx, len) => {
                write!(fmt, "Reference {idx:x} is outside of object table range {len:x}!")
            }
        }
    }
}
