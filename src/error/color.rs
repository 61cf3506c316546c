/*!
 Errors that can happen when decoding a color attribute record.
*/

use std::fmt::{Display, Formatter, Result};

use crate::error::archive::ArchiveError;

/// Errors that can happen when decoding a color attribute record
#[derive(Debug)]
pub enum ColorError {
    Archive(ArchiveError),
    UnrecognizedEncoding,
    InvalidComponents(String),
}

impl Display for ColorError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            ColorError::Archive(why) => write!(fmt, "Unable to resolve color record: {why}"),
            ColorError::UnrecognizedEncoding => {
                write!(fmt, "Record does not match any known color encoding!")
            }
            ColorError::InvalidComponents(why) => {
                write!(fmt, "Failed to parse color components: {why}")
            }
        }
    }
}
