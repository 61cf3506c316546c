/*!
 Errors that can happen when decoding a font attribute record.
*/

use std::fmt::{Display, Formatter, Result};

use crate::error::archive::ArchiveError;

/// Errors that can happen when decoding a font attribute record
#[derive(Debug)]
pub enum FontError {
    Archive(ArchiveError),
    IncompleteRecord,
    InvalidSize(f64),
}

impl Display for FontError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            FontError::Archive(why) => write!(fmt, "Unable to resolve font record: {why}"),
            FontError::IncompleteRecord => {
                write!(fmt, "Record is missing a font name or point size!")
            }
            FontError::InvalidSize(size) => write!(fmt, "Point size {size} is not valid!"),
        }
    }
}
