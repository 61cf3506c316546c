/*!
 Contains logic to decode and encode the font attribute records carried by
 keyed archives.

 Font records have been written with two generations of field names. The
 decoder reads both, letting the newer generation win when a record carries
 each; the encoder always writes the older generation, which every known
 consumer parses.
*/

use plist::{Dictionary, Value};

use crate::{
    archive::{
        builder::{ArchiveBuilder, RecordKind},
        resolver::{resolve_field, KeyedArchive},
    },
    error::{archive::ArchiveError, font::FontError},
    util::plist::as_number,
};

/// Record field holding the family name in older archives
const NAME_KEY: &str = "NSName";
/// Record field holding the point size in older archives
const SIZE_KEY: &str = "NSSize";
/// Record field holding the family name in newer descriptor archives
const NAME_ATTRIBUTE_KEY: &str = "NSFontNameAttribute";
/// Record field holding the point size in newer descriptor archives
const SIZE_ATTRIBUTE_KEY: &str = "NSFontSizeAttribute";
/// Record field holding the font trait flags
const FLAGS_KEY: &str = "NSfFlags";
/// Trait flags written on encode, marking a fixed pitch font
const FIXED_PITCH_FLAGS: u8 = 16;

/// Field-name generations in the order they appeared, oldest first
const GENERATIONS: [(&str, &str); 2] = [
    (NAME_KEY, SIZE_KEY),
    (NAME_ATTRIBUTE_KEY, SIZE_ATTRIBUTE_KEY),
];

/// A font attribute as a family name and point size
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
}

impl Font {
    pub fn new(family: String, size: f64) -> Self {
        Self { family, size }
    }

    /// Decode a font from a complete archive payload
    pub fn from_payload(payload: &[u8]) -> Result<Self, FontError> {
        let archive = KeyedArchive::from_payload(payload).map_err(FontError::Archive)?;
        Self::from_record(archive.record(), archive.objects())
    }

    /// Decode a font from a resolved attribute record
    ///
    /// Generations are read oldest first, and a field the newer generation
    /// supplies overwrites the older generation's value. The record must yield
    /// a non-empty family and a positive size between them.
    pub fn from_record(record: &Dictionary, objects: &[Value]) -> Result<Self, FontError> {
        let mut family = None;
        let mut size = None;

        for (name_key, size_key) in GENERATIONS {
            if let Some(found) = family_field(record, objects, name_key)? {
                family = Some(found.to_string());
            }
            if let Some(found) = size_field(record, objects, size_key)? {
                size = Some(found);
            }
        }

        match (family, size) {
            (Some(family), Some(size)) if !family.is_empty() => {
                if size > 0.0 && size.is_finite() {
                    Ok(Self { family, size })
                } else {
                    Err(FontError::InvalidSize(size))
                }
            }
            _ => Err(FontError::IncompleteRecord),
        }
    }

    /// Encode the font as a complete keyed archive value tree
    ///
    /// Always emits the older field generation, with the family pooled behind
    /// a reference and the fixed pitch trait flags set.
    pub fn to_archive(&self) -> Value {
        let mut builder = ArchiveBuilder::new(RecordKind::Font);
        builder.insert_pooled(NAME_KEY, &self.family);
        builder.insert(SIZE_KEY, Value::Real(self.size));
        builder.insert(FLAGS_KEY, Value::Integer(FIXED_PITCH_FLAGS.into()));
        builder.build()
    }

    /// Encode the font as binary property list bytes
    pub fn to_payload(&self) -> Result<Vec<u8>, ArchiveError> {
        let mut payload = vec![];
        self.to_archive()
            .to_writer_binary(&mut payload)
            .map_err(ArchiveError::InvalidPlist)?;
        Ok(payload)
    }
}

/// Read a family name field, resolving one reference level
///
/// A present field that resolves to a non-string is treated as absent, so it
/// never overwrites a name found in an earlier generation.
fn family_field<'a>(
    record: &'a Dictionary,
    objects: &'a [Value],
    key: &str,
) -> Result<Option<&'a str>, FontError> {
    match record.get(key) {
        Some(field) => Ok(resolve_field(objects, field)
            .map_err(FontError::Archive)?
            .as_string()),
        None => Ok(None),
    }
}

/// Read a point size field, resolving one reference level
///
/// A present field that resolves to a non-number is treated as absent.
fn size_field(
    record: &Dictionary,
    objects: &[Value],
    key: &str,
) -> Result<Option<f64>, FontError> {
    match record.get(key) {
        Some(field) => Ok(as_number(
            resolve_field(objects, field).map_err(FontError::Archive)?,
        )),
        None => Ok(None),
    }
}
