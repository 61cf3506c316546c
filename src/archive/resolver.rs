/*!
 Contains logic to locate the root record of a keyed archive and resolve
 references into its object table.
*/

use std::io::Cursor;

use plist::{Dictionary, Value};

use crate::{
    archive::{ARCHIVER_KEY, ARCHIVER_NAME, OBJECTS_KEY, ROOT_KEY, TOP_KEY},
    error::archive::ArchiveError,
};

/// A validated keyed archive: the object table plus the location of the root record
#[derive(Debug)]
pub struct KeyedArchive {
    /// The archive's object table, with the `$null` sentinel at index `0`
    objects: Vec<Value>,
    /// Index of the root record in the object table
    root: usize,
}

impl KeyedArchive {
    /// Parse a binary property list payload into a validated archive
    ///
    /// Archives only exist as binary plists: the XML plist dialect has no
    /// representation for `Uid` references, so converted payloads fail framing
    /// validation.
    pub fn from_payload(payload: &[u8]) -> Result<Self, ArchiveError> {
        let value =
            Value::from_reader(Cursor::new(payload)).map_err(ArchiveError::InvalidPlist)?;
        Self::from_value(value)
    }

    /// Validate an already-parsed property list as a keyed archive
    ///
    /// The payload must carry the `NSKeyedArchiver` marker, an object table, and a
    /// top-level reference to a record in that table.
    pub fn from_value(value: Value) -> Result<Self, ArchiveError> {
        let mut archive = value
            .into_dictionary()
            .ok_or(ArchiveError::MalformedArchive("payload is not a dictionary"))?;

        if archive.get(ARCHIVER_KEY).and_then(Value::as_string) != Some(ARCHIVER_NAME) {
            return Err(ArchiveError::MalformedArchive(
                "missing NSKeyedArchiver marker",
            ));
        }

        let reference = archive
            .get(TOP_KEY)
            .and_then(Value::as_dictionary)
            .and_then(|top| top.get(ROOT_KEY))
            .and_then(Value::as_uid)
            .ok_or(ArchiveError::MalformedArchive(
                "missing root object reference",
            ))?
            .get();

        let objects = archive
            .remove(OBJECTS_KEY)
            .and_then(Value::into_array)
            .ok_or(ArchiveError::MalformedArchive("missing object table"))?;

        let root = usize::try_from(reference)
            .ok()
            .filter(|idx| *idx < objects.len())
            .ok_or(ArchiveError::MalformedArchive(
                "root reference is outside the object table",
            ))?;

        match objects.get(root) {
            Some(Value::Dictionary(_)) => Ok(Self { objects, root }),
            _ => Err(ArchiveError::MalformedArchive("root object is not a record")),
        }
    }

    /// The root attribute record the archive's top-level reference points at
    pub fn record(&self) -> &Dictionary {
        match &self.objects[self.root] {
            Value::Dictionary(record) => record,
            _ => unreachable!(), // Validated during construction
        }
    }

    /// The archive's object table
    pub fn objects(&self) -> &[Value] {
        &self.objects
    }

    /// Resolve one level of indirection for a field of the root record
    pub fn resolve<'a>(&'a self, value: &'a Value) -> Result<&'a Value, ArchiveError> {
        resolve_field(&self.objects, value)
    }
}

/// Resolve one level of indirection against an archive's object table
///
/// Record fields store either a literal value or a `Uid` index of a literal in the
/// object table. Literals pass through untouched; references are looked up once and
/// never followed further.
pub fn resolve_field<'a>(
    objects: &'a [Value],
    value: &'a Value,
) -> Result<&'a Value, ArchiveError> {
    match value {
        Value::Uid(reference) => usize::try_from(reference.get())
            .ok()
            .and_then(|idx| objects.get(idx))
            .ok_or(ArchiveError::DanglingReference(
                reference.get(),
                objects.len(),
            )),
        literal => Ok(literal),
    }
}
