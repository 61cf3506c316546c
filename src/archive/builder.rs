/*!
 Contains logic to assemble attribute records into complete keyed archives.
*/

use plist::{Dictionary, Uid, Value};

use crate::archive::{
    ARCHIVER_KEY, ARCHIVER_NAME, ARCHIVE_VERSION, CLASSES_KEY, CLASS_KEY, CLASS_NAME_KEY,
    NULL_SENTINEL, OBJECTS_KEY, ROOT_KEY, TOP_KEY, VERSION_KEY,
};

/// Kinds of attribute record an archive can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Color,
    Font,
}

impl RecordKind {
    /// Class name written to the record's class descriptor
    fn class_name(&self) -> &'static str {
        match self {
            RecordKind::Color => "NSColor",
            RecordKind::Font => "NSFont",
        }
    }

    /// Inheritance chain written to the record's class descriptor
    fn class_chain(&self) -> Vec<Value> {
        vec![
            Value::String(self.class_name().to_string()),
            Value::String("NSObject".to_string()),
        ]
    }
}

/// Assembles a single attribute record into a complete keyed archive
///
/// The object table is laid out the way the platform archiver lays it out: the
/// `$null` sentinel at index `0`, the record at index `1`, pooled strings after
/// it, and the class descriptor last.
#[derive(Debug)]
pub struct ArchiveBuilder {
    /// The kind of record under construction, naming its class descriptor
    kind: RecordKind,
    /// Fields of the record under construction
    record: Dictionary,
    /// Strings pooled in the object table, in reference order
    strings: Vec<String>,
}

impl ArchiveBuilder {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            record: Dictionary::new(),
            strings: vec![],
        }
    }

    /// Store a literal field on the record
    pub fn insert(&mut self, key: &str, value: Value) {
        self.record.insert(key.to_string(), value);
    }

    /// Pool a string in the object table and store a reference to it on the record
    pub fn insert_pooled(&mut self, key: &str, value: &str) {
        let reference = 2 + self.strings.len() as u64;
        self.strings.push(value.to_string());
        self.record
            .insert(key.to_string(), Value::Uid(Uid::new(reference)));
    }

    /// Assemble the record, its class descriptor, and the archive frame
    pub fn build(mut self) -> Value {
        let descriptor_reference = 2 + self.strings.len() as u64;
        self.record.insert(
            CLASS_KEY.to_string(),
            Value::Uid(Uid::new(descriptor_reference)),
        );

        let mut objects = vec![
            Value::String(NULL_SENTINEL.to_string()),
            Value::Dictionary(self.record),
        ];
        objects.extend(self.strings.into_iter().map(Value::String));

        let mut descriptor = Dictionary::new();
        descriptor.insert(
            CLASS_NAME_KEY.to_string(),
            Value::String(self.kind.class_name().to_string()),
        );
        descriptor.insert(CLASSES_KEY.to_string(), Value::Array(self.kind.class_chain()));
        objects.push(Value::Dictionary(descriptor));

        let mut top = Dictionary::new();
        top.insert(ROOT_KEY.to_string(), Value::Uid(Uid::new(1)));

        let mut archive = Dictionary::new();
        archive.insert(
            ARCHIVER_KEY.to_string(),
            Value::String(ARCHIVER_NAME.to_string()),
        );
        archive.insert(OBJECTS_KEY.to_string(), Value::Array(objects));
        archive.insert(TOP_KEY.to_string(), Value::Dictionary(top));
        archive.insert(
            VERSION_KEY.to_string(),
            Value::Integer(ARCHIVE_VERSION.into()),
        );
        Value::Dictionary(archive)
    }
}

#[cfg(test)]
mod tests {
    use plist::{Uid, Value};

    use crate::archive::{
        builder::{ArchiveBuilder, RecordKind},
        resolver::KeyedArchive,
    };

    #[test]
    fn can_build_archive_frame() {
        let builder = ArchiveBuilder::new(RecordKind::Color);
        let archive = builder.build().into_dictionary().unwrap();

        assert_eq!(
            archive.get("$archiver").and_then(Value::as_string),
            Some("NSKeyedArchiver")
        );
        assert_eq!(
            archive.get("$version").and_then(Value::as_unsigned_integer),
            Some(100_000)
        );
        assert_eq!(
            archive
                .get("$top")
                .and_then(Value::as_dictionary)
                .and_then(|top| top.get("root"))
                .and_then(Value::as_uid),
            Some(&Uid::new(1))
        );
    }

    #[test]
    fn can_build_object_table_layout() {
        let mut builder = ArchiveBuilder::new(RecordKind::Color);
        builder.insert("NSRGB", Value::Data(b"1 0 0".to_vec()));
        let archive = builder.build().into_dictionary().unwrap();

        let objects = archive.get("$objects").and_then(Value::as_array).unwrap();
        assert_eq!(objects.len(), 3);
        assert_eq!(objects[0].as_string(), Some("$null"));

        let record = objects[1].as_dictionary().unwrap();
        assert_eq!(record.get("$class").and_then(Value::as_uid), Some(&Uid::new(2)));

        let descriptor = objects[2].as_dictionary().unwrap();
        assert_eq!(
            descriptor.get("$classname").and_then(Value::as_string),
            Some("NSColor")
        );
        let chain = descriptor.get("$classes").and_then(Value::as_array).unwrap();
        assert_eq!(chain[0].as_string(), Some("NSColor"));
        assert_eq!(chain[1].as_string(), Some("NSObject"));
    }

    #[test]
    fn can_pool_strings_behind_record() {
        let mut builder = ArchiveBuilder::new(RecordKind::Font);
        builder.insert_pooled("NSName", "Menlo");
        builder.insert("NSSize", Value::Real(13.0));
        let archive = builder.build().into_dictionary().unwrap();

        let objects = archive.get("$objects").and_then(Value::as_array).unwrap();
        assert_eq!(objects.len(), 4);
        assert_eq!(objects[2].as_string(), Some("Menlo"));

        let record = objects[1].as_dictionary().unwrap();
        assert_eq!(record.get("NSName").and_then(Value::as_uid), Some(&Uid::new(2)));
        assert_eq!(record.get("$class").and_then(Value::as_uid), Some(&Uid::new(3)));

        let descriptor = objects[3].as_dictionary().unwrap();
        assert_eq!(
            descriptor.get("$classname").and_then(Value::as_string),
            Some("NSFont")
        );
    }

    #[test]
    fn can_pool_multiple_strings() {
        let mut builder = ArchiveBuilder::new(RecordKind::Font);
        builder.insert_pooled("NSName", "JetBrains Mono");
        builder.insert_pooled("NSFontNameAttribute", "Menlo");
        let archive = builder.build().into_dictionary().unwrap();

        let objects = archive.get("$objects").and_then(Value::as_array).unwrap();
        assert_eq!(objects.len(), 5);
        assert_eq!(objects[2].as_string(), Some("JetBrains Mono"));
        assert_eq!(objects[3].as_string(), Some("Menlo"));

        let record = objects[1].as_dictionary().unwrap();
        assert_eq!(record.get("$class").and_then(Value::as_uid), Some(&Uid::new(4)));
    }

    #[test]
    fn built_archive_resolves() {
        let mut builder = ArchiveBuilder::new(RecordKind::Font);
        builder.insert_pooled("NSName", "Menlo");
        builder.insert("NSSize", Value::Real(13.0));

        let archive = KeyedArchive::from_value(builder.build()).unwrap();
        let name = archive.record().get("NSName").unwrap();
        assert_eq!(archive.resolve(name).unwrap().as_string(), Some("Menlo"));
    }
}
