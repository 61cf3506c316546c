/*!
 Contains logic and data structures used to read and write the object graph of an
 [NSKeyedArchiver](https://developer.apple.com/documentation/foundation/nskeyedarchiver)
 property list.

 ## Overview

 A keyed archive is a property list dictionary that flattens an object graph into a
 table of objects. Fields that would point at another object instead store a `Uid`
 index into that table, and a top-level entry names the index of the root object.

 ## Features

 - Pure Rust implementation with no dependencies on Apple frameworks
 - Resolves one level of table indirection for record fields
 - Builds canonical archives that platform unarchivers accept
*/

pub mod builder;
pub mod resolver;

/// Key under which an archive names the coder that produced it
pub(crate) const ARCHIVER_KEY: &str = "$archiver";
/// Coder name this crate reads and writes
pub(crate) const ARCHIVER_NAME: &str = "NSKeyedArchiver";
/// Key under which an archive stores its object table
pub(crate) const OBJECTS_KEY: &str = "$objects";
/// Key under which an archive stores its top-level references
pub(crate) const TOP_KEY: &str = "$top";
/// Entry in the top-level dictionary that references the root object
pub(crate) const ROOT_KEY: &str = "root";
/// Key under which an archive stores its coder version
pub(crate) const VERSION_KEY: &str = "$version";
/// Coder version emitted alongside [`ARCHIVER_NAME`]
pub(crate) const ARCHIVE_VERSION: u64 = 100_000;
/// Sentinel occupying index `0` of the object table, so `Uid(0)` means `nil`
pub(crate) const NULL_SENTINEL: &str = "$null";
/// Record field that references the record's class descriptor
pub(crate) const CLASS_KEY: &str = "$class";
/// Class descriptor entry holding the class name
pub(crate) const CLASS_NAME_KEY: &str = "$classname";
/// Class descriptor entry holding the inheritance chain
pub(crate) const CLASSES_KEY: &str = "$classes";
