//! filedrop-core: pure logic shared by the filedrop UI components.
//!
//! Holds the file descriptor type, decimal byte-size formatting, and
//! the message catalog that implements the translation boundary. No
//! browser APIs; everything here is testable on the native target.

pub mod catalog;
pub mod file;
pub mod format;

pub use catalog::{Catalog, CatalogError, MessageKey};
pub use file::FileDescriptor;
pub use format::{FormattedSize, SizeUnit, human_readable_bytes};
