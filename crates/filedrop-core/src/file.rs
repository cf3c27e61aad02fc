//! Metadata for a selected file.

use serde::{Deserialize, Serialize};

/// Name and byte size of a file selected for upload.
///
/// The filename doubles as the identity key when a list of descriptors
/// is rendered, so it should be unique within any one list. The
/// components do not enforce this; callers that accept duplicate
/// selections should dedupe on insert.
///
/// `size` is an unsigned byte count, so negative sizes are
/// unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name as reported by the picker or drop event.
    pub filename: String,
    /// File size in bytes.
    pub size: u64,
}

impl FileDescriptor {
    /// Create a new descriptor.
    #[must_use]
    pub fn new(filename: impl Into<String>, size: u64) -> Self {
        Self {
            filename: filename.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_fields() {
        let file = FileDescriptor::new("report.pdf", 4096);
        assert_eq!(file.filename, "report.pdf");
        assert_eq!(file.size, 4096);
    }

    #[test]
    fn equality_is_field_wise() {
        assert_eq!(
            FileDescriptor::new("a.txt", 10),
            FileDescriptor::new("a.txt", 10),
        );
        assert_ne!(
            FileDescriptor::new("a.txt", 10),
            FileDescriptor::new("a.txt", 11),
        );
        assert_ne!(
            FileDescriptor::new("a.txt", 10),
            FileDescriptor::new("b.txt", 10),
        );
    }

    #[test]
    fn serde_round_trip() {
        let file = FileDescriptor::new("photo.png", 123_456);
        let json = serde_json::to_string(&file).unwrap();
        let deserialized: FileDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(file, deserialized);
    }
}
