//! Message catalog implementing the translation boundary.
//!
//! Every user-visible string in the components is looked up here by a
//! [`MessageKey`] rather than hard-coded, so a host application can
//! ship translations without touching the components. The default
//! catalog carries the English templates; overrides are loaded from a
//! JSON object mapping message keys to replacement templates.
//!
//! Size templates contain a `{size}` placeholder that is substituted
//! with the formatted numeric value, so translations are free to move
//! the number relative to the unit.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::format::{FormattedSize, SizeUnit};

/// Key identifying one translatable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    /// Drop-zone prompt when multiple files may be dropped.
    DragFiles,
    /// Drop-zone prompt for the single-file variant.
    DragFile,
    /// Divider between the drag prompt and the picker button.
    Or,
    /// Label of the manual file-picker button.
    ChooseFromComputer,
    /// Size template for raw bytes; `{size}` is the integer count.
    SizeBytes,
    /// Size template for kilobytes; `{size}` is a two-decimal value.
    SizeKilobytes,
    /// Size template for megabytes; `{size}` is a two-decimal value.
    SizeMegabytes,
}

impl MessageKey {
    /// Built-in English template for the key.
    #[must_use]
    pub const fn english(self) -> &'static str {
        match self {
            Self::DragFiles => "Drag file(s) here",
            Self::DragFile => "Drag file here",
            Self::Or => "Or",
            Self::ChooseFromComputer => "Choose from your computer",
            Self::SizeBytes => "{size} bytes",
            Self::SizeKilobytes => "{size} kB",
            Self::SizeMegabytes => "{size} MB",
        }
    }
}

/// Errors that can occur while loading catalog overrides.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The override document was not a valid JSON object of known keys.
    #[error("malformed catalog JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Table of message templates with English defaults.
///
/// Cheap to clone and compare, so it can live in Dioxus context and
/// participate in props diffing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    overrides: HashMap<MessageKey, String>,
}

impl Catalog {
    /// Load override templates from a JSON object, e.g.
    /// `{"drag_files": "Fichiers ici", "size_bytes": "{size} octets"}`.
    ///
    /// Keys absent from the document keep their English defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when the document is not a
    /// JSON object or contains an unknown key.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let overrides: HashMap<MessageKey, String> = serde_json::from_str(json)?;
        Ok(Self { overrides })
    }

    /// Template for a key: the override when present, else English.
    #[must_use]
    pub fn template(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map_or_else(|| key.english(), String::as_str)
    }

    /// Final text for a parameterless message.
    #[must_use]
    pub fn text(&self, key: MessageKey) -> String {
        self.template(key).to_owned()
    }

    /// Final text for a formatted size, substituting `{size}` into the
    /// unit's template.
    #[must_use]
    pub fn size_text(&self, size: &FormattedSize) -> String {
        let key = match size.unit {
            SizeUnit::Bytes => MessageKey::SizeBytes,
            SizeUnit::Kilobytes => MessageKey::SizeKilobytes,
            SizeUnit::Megabytes => MessageKey::SizeMegabytes,
        };
        self.template(key).replace("{size}", &size.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::human_readable_bytes;

    #[test]
    fn default_catalog_uses_english_templates() {
        let catalog = Catalog::default();
        assert_eq!(catalog.text(MessageKey::DragFiles), "Drag file(s) here");
        assert_eq!(catalog.text(MessageKey::DragFile), "Drag file here");
        assert_eq!(catalog.text(MessageKey::Or), "Or");
        assert_eq!(
            catalog.text(MessageKey::ChooseFromComputer),
            "Choose from your computer",
        );
    }

    #[test]
    fn size_text_substitutes_value_per_unit() {
        let catalog = Catalog::default();
        assert_eq!(catalog.size_text(&human_readable_bytes(999)), "999 bytes");
        assert_eq!(catalog.size_text(&human_readable_bytes(1000)), "1.00 kB");
        assert_eq!(
            catalog.size_text(&human_readable_bytes(1_000_000)),
            "1.00 MB",
        );
    }

    #[test]
    fn overrides_replace_only_present_keys() {
        let catalog = Catalog::from_json(
            r#"{"drag_files": "Dateien hierher ziehen", "size_bytes": "{size} Byte"}"#,
        )
        .unwrap();
        assert_eq!(
            catalog.text(MessageKey::DragFiles),
            "Dateien hierher ziehen",
        );
        assert_eq!(catalog.size_text(&human_readable_bytes(42)), "42 Byte");
        // Untouched keys keep their defaults.
        assert_eq!(catalog.text(MessageKey::Or), "Or");
        assert_eq!(catalog.size_text(&human_readable_bytes(2000)), "2.00 kB");
    }

    #[test]
    fn empty_object_is_a_valid_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Malformed(_)),
        ));
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert!(matches!(
            Catalog::from_json(r#"{"no_such_key": "x"}"#),
            Err(CatalogError::Malformed(_)),
        ));
    }
}
