//! filedrop-ui: Dioxus drop-zone and file-preview components.
//!
//! Provides the [`FileArea`] and [`SingleFileArea`] components, the
//! caller-owned [`Dropzone`] controller they bind to, the optional
//! per-file [`FileAction`], and a browser helper for opening the
//! native file picker programmatically.
//!
//! The components are pure renders: the caller owns the selected-file
//! list and the dropzone controller and passes both down as props.
//! User-visible text is resolved through a [`Catalog`] taken from
//! Dioxus context, falling back to the built-in English templates when
//! none is provided.
//!
//! [`Catalog`]: filedrop_core::Catalog

pub mod action;
pub mod components;
pub mod dropzone;
pub mod layout;
pub mod picker;

pub use action::{ActionColor, ActionIcon, FileAction};
pub use components::{FileArea, SingleFileArea};
pub use dropzone::Dropzone;
pub use layout::FileAreaLayout;
pub use picker::{PickerError, open_file_picker};
