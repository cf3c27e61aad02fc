//! Caller-owned drag-and-drop controller.

use dioxus::prelude::*;

/// Capability set a caller supplies to bind a [`FileArea`] to its own
/// drag-and-drop handling.
///
/// The components read this per render and never mutate it: drag
/// detection, file reading, and the picker dialog all live with the
/// caller. The drag handlers bind to the drop-target region, the
/// change handler and input attributes bind to the hidden file input,
/// and `on_open_picker` backs the "choose from your computer" button
/// (typically implemented with [`crate::picker::open_file_picker`] and
/// `input_id`).
///
/// [`FileArea`]: crate::components::FileArea
#[derive(Clone, PartialEq)]
pub struct Dropzone {
    /// Whether a drag is currently over the drop target. Drives the
    /// full-width prompt layout and hides the picker button.
    pub is_drag_active: bool,
    /// Fired on `dragover` of the drop-target region.
    pub on_drag_over: EventHandler<DragEvent>,
    /// Fired on `dragleave` of the drop-target region.
    pub on_drag_leave: EventHandler<DragEvent>,
    /// Fired on `drop` of the drop-target region.
    pub on_drop: EventHandler<DragEvent>,
    /// Fired when files are chosen through the hidden input.
    pub on_input_change: EventHandler<FormEvent>,
    /// Opens the native file picker dialog.
    pub on_open_picker: EventHandler<()>,
    /// `id` attribute of the hidden file input, for programmatic
    /// picker opening. Must be unique per mounted drop zone.
    pub input_id: String,
    /// `accept` attribute of the hidden input, e.g. `".png,.jpg"`.
    /// Empty accepts everything.
    pub accept: String,
    /// Whether the hidden input allows selecting multiple files.
    pub multiple: bool,
}
