//! Programmatic file-picker opening.
//!
//! Browsers only open the native picker from a user gesture on a file
//! input. The components render that input hidden, so the "choose from
//! your computer" button opens it by locating the element by id and
//! clicking it. Callers package this into their [`Dropzone`]'s
//! `on_open_picker` handler.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).
//!
//! [`Dropzone`]: crate::dropzone::Dropzone

use wasm_bindgen::JsCast;

/// Errors that can occur when opening the file picker.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// No global `window` (not running in a browser).
    #[error("no global window")]
    NoWindow,
    /// The window has no document.
    #[error("no document")]
    NoDocument,
    /// No element with the given id is mounted.
    #[error("no element with id {0:?}")]
    ElementNotFound(String),
    /// The element with the given id is not an HTML element.
    #[error("element {0:?} is not clickable")]
    NotClickable(String),
}

/// Open the native file picker by clicking the hidden input with the
/// given id.
///
/// # Errors
///
/// Returns a [`PickerError`] when no browser environment is available
/// or no clickable element with `input_id` is mounted (e.g., the drop
/// zone has been unmounted since the handler was built).
pub fn open_file_picker(input_id: &str) -> Result<(), PickerError> {
    let window = web_sys::window().ok_or(PickerError::NoWindow)?;
    let document = window.document().ok_or(PickerError::NoDocument)?;
    let element = document
        .get_element_by_id(input_id)
        .ok_or_else(|| PickerError::ElementNotFound(input_id.to_owned()))?;
    let input: web_sys::HtmlElement = element
        .dyn_into()
        .map_err(|_| PickerError::NotClickable(input_id.to_owned()))?;
    input.click();
    Ok(())
}
