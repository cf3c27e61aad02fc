//! Single-file adapter over [`FileArea`].
//!
//! [`FileArea`]: crate::components::FileArea

use dioxus::prelude::*;
use filedrop_core::{Catalog, FileDescriptor, MessageKey};

use crate::action::FileAction;
use crate::components::FileArea;
use crate::dropzone::Dropzone;

/// Props for the [`SingleFileArea`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SingleFileAreaProps {
    /// Caller-owned drag-and-drop controller.
    dropzone: Dropzone,
    /// The selected file, if any.
    #[props(default)]
    file: Option<FileDescriptor>,
    /// Disables the picker button and hides the file action.
    disabled: bool,
    /// Optional control rendered on the file's card.
    #[props(default)]
    file_action: Option<FileAction>,
}

/// [`FileArea`] constrained to at most one file.
///
/// Converts the optional descriptor into a zero-or-one element list,
/// swaps in the singular drag prompt, and forwards everything else
/// unchanged. No layout logic of its own.
#[component]
pub fn SingleFileArea(props: SingleFileAreaProps) -> Element {
    let catalog = try_consume_context::<Catalog>().unwrap_or_default();

    rsx! {
        FileArea {
            dropzone: props.dropzone,
            files: to_list(props.file),
            disabled: props.disabled,
            drag_text: catalog.text(MessageKey::DragFile),
            file_action: props.file_action,
        }
    }
}

/// Zero-or-one element list from the optional descriptor.
fn to_list(file: Option<FileDescriptor>) -> Vec<FileDescriptor> {
    file.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_is_an_empty_list() {
        assert!(to_list(None).is_empty());
    }

    #[test]
    fn one_file_is_a_one_element_list() {
        let file = FileDescriptor::new("draft.txt", 12);
        assert_eq!(to_list(Some(file.clone())), vec![file]);
    }
}
