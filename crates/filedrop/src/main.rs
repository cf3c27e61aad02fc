use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use filedrop_core::{Catalog, FileDescriptor};
use filedrop_ui::{
    ActionColor, ActionIcon, Dropzone, FileAction, FileArea, SingleFileArea, open_file_picker,
};

fn main() {
    dioxus::launch(app);
}

/// Hidden input id for the multi-file drop zone.
const MULTI_INPUT_ID: &str = "filedrop-demo-multi";

/// Hidden input id for the single-file drop zone.
const SINGLE_INPUT_ID: &str = "filedrop-demo-single";

/// Metadata descriptors for a batch of picked or dropped files.
fn descriptors(incoming: &[FileData]) -> Vec<FileDescriptor> {
    incoming
        .iter()
        .map(|data| FileDescriptor::new(data.name(), data.size()))
        .collect()
}

/// Root demo component.
///
/// Owns everything the components deliberately do not: the selected
/// file lists, the drag-active flags, and the [`Dropzone`] controllers
/// with their drag and picker handlers. Renders a multi-file area with
/// a remove action next to a single-file area.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    use_context_provider(Catalog::default);

    // --- Multi-file area state ---
    let mut files = use_signal(Vec::<FileDescriptor>::new);
    let mut drag_active = use_signal(|| false);

    // --- Single-file area state ---
    let mut single_file = use_signal(|| Option::<FileDescriptor>::None);
    let mut single_drag_active = use_signal(|| false);

    let mut disabled = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Filenames are the identity keys for card rendering, so a file
    // re-selected under the same name replaces nothing and is dropped.
    let mut add_files = move |incoming: &[FileData]| {
        let mut list = files.write();
        for descriptor in descriptors(incoming) {
            if !list.iter().any(|f| f.filename == descriptor.filename) {
                list.push(descriptor);
            }
        }
    };

    let multi_dropzone = Dropzone {
        is_drag_active: drag_active(),
        on_drag_over: EventHandler::new(move |evt: DragEvent| {
            evt.prevent_default();
            drag_active.set(true);
        }),
        on_drag_leave: EventHandler::new(move |_| drag_active.set(false)),
        on_drop: EventHandler::new(move |evt: DragEvent| {
            evt.prevent_default();
            drag_active.set(false);
            add_files(&evt.files());
        }),
        on_input_change: EventHandler::new(move |evt: FormEvent| add_files(&evt.files())),
        on_open_picker: EventHandler::new(move |()| {
            if let Err(e) = open_file_picker(MULTI_INPUT_ID) {
                error.set(Some(e.to_string()));
            }
        }),
        input_id: MULTI_INPUT_ID.to_owned(),
        accept: String::new(),
        multiple: true,
    };

    let remove_action = FileAction {
        icon: ActionIcon::Trash,
        color: ActionColor::Red,
        on_click: EventHandler::new(move |file: FileDescriptor| {
            files.write().retain(|f| f.filename != file.filename);
        }),
    };

    let single_dropzone = Dropzone {
        is_drag_active: single_drag_active(),
        on_drag_over: EventHandler::new(move |evt: DragEvent| {
            evt.prevent_default();
            single_drag_active.set(true);
        }),
        on_drag_leave: EventHandler::new(move |_| single_drag_active.set(false)),
        on_drop: EventHandler::new(move |evt: DragEvent| {
            evt.prevent_default();
            single_drag_active.set(false);
            single_file.set(descriptors(&evt.files()).into_iter().next());
        }),
        on_input_change: EventHandler::new(move |evt: FormEvent| {
            single_file.set(descriptors(&evt.files()).into_iter().next());
        }),
        on_open_picker: EventHandler::new(move |()| {
            if let Err(e) = open_file_picker(SINGLE_INPUT_ID) {
                error.set(Some(e.to_string()));
            }
        }),
        input_id: SINGLE_INPUT_ID.to_owned(),
        accept: String::new(),
        multiple: false,
    };

    let clear_action = FileAction {
        icon: ActionIcon::Cross,
        color: ActionColor::Grey,
        on_click: EventHandler::new(move |_| single_file.set(None)),
    };

    rsx! {
        div { class: "max-w-3xl mx-auto p-6 space-y-6",
            h1 { class: "text-2xl font-semibold", "filedrop demo" }

            if let Some(ref message) = error() {
                p { class: "text-[var(--text-error)]", "{message}" }
            }

            label { class: "inline-flex items-center gap-2 text-sm",
                input {
                    r#type: "checkbox",
                    checked: disabled(),
                    onchange: move |evt| disabled.set(evt.checked()),
                }
                "Disable upload"
            }

            section { class: "space-y-2",
                h2 { class: "text-lg font-medium", "Multiple files" }
                FileArea {
                    dropzone: multi_dropzone,
                    files: files(),
                    disabled: disabled(),
                    file_action: remove_action,
                }
            }

            section { class: "space-y-2",
                h2 { class: "text-lg font-medium", "Single file" }
                SingleFileArea {
                    dropzone: single_dropzone,
                    file: single_file(),
                    disabled: disabled(),
                    file_action: clear_action,
                }
            }
        }
    }
}
