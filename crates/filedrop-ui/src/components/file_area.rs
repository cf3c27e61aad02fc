//! Drop area with file preview cards and a picker button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use filedrop_core::{Catalog, FileDescriptor, MessageKey, human_readable_bytes};

use crate::action::FileAction;
use crate::dropzone::Dropzone;
use crate::layout::FileAreaLayout;

/// Props for the [`FileArea`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileAreaProps {
    /// Caller-owned drag-and-drop controller.
    dropzone: Dropzone,
    /// Already-selected files, one preview card each. Filenames are
    /// the identity keys and should be unique within the list.
    files: Vec<FileDescriptor>,
    /// Disables the picker button and hides per-file actions.
    disabled: bool,
    /// Drop-zone prompt. Defaults to the catalog's "Drag file(s) here".
    #[props(default)]
    drag_text: Option<String>,
    /// Optional per-file control rendered on each card.
    #[props(default)]
    file_action: Option<FileAction>,
}

/// A drop zone with a card-based preview of the selected files.
///
/// With no files selected (or while a drag is in progress) the whole
/// region is a full-width prompt; otherwise it splits into a preview
/// column of file cards and a narrower drop/choose column. All drag
/// and picker events route through the supplied [`Dropzone`]; this
/// component holds no state of its own.
///
/// Reads the message [`Catalog`] from context, falling back to the
/// English defaults when none is provided.
#[component]
pub fn FileArea(props: FileAreaProps) -> Element {
    let catalog = try_consume_context::<Catalog>().unwrap_or_default();
    let layout = FileAreaLayout::compute(
        props.files.len(),
        props.dropzone.is_drag_active,
        props.disabled,
        props.file_action.is_some(),
    );

    let drag_text = props
        .drag_text
        .unwrap_or_else(|| catalog.text(MessageKey::DragFiles));
    let or_text = catalog.text(MessageKey::Or);
    let choose_text = catalog.text(MessageKey::ChooseFromComputer);

    let on_drag_over = props.dropzone.on_drag_over;
    let on_drag_leave = props.dropzone.on_drag_leave;
    let on_drop = props.dropzone.on_drop;
    let on_input_change = props.dropzone.on_input_change;
    let on_open_picker = props.dropzone.on_open_picker;

    let border_class = if props.dropzone.is_drag_active {
        "border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border-[var(--border-muted)] bg-[var(--surface)]"
    };
    let preview_basis = FileAreaLayout::PREVIEW_BASIS;
    let prompt_basis = if layout.show_preview {
        FileAreaLayout::PROMPT_BASIS
    } else {
        "basis-full"
    };
    // Disabled suppresses the action for every card.
    let action = props.file_action.filter(|_| layout.show_file_action);
    let grid_class = if layout.center_single_card {
        "grid grid-cols-1 justify-items-center"
    } else {
        "grid grid-cols-2 gap-3"
    };

    rsx! {
        div {
            class: "border-2 border-dashed rounded-lg p-6 transition-colors {border_class}",
            ondragover: move |evt| on_drag_over.call(evt),
            ondragleave: move |evt| on_drag_leave.call(evt),
            ondrop: move |evt| on_drop.call(evt),

            input {
                r#type: "file",
                id: "{props.dropzone.input_id}",
                accept: "{props.dropzone.accept}",
                multiple: props.dropzone.multiple,
                class: "hidden",
                onchange: move |evt| on_input_change.call(evt),
            }

            div { class: "flex items-center gap-4",
                if layout.show_preview {
                    div { class: "{preview_basis} border-r border-[var(--border-muted)] pr-4",
                        div { class: "{grid_class}",
                            for file in props.files.iter() {
                                {render_card(file, &catalog, action.as_ref())}
                            }
                        }
                    }
                }

                div { class: "{prompt_basis} text-center",
                    h3 { class: "text-lg font-medium text-[var(--text-secondary)]",
                        "{drag_text}"
                    }

                    if layout.show_picker_button {
                        div { class: "flex items-center gap-2 my-3",
                            span { class: "flex-1 border-t border-[var(--border-muted)]" }
                            span { class: "text-xs uppercase text-[var(--muted)]", "{or_text}" }
                            span { class: "flex-1 border-t border-[var(--border-muted)]" }
                        }
                        button {
                            r#type: "button",
                            class: "inline-flex items-center gap-2 px-4 py-2 rounded bg-[var(--btn-primary)]
                                    hover:bg-[var(--btn-primary-hover)] text-white font-medium transition-colors
                                    disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: props.disabled,
                            onclick: move |_| on_open_picker.call(()),

                            Icon { icon: LdUpload, width: 16, height: 16 }
                            "{choose_text}"
                        }
                    }
                }
            }
        }
    }
}

/// Render a single file preview card.
fn render_card(file: &FileDescriptor, catalog: &Catalog, action: Option<&FileAction>) -> Element {
    let size_text = catalog.size_text(&human_readable_bytes(file.size));

    rsx! {
        div {
            key: "{file.filename}",
            class: "relative w-full max-w-[200px] rounded border border-[var(--border)]
                    bg-[var(--surface)] shadow-sm px-3 py-2",

            // Full name stays reachable through the tooltip when the
            // display overflows.
            div {
                class: "truncate text-sm font-medium text-center",
                title: "{file.filename}",
                "{file.filename}"
            }
            div { class: "text-xs text-[var(--text-secondary)] text-center mt-1",
                "{size_text}"
            }

            if let Some(action) = action {
                {render_action(file, action)}
            }
        }
    }
}

/// Render the clickable action control in a card's corner.
fn render_action(file: &FileDescriptor, action: &FileAction) -> Element {
    let on_click = action.on_click;
    let descriptor = file.clone();
    let label = format!("File action for {}", file.filename);

    rsx! {
        button {
            r#type: "button",
            class: "absolute top-1 right-1 cursor-pointer {action.color.class()}",
            aria_label: "{label}",
            onclick: move |_| on_click.call(descriptor.clone()),

            {action.icon.render()}
        }
    }
}
