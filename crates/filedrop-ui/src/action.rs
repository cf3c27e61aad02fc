//! Optional per-file action control.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape};
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdPencil, LdTrash2, LdX};
use filedrop_core::FileDescriptor;

/// Icon rendered on a file card's action control.
///
/// A closed set instead of a free-form icon name, so an unknown icon
/// is a compile error rather than a silently blank glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionIcon {
    /// Trash can, the usual "remove this file" affordance.
    Trash,
    /// Plain cross, for dismiss/deselect.
    Cross,
    /// Download arrow.
    Download,
    /// Pencil, for rename/replace flows.
    Pencil,
}

impl ActionIcon {
    /// Render the lucide glyph for this icon.
    #[must_use]
    pub fn render(self) -> Element {
        match self {
            Self::Trash => render_glyph(LdTrash2),
            Self::Cross => render_glyph(LdX),
            Self::Download => render_glyph(LdDownload),
            Self::Pencil => render_glyph(LdPencil),
        }
    }
}

fn render_glyph<S: IconShape + Clone + PartialEq + 'static>(shape: S) -> Element {
    rsx! {
        Icon { icon: shape, width: 16, height: 16 }
    }
}

/// Color of the action control, drawn from the theme palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionColor {
    /// Destructive actions (remove, delete).
    Red,
    /// Confirming actions.
    Green,
    /// Neutral actions.
    Grey,
}

impl ActionColor {
    /// Utility class applying the theme color; the glyph inherits it
    /// via `currentColor`.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Red => "text-[var(--text-error)]",
            Self::Green => "text-[var(--text-success)]",
            Self::Grey => "text-[var(--text-secondary)]",
        }
    }
}

/// A clickable per-file control shown on each preview card, e.g. a red
/// trash can that removes the file from the caller's selection.
///
/// When a [`FileArea`] receives no action, or is disabled, no control
/// is rendered.
///
/// [`FileArea`]: crate::components::FileArea
#[derive(Clone, PartialEq)]
pub struct FileAction {
    /// Glyph to render.
    pub icon: ActionIcon,
    /// Theme color of the glyph.
    pub color: ActionColor,
    /// Fired with the card's descriptor when the control is clicked.
    pub on_click: EventHandler<FileDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_map_to_theme_classes() {
        assert_eq!(ActionColor::Red.class(), "text-[var(--text-error)]");
        assert_eq!(ActionColor::Green.class(), "text-[var(--text-success)]");
        assert_eq!(ActionColor::Grey.class(), "text-[var(--text-secondary)]");
    }
}
