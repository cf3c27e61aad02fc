//! Pure layout computation for the drop area.
//!
//! [`FileArea`] keeps no state and makes no layout decisions inline;
//! everything that varies with the props is computed here from plain
//! values, so the "given props X, tree Y" contract is testable on the
//! native target without rendering.
//!
//! [`FileArea`]: crate::components::FileArea

/// Layout description for one [`FileArea`] render pass.
///
/// [`FileArea`]: crate::components::FileArea
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileAreaLayout {
    /// Whether the file-preview column is rendered at all. False when
    /// there are no files or a drag is in progress, in which case the
    /// prompt column takes the full width.
    pub show_preview: bool,
    /// Cards per grid row in the preview column.
    pub cards_per_row: usize,
    /// Whether a lone card is centered rather than grid-aligned.
    pub center_single_card: bool,
    /// Whether the "choose from your computer" button (and its "Or"
    /// divider) is rendered. Hidden while a drag is in progress.
    pub show_picker_button: bool,
    /// Whether the per-file action control is rendered on cards.
    pub show_file_action: bool,
}

impl FileAreaLayout {
    /// Preview column width when the region is split (10 of 16).
    pub const PREVIEW_BASIS: &'static str = "basis-[62.5%]";
    /// Prompt column width when the region is split (6 of 16).
    pub const PROMPT_BASIS: &'static str = "basis-[37.5%]";

    /// Compute the layout from the render inputs.
    #[must_use]
    pub const fn compute(
        file_count: usize,
        is_drag_active: bool,
        disabled: bool,
        has_action: bool,
    ) -> Self {
        Self {
            show_preview: file_count > 0 && !is_drag_active,
            cards_per_row: if file_count == 1 { 1 } else { 2 },
            center_single_card: file_count == 1,
            show_picker_button: !is_drag_active,
            show_file_action: !disabled && has_action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_full_width_prompt() {
        let layout = FileAreaLayout::compute(0, false, false, false);
        assert!(!layout.show_preview);
        assert!(layout.show_picker_button);
    }

    #[test]
    fn active_drag_hides_preview_and_picker_button() {
        // Even with files selected, a drag in progress collapses the
        // region to the full-width prompt with no button.
        let layout = FileAreaLayout::compute(3, true, false, false);
        assert!(!layout.show_preview);
        assert!(!layout.show_picker_button);
    }

    #[test]
    fn single_file_renders_one_centered_card() {
        let layout = FileAreaLayout::compute(1, false, false, false);
        assert!(layout.show_preview);
        assert_eq!(layout.cards_per_row, 1);
        assert!(layout.center_single_card);
        assert!(layout.show_picker_button);
    }

    #[test]
    fn multiple_files_render_two_per_row() {
        for count in [2, 3, 7] {
            let layout = FileAreaLayout::compute(count, false, false, false);
            assert!(layout.show_preview);
            assert_eq!(layout.cards_per_row, 2);
            assert!(!layout.center_single_card);
        }
    }

    #[test]
    fn action_shows_only_when_supplied_and_enabled() {
        assert!(FileAreaLayout::compute(1, false, false, true).show_file_action);
        assert!(!FileAreaLayout::compute(1, false, false, false).show_file_action);
        // Disabled suppresses the action regardless of supply.
        assert!(!FileAreaLayout::compute(1, false, true, true).show_file_action);
    }

    #[test]
    fn disabled_does_not_affect_columns() {
        assert_eq!(
            FileAreaLayout::compute(2, false, true, false),
            FileAreaLayout::compute(2, false, false, false),
        );
    }
}
