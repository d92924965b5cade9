//! Widget Layout
//!
//! Pure layout computation shared by the renderer and the mouse hit test,
//! so "outside the widget" means exactly the same thing in both places.

use ratatui::layout::{Position, Rect};

/// Widest the widget gets on large terminals
pub const MAX_WIDGET_WIDTH: u16 = 60;
/// Input box height including its borders
pub const INPUT_HEIGHT: u16 = 3;
/// Cap on dropdown height, including its borders
pub const MAX_DROPDOWN_HEIGHT: u16 = 20;

/// Screen areas of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetLayout {
    pub input_area: Rect,
    pub dropdown_area: Rect,
}

/// Calculate the widget's areas within the frame
///
/// The widget is horizontally centered and pinned near the top; the dropdown
/// sits directly under the input and takes whatever height remains, up to a
/// cap. Degrades to zero-height areas on tiny terminals rather than
/// panicking.
pub fn widget_layout(frame_area: Rect) -> WidgetLayout {
    let width = frame_area.width.min(MAX_WIDGET_WIDTH);
    let x = frame_area.x + (frame_area.width.saturating_sub(width)) / 2;
    let y = frame_area.y + 1.min(frame_area.height);

    let input_height = INPUT_HEIGHT.min(frame_area.height.saturating_sub(y - frame_area.y));
    let input_area = Rect {
        x,
        y,
        width,
        height: input_height,
    };

    let below = frame_area
        .height
        .saturating_sub((input_area.y + input_area.height) - frame_area.y);
    let dropdown_area = Rect {
        x,
        y: input_area.y + input_area.height,
        width,
        height: below.min(MAX_DROPDOWN_HEIGHT),
    };

    WidgetLayout {
        input_area,
        dropdown_area,
    }
}

/// Hit test for pointer-down routing
///
/// The dropdown area only counts as "inside" while the dropdown is visible;
/// a click where a hidden dropdown would be is an outside click.
pub fn widget_contains(
    layout: &WidgetLayout,
    column: u16,
    row: u16,
    dropdown_visible: bool,
) -> bool {
    let position = Position::new(column, row);
    if layout.input_area.contains(position) {
        return true;
    }
    dropdown_visible && layout.dropdown_area.contains(position)
}

/// Map a pointer-down inside the visible dropdown to a result index
///
/// Each result renders as a fixed three-line row below the dropdown's top
/// border. Returns `None` for the borders or rows past the rendered results.
pub fn dropdown_hit_index(layout: &WidgetLayout, row: u16, result_count: usize) -> Option<usize> {
    let area = layout.dropdown_area;
    if area.height < 3 || row <= area.y || row >= area.y + area.height - 1 {
        return None;
    }

    let index = ((row - area.y - 1) / super::dropdown::RESULT_ROW_HEIGHT) as usize;
    if index < result_count {
        Some(index)
    } else {
        None
    }
}
