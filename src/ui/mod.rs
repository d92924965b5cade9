// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates the widget's screen areas (shared with the mouse hit test)
// - input: Renders the search input box with icon, placeholder and cursor
// - dropdown: Renders the results dropdown / no-results message

pub mod dropdown;
pub mod input;
pub mod layout;

use ratatui::Frame;

use crate::config::UiConfig;
use crate::controller::SearchController;
use dropdown::ResultRenderer;

/// Render the whole widget for one frame
pub fn render(
    f: &mut Frame,
    controller: &SearchController,
    ui: &UiConfig,
    renderer: &dyn ResultRenderer,
) {
    let layout = layout::widget_layout(f.area());

    input::render_search_input(
        f,
        layout.input_area,
        controller.input(),
        controller.is_loading(),
        ui,
    );

    if controller.dropdown_visible() {
        dropdown::render_dropdown(f, layout.dropdown_area, controller, ui, renderer);
    }
}
