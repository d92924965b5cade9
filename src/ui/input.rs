//! Search Input UI
//!
//! Renders the search input box with icon slot, placeholder and blinking
//! cursor. The icon slot shows the loading icon while a search is in flight
//! and the search icon otherwise.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::config::UiConfig;

/// Render the search input box
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str, loading: bool, ui: &UiConfig) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .style(Style::default().fg(Color::Cyan));

    let icon = if loading {
        ui.loading_icon.as_str()
    } else {
        ui.search_icon.as_str()
    };

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    // Columns available for the query text: borders, icon, one space, cursor
    let budget = area
        .width
        .saturating_sub(2)
        .saturating_sub(icon.width() as u16)
        .saturating_sub(2) as usize;

    let input_line = if query.is_empty() {
        Line::from(vec![
            Span::raw(format!("{} ", icon)),
            Span::styled("█", cursor_style),
            Span::styled(ui.placeholder.clone(), Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw(format!("{} ", icon)),
            Span::raw(visible_tail(query, budget).to_string()),
            Span::styled("█", cursor_style),
        ])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);
    f.render_widget(paragraph, area);
}

/// Trim the query from the left so its displayed tail fits the budget
///
/// The cursor sits at the end of the input, so when the text overflows the
/// box the newest characters are the ones worth keeping visible.
fn visible_tail(query: &str, budget: usize) -> &str {
    if query.width() <= budget {
        return query;
    }

    let mut start = 0;
    for (i, _) in query.char_indices() {
        if query[i..].width() <= budget {
            start = i;
            break;
        }
        start = i;
    }
    &query[start..]
}
