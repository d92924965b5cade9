//! Results Dropdown
//!
//! Renders the dropdown under the input: the result list when there are
//! hits, or the configured no-results message. Each result goes through the
//! `ResultRenderer` seam so embedders can swap how a link row is drawn; the
//! default renders title, description and href as a hyperlink-style row.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::SearchResultItem;
use crate::config::UiConfig;
use crate::controller::SearchController;
use crate::logic::highlight::highlight_text;

/// Lines per rendered result row; the mouse hit test in ui::layout relies on
/// this being fixed
pub const RESULT_ROW_HEIGHT: u16 = 3;

/// How a single result row is turned into terminal lines
pub trait ResultRenderer {
    /// Produce exactly `RESULT_ROW_HEIGHT` lines for one result
    fn render_item(
        &self,
        item: &SearchResultItem,
        query: &str,
        highlight_enabled: bool,
        selected: bool,
    ) -> Vec<Line<'static>>;
}

/// Default renderer: bold title, dim description, underlined href
pub struct HyperlinkRenderer;

impl ResultRenderer for HyperlinkRenderer {
    fn render_item(
        &self,
        item: &SearchResultItem,
        query: &str,
        highlight_enabled: bool,
        selected: bool,
    ) -> Vec<Line<'static>> {
        let marker = if selected { "▸ " } else { "  " };

        let mut title_spans = vec![Span::styled(
            marker.to_string(),
            Style::default().fg(Color::Cyan),
        )];
        title_spans.extend(highlight_spans(
            &item.title,
            query,
            highlight_enabled,
            Style::default().add_modifier(Modifier::BOLD),
        ));

        let mut description_spans = vec![Span::raw("  ")];
        description_spans.extend(highlight_spans(
            &item.description,
            query,
            highlight_enabled,
            Style::default().fg(Color::Gray),
        ));

        let href_line = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                item.href.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]);

        vec![
            Line::from(title_spans),
            Line::from(description_spans),
            href_line,
        ]
    }
}

/// Split text into styled spans, marking query matches in reverse video
fn highlight_spans(
    text: &str,
    query: &str,
    highlight_enabled: bool,
    base: Style,
) -> Vec<Span<'static>> {
    if !highlight_enabled {
        return vec![Span::styled(text.to_string(), base)];
    }

    match highlight_text(Some(text), query) {
        Some(segments) => segments
            .into_iter()
            .map(|segment| {
                let style = if segment.matched {
                    base.add_modifier(Modifier::REVERSED)
                } else {
                    base
                };
                Span::styled(segment.text, style)
            })
            .collect(),
        None => Vec::new(),
    }
}

/// Render the dropdown for one frame
///
/// Caller has already decided visibility (`controller.dropdown_visible()`).
pub fn render_dropdown(
    f: &mut Frame,
    area: Rect,
    controller: &SearchController,
    ui: &UiConfig,
    renderer: &dyn ResultRenderer,
) {
    if area.height < 3 || area.width == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Gray));

    let results = controller.results();
    let lines: Vec<Line> = if results.is_empty() {
        vec![Line::from(Span::styled(
            ui.no_results_text.clone(),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        // Only as many full rows as fit inside the borders
        let capacity = ((area.height - 2) / RESULT_ROW_HEIGHT) as usize;
        results
            .iter()
            .take(capacity)
            .enumerate()
            .flat_map(|(index, item)| {
                renderer.render_item(
                    item,
                    controller.input(),
                    ui.highlight_enabled,
                    controller.selected() == Some(index),
                )
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> SearchResultItem {
        SearchResultItem {
            title: "The Cat Essay".to_string(),
            description: "All about cats".to_string(),
            href: "/posts/cats".to_string(),
        }
    }

    #[test]
    fn test_default_renderer_emits_fixed_row_height() {
        let lines = HyperlinkRenderer.render_item(&item(), "cat", true, false);
        assert_eq!(lines.len(), RESULT_ROW_HEIGHT as usize);
    }

    #[test]
    fn test_highlight_spans_mark_matches() {
        let spans = highlight_spans("The Cat", "cat", true, Style::default());
        let marked: Vec<_> = spans
            .iter()
            .filter(|s| s.style.add_modifier.contains(Modifier::REVERSED))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].content, "Cat");
    }

    #[test]
    fn test_highlight_disabled_is_single_span() {
        let spans = highlight_spans("The Cat", "cat", false, Style::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "The Cat");
    }
}
