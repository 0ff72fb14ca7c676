//! Draws a [`RenderTree`] into the terminal.
//!
//! Line building is kept apart from drawing so card positions can be tested
//! without a backend.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::render::{ItemCard, RenderTree};

const TAB_SEPARATOR: &str = "│";

/// Content lines plus the first line of every card, in card order.
#[derive(Debug, Default)]
pub struct ContentLines {
    /// Lines to draw
    pub lines: Vec<Line<'static>>,
    /// Index into `lines` where each card starts
    pub card_starts: Vec<usize>,
}

/// Builds the tab bar label spans.
fn tab_spans(tree: &RenderTree, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(tree.tabs.len() * 2);
    for (i, tab) in tree.tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                TAB_SEPARATOR,
                Style::default().fg(theme.text_muted),
            ));
        }
        let style = if tab.selected {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        spans.push(Span::styled(
            format!(" {} {} ", tab.symbol_glyph, tab.title),
            style,
        ));
    }
    spans
}

/// Column offset and width of the selected tab label within the bar.
#[must_use]
pub fn selected_tab_span(tree: &RenderTree) -> Option<(usize, usize)> {
    let spans = tab_spans(tree, &Theme::dark());
    let mut x = 0;
    let mut label = 0;
    for span in &spans {
        let width = span.width();
        if span.content != TAB_SEPARATOR {
            if tree.tabs.get(label).is_some_and(|tab| tab.selected) {
                return Some((x, width));
            }
            label += 1;
        }
        x += width;
    }
    None
}

/// Draws the tab bar and the eased underline below the selected tab.
pub fn render_tab_bar(
    f: &mut Frame,
    area: Rect,
    tree: &RenderTree,
    underline_progress: f64,
    theme: &Theme,
) {
    let mut lines = vec![Line::from(tab_spans(tree, theme))];

    if let Some((offset, width)) = selected_tab_span(tree) {
        let drawn = (width as f64 * underline_progress.clamp(0.0, 1.0)).round() as usize;
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(offset)),
            Span::styled("━".repeat(drawn), Style::default().fg(theme.accent)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.text_muted));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn card_lines(card: &ItemCard, selected: bool, padding: u16, theme: &Theme) -> Vec<Line<'static>> {
    let indent = " ".repeat(usize::from(padding));
    let base = if selected {
        Style::default().bg(theme.highlight_bg)
    } else {
        Style::default()
    };
    let marker = if selected { "▶ " } else { "  " };

    let mut title = vec![
        Span::styled(marker, base.fg(theme.accent)),
        Span::styled(
            card.title.clone(),
            base.fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];
    for badge in &card.badges {
        title.push(Span::styled(" ", base));
        title.push(Span::styled(
            format!("[{badge}]"),
            base.fg(theme.badge(*badge)).add_modifier(Modifier::BOLD),
        ));
    }

    let mut meta = vec![
        Span::raw(indent.clone()),
        Span::styled(
            card.energy_type.clone(),
            Style::default().fg(theme.text_secondary),
        ),
    ];
    if let Some(power) = card.power_level {
        meta.push(Span::styled(
            format!("  ✦ {power}"),
            Style::default().fg(theme.accent),
        ));
    }
    if !card.routable {
        meta.push(Span::styled(
            "  (coming soon)",
            Style::default().fg(theme.text_muted),
        ));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(meta),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(card.description.clone(), Style::default().fg(theme.text_muted)),
        ]),
    ];
    for feature in &card.features {
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(format!("• {feature}"), Style::default().fg(theme.text)),
        ]));
    }
    lines
}

/// Builds the content lines with the card at `cursor` highlighted.
#[must_use]
pub fn content_lines(tree: &RenderTree, cursor: usize, theme: &Theme) -> ContentLines {
    let mut out = ContentLines::default();
    let Some(content) = &tree.content else {
        out.lines.push(Line::from(Span::styled(
            "Nothing to show for this tab.",
            Style::default().fg(theme.text_muted),
        )));
        return out;
    };

    out.lines.push(Line::from(Span::styled(
        content.title.clone(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )));
    out.lines.push(Line::from(Span::styled(
        content.subtitle.clone(),
        Style::default().fg(theme.text_secondary),
    )));
    out.lines.push(Line::from(Span::styled(
        content.description.clone(),
        Style::default().fg(theme.text_muted),
    )));

    let mut card_index = 0;
    for section in &content.sections {
        for _ in 0..tree.layout.section_gap {
            out.lines.push(Line::from(""));
        }
        out.lines.push(Line::from(vec![
            Span::styled(
                section.title.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::styled(
                format!("  {} · {} items", section.energy_label, section.item_count),
                Style::default().fg(theme.text_secondary),
            ),
        ]));
        out.lines.push(Line::from(Span::styled(
            section.subtitle.clone(),
            Style::default().fg(theme.text_muted),
        )));

        for (i, card) in section.cards.iter().enumerate() {
            if i > 0 {
                for _ in 0..tree.layout.card_gap {
                    out.lines.push(Line::from(""));
                }
            } else {
                out.lines.push(Line::from(""));
            }
            out.card_starts.push(out.lines.len());
            out.lines.extend(card_lines(
                card,
                card_index == cursor,
                tree.layout.card_padding,
                theme,
            ));
            card_index += 1;
        }
    }
    out
}

/// Scroll offset that keeps the selected card in view.
#[must_use]
pub fn scroll_offset(content: &ContentLines, cursor: usize, height: u16) -> u16 {
    let Some(&start) = content.card_starts.get(cursor) else {
        return 0;
    };
    let end = content
        .card_starts
        .get(cursor + 1)
        .copied()
        .unwrap_or(content.lines.len());
    let height = usize::from(height);
    if end <= height {
        0
    } else {
        u16::try_from(start.min(end - height)).unwrap_or(u16::MAX)
    }
}

/// Draws the content area.
pub fn render_content(f: &mut Frame, area: Rect, tree: &RenderTree, cursor: usize, theme: &Theme) {
    let content = content_lines(tree, cursor, theme);
    let inner_height = area.height.saturating_sub(2);
    let offset = scroll_offset(&content, cursor, inner_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    f.render_widget(
        Paragraph::new(content.lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::render::render;
    use crate::tokens::DesignTokens;

    fn tree(tab: usize) -> RenderTree {
        let catalog = Catalog::default();
        render(catalog.tabs(), tab, &DesignTokens::default()).unwrap()
    }

    #[test]
    fn test_one_start_per_card() {
        let tree = tree(0);
        let content = content_lines(&tree, 0, &Theme::dark());
        assert_eq!(content.card_starts.len(), tree.card_count());
        assert!(content.card_starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_missing_content_draws_placeholder() {
        let tree = tree(99);
        let content = content_lines(&tree, 0, &Theme::dark());
        assert!(content.card_starts.is_empty());
        assert_eq!(content.lines.len(), 1);
    }

    #[test]
    fn test_first_tab_span_starts_at_zero() {
        let tree = tree(0);
        let (offset, width) = selected_tab_span(&tree).unwrap();
        assert_eq!(offset, 0);
        assert!(width > 0);
    }

    #[test]
    fn test_later_tab_span_moves_right() {
        let first = selected_tab_span(&tree(0)).unwrap();
        let second = selected_tab_span(&tree(1)).unwrap();
        assert!(second.0 > first.0);
    }

    #[test]
    fn test_no_selected_span_when_out_of_range() {
        assert_eq!(selected_tab_span(&tree(99)), None);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let tree = tree(0);
        let content = content_lines(&tree, 0, &Theme::dark());
        let last = content.card_starts.len() - 1;
        let height = 10;
        let offset = usize::from(scroll_offset(&content, last, height));
        let start = content.card_starts[last];
        assert!(offset <= start);
        assert!(start < offset + usize::from(height));
        assert_eq!(scroll_offset(&content, 0, 200), 0);
    }
}
