//! Help overlay listing the screen's keyboard shortcuts.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Theme;

/// Shortcut groups shown in the overlay: (group, [(keys, action)]).
pub const KEY_BINDINGS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Tabs",
        &[
            ("Tab / →", "Next tab"),
            ("Shift+Tab / ←", "Previous tab"),
            ("1-9", "Jump to tab"),
        ],
    ),
    (
        "Cards",
        &[
            ("↑ / ↓", "Move between cards"),
            ("Enter", "Open card details"),
            ("r", "Refresh"),
        ],
    ),
    (
        "General",
        &[
            ("m", "Toggle menu"),
            ("?", "Toggle this help"),
            ("q / Esc", "Quit"),
        ],
    ),
];

/// Compact hint line for the status bar.
pub const STATUS_HINTS: &str = "Tab: Switch  ↑↓: Move  Enter: Open  r: Refresh  m: Menu  ?: Help  q: Quit";

/// Help overlay widget.
pub struct HelpOverlay;

impl HelpOverlay {
    fn lines(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (group, bindings) in KEY_BINDINGS {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                group,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, action) in bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<16}"), Style::default().fg(theme.accent)),
                    Span::styled(*action, Style::default().fg(theme.text)),
                ]));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }

    /// Draws the overlay.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(Self::lines(theme)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_group_has_bindings() {
        for (group, bindings) in KEY_BINDINGS {
            assert!(!bindings.is_empty(), "group {group} is empty");
        }
    }

    #[test]
    fn test_line_count_covers_all_bindings() {
        let bindings: usize = KEY_BINDINGS.iter().map(|(_, b)| b.len()).sum();
        let lines = HelpOverlay::lines(&Theme::dark());
        assert!(lines.len() > bindings + KEY_BINDINGS.len());
    }
}
