//! Status bar widget for status messages, the refresh indicator, and hints.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::help_overlay::STATUS_HINTS;
use super::{ScreenState, StatusKind, Theme};

const REFRESH_CELLS: usize = 12;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Progress cells for the refresh indicator.
    #[must_use]
    pub fn refresh_bar(progress: f64) -> String {
        let filled = ((REFRESH_CELLS as f64) * progress.clamp(0.0, 1.0)).round() as usize;
        format!(
            "{}{}",
            "✦".repeat(filled),
            "·".repeat(REFRESH_CELLS - filled)
        )
    }

    /// Render the status bar.
    pub fn render(f: &mut Frame, area: Rect, state: &ScreenState<'_>, theme: &Theme) {
        let mut lines = Vec::with_capacity(2);
        let now = Instant::now();
        let ornament = Span::styled(
            format!("{} ", state.orbit.glyph(now)),
            Style::default().fg(theme.accent),
        );

        if let Some(indicator) = &state.refresh {
            lines.push(Line::from(vec![
                ornament,
                Span::styled("Refreshing ", Style::default().fg(theme.primary)),
                Span::styled(
                    Self::refresh_bar(indicator.progress(now)),
                    Style::default().fg(theme.accent),
                ),
            ]));
        } else {
            let color = match state.status.kind {
                StatusKind::Info => theme.text,
                StatusKind::Success => theme.success,
                StatusKind::Warning => theme.warning,
            };
            lines.push(Line::from(vec![
                ornament,
                Span::styled(state.status.text.clone(), Style::default().fg(color)),
            ]));
        }

        lines.push(Line::from(Span::styled(
            STATUS_HINTS,
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::DIM),
        )));

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.text_muted));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_bar_fills() {
        assert_eq!(StatusBar::refresh_bar(0.0).chars().filter(|c| *c == '✦').count(), 0);
        assert_eq!(
            StatusBar::refresh_bar(1.0).chars().filter(|c| *c == '✦').count(),
            REFRESH_CELLS
        );
        assert_eq!(StatusBar::refresh_bar(2.0), StatusBar::refresh_bar(1.0));
    }
}
