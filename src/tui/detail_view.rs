//! Detail view popup, the screen's navigation target.
//!
//! Receives a [`NavigationIntent`] and shows its parameters as handed over.
//! Chart computation lives elsewhere; this view only proves the handoff.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;
use crate::navigation::{NavigationIntent, Navigator};

/// Popup that displays the most recent navigation intent.
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    intent: Option<NavigationIntent>,
    closed: bool,
}

impl DetailView {
    /// Creates an empty detail view.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            intent: None,
            closed: false,
        }
    }

    /// The intent currently shown.
    #[must_use]
    pub const fn intent(&self) -> Option<&NavigationIntent> {
        self.intent.as_ref()
    }

    /// Whether an intent is being shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.intent.is_some() && !self.closed
    }

    /// Drops the current intent.
    pub fn close(&mut self) {
        self.intent = None;
        self.closed = true;
    }
}

impl Navigator for DetailView {
    fn navigate(&mut self, intent: &NavigationIntent) {
        self.intent = Some(intent.clone());
        self.closed = false;
    }
}

impl Component for DetailView {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Backspace => {
                self.close();
                Some(ComponentEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(intent) = &self.intent else {
            return;
        };

        let tier = if intent.is_premium() { "PRO" } else { "FREE" };
        let mut lines = vec![
            Line::from(Span::styled(
                intent.title.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{} ", intent.energy_type),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(format!("[{tier}]"), Style::default().fg(theme.pro)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                intent.description.clone(),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
        ];

        for (key, value) in intent.params() {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<12}"), Style::default().fg(theme.text_muted)),
                Span::styled(value, Style::default().fg(theme.accent)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Esc/Enter: Back",
            Style::default().fg(theme.text_muted),
        )));

        let block = Block::default()
            .title(format!(" {} ", intent.chart_type))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn intent() -> NavigationIntent {
        NavigationIntent {
            chart_id: "rashi-d1".to_string(),
            chart_type: "rashi".to_string(),
            title: "Rashi Chart (D1)".to_string(),
            energy_type: "Solar".to_string(),
            description: "Birth chart".to_string(),
            is_premium: "false".to_string(),
            power_level: 95,
        }
    }

    #[test]
    fn test_navigate_opens_view() {
        let mut view = DetailView::new();
        assert!(!view.is_open());

        view.navigate(&intent());
        assert!(view.is_open());
        assert_eq!(view.intent(), Some(&intent()));
    }

    #[test]
    fn test_escape_closes_view() {
        let mut view = DetailView::new();
        view.navigate(&intent());

        let event = view.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(event, Some(ComponentEvent::Closed));
        assert!(view.should_close());
        assert!(!view.is_open());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut view = DetailView::new();
        view.navigate(&intent());

        let event = view.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(event, None);
        assert!(view.is_open());
    }
}
