//! Side menu popup.
//!
//! The catalog screen never interprets the menu's contents. It builds a
//! [`MenuConfig`] from the profile once and hands it to the menu unchanged;
//! presses come back as plain labels.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;
use crate::config::ProfileConfig;

/// Default menu entries.
pub const MENU_ENTRIES: [&str; 4] = ["Profile", "Saved Charts", "Settings", "About"];

/// Opaque menu payload handed through from the screen's owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Profile header
    pub profile: ProfileConfig,
    /// Entry labels in display order
    pub entries: Vec<String>,
}

impl MenuConfig {
    /// Menu with the default entries for `profile`.
    #[must_use]
    pub fn from_profile(profile: &ProfileConfig) -> Self {
        Self {
            profile: profile.clone(),
            entries: MENU_ENTRIES.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

/// Side menu component.
#[derive(Debug, Clone)]
pub struct Menu {
    config: MenuConfig,
    selected: usize,
    closed: bool,
}

impl Menu {
    /// Opens a menu over `config`.
    #[must_use]
    pub const fn new(config: MenuConfig) -> Self {
        Self {
            config,
            selected: 0,
            closed: false,
        }
    }

    /// The payload this menu was opened with.
    #[must_use]
    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Highlighted entry index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }
}

impl Component for Menu {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        let count = self.config.entries.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.selected = (self.selected + count - 1) % count;
                None
            }
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.selected = (self.selected + 1) % count;
                None
            }
            KeyCode::Enter => self
                .config
                .entries
                .get(self.selected)
                .map(|label| ComponentEvent::MenuItemPressed(label.clone())),
            KeyCode::Esc | KeyCode::Char('m' | 'q') => {
                self.closed = true;
                Some(ComponentEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let name = self
            .config
            .profile
            .display_name
            .as_deref()
            .unwrap_or("Seeker");
        let mut items = vec![ListItem::new(Line::from(Span::styled(
            name.to_string(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )))];
        if let Some(sign) = &self.config.profile.sun_sign {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("☉ {sign}"),
                Style::default().fg(theme.text_secondary),
            ))));
        }
        items.push(ListItem::new(""));

        for (i, entry) in self.config.entries.iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let marker = if i == self.selected { "▶ " } else { "  " };
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{marker}{entry}"),
                style,
            ))));
        }

        let block = Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));

        f.render_widget(Clear, area);
        f.render_widget(List::new(items).block(block), area);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
