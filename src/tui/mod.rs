//! Terminal user interface for the catalog screen.
//!
//! [`ScreenState`] owns the selection, the card cursor, and the popups. Every
//! change of selection re-derives the [`RenderTree`]; drawing only reads it.

pub mod catalog_view;
pub mod component;
pub mod detail_view;
pub mod help_overlay;
pub mod menu;
pub mod motion;
pub mod status_bar;
pub mod theme;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::navigation::{dispatch_to, DispatchOutcome};
use crate::render::{render as derive_tree, ItemCard, RenderTree};
use crate::selection::SelectionState;
use crate::tokens::DesignTokens;

pub use component::{Component, ComponentEvent};
pub use detail_view::DetailView;
pub use menu::{Menu, MenuConfig};
pub use motion::{Orbit, RefreshIndicator, Tween};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Which popup has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Item detail view
    Detail,
    /// Side menu
    Menu,
    /// Keyboard shortcuts
    Help,
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral information
    Info,
    /// Completed action
    Success,
    /// Something was ignored or failed
    Warning,
}

/// Status line contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Severity
    pub kind: StatusKind,
    /// Text
    pub text: String,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }
}

/// State of the catalog screen.
pub struct ScreenState<'a> {
    catalog: &'a Catalog,
    tokens: &'a DesignTokens,
    selection: SelectionState,
    tree: RenderTree,
    cursor: usize,
    /// Tab underline animation, restarted on every tab change
    pub underline: Tween,
    /// Ambient ornament beside the status line
    pub orbit: Orbit,
    /// Refresh indicator while a refresh is showing
    pub refresh: Option<RefreshIndicator>,
    /// Opaque menu payload
    pub menu_config: MenuConfig,
    /// Open side menu
    pub menu: Option<Menu>,
    /// Detail view collaborator
    pub detail: DetailView,
    /// Popup with focus
    pub active_popup: Option<PopupType>,
    /// Status line
    pub status: StatusMessage,
    /// Active palette
    pub theme: Theme,
    /// Loaded configuration
    pub config: Config,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl<'a> ScreenState<'a> {
    /// Creates the screen with the first tab selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has no tabs or a design token is missing.
    pub fn new(catalog: &'a Catalog, tokens: &'a DesignTokens, config: Config) -> Result<Self> {
        let selection = SelectionState::new(catalog.tab_count())?;
        let tree = derive_tree(catalog.tabs(), selection.active_tab_index(), tokens)?;
        let now = Instant::now();
        let underline = Tween::from_transition(tree.transition, now);
        let orbit = Orbit::start(tokens, now)?;
        let theme = Theme::from_mode(config.ui.theme_mode);
        let active_popup = config.ui.show_help_on_startup.then_some(PopupType::Help);

        Ok(Self {
            catalog,
            tokens,
            selection,
            tree,
            cursor: 0,
            underline,
            orbit,
            refresh: None,
            menu_config: MenuConfig::from_profile(&config.profile),
            menu: None,
            detail: DetailView::new(),
            active_popup,
            status: StatusMessage::info(format!(
                "{} services in {} sections across {} tabs",
                catalog.item_count(),
                catalog.section_count(),
                catalog.tab_count()
            )),
            theme,
            config,
            should_quit: false,
        })
    }

    /// Current render tree.
    #[must_use]
    pub const fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Active tab index.
    #[must_use]
    pub const fn active_tab_index(&self) -> usize {
        self.selection.active_tab_index()
    }

    /// Card cursor within the active tab.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The card under the cursor.
    #[must_use]
    pub fn selected_card(&self) -> Option<&ItemCard> {
        self.tree.cards().nth(self.cursor)
    }

    fn rebuild(&mut self) -> Result<()> {
        self.tree = derive_tree(
            self.catalog.tabs(),
            self.selection.active_tab_index(),
            self.tokens,
        )?;
        self.cursor = 0;
        self.underline = Tween::from_transition(self.tree.transition, Instant::now());
        Ok(())
    }

    /// Selects a tab. Out-of-range indices leave the screen unchanged.
    pub fn select_tab(&mut self, index: usize) -> Result<()> {
        if self.selection.is_active(index) {
            return Ok(());
        }
        if let Err(e) = self.selection.select(index) {
            self.status = StatusMessage::warning(e.to_string());
            return Ok(());
        }
        self.rebuild()
    }

    /// Moves to the next tab, wrapping.
    pub fn next_tab(&mut self) -> Result<()> {
        self.selection.next();
        self.rebuild()
    }

    /// Moves to the previous tab, wrapping.
    pub fn previous_tab(&mut self) -> Result<()> {
        self.selection.previous();
        self.rebuild()
    }

    /// Moves the card cursor by `delta`, clamped to the visible cards.
    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.tree.card_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
    }

    /// Dispatches the card under the cursor to the detail view.
    pub fn activate_selected(&mut self) -> Option<DispatchOutcome> {
        let location = self.selected_card()?.location;
        let item = self.catalog.item_at(location)?;
        let outcome = dispatch_to(item, &mut self.detail);

        match &outcome {
            DispatchOutcome::Navigate(intent) => {
                self.active_popup = Some(PopupType::Detail);
                self.status = StatusMessage::success(format!("Opened {}", intent.title));
            }
            DispatchOutcome::Fallback(fallback) => {
                self.status = StatusMessage::warning(format!(
                    "{} has no detail view yet ({})",
                    fallback.title, fallback.reason
                ));
            }
        }
        Some(outcome)
    }

    /// Starts the refresh indicator.
    pub fn start_refresh(&mut self, now: Instant) -> Result<()> {
        self.refresh = Some(RefreshIndicator::start(self.tokens, now)?);
        debug!("refresh started");
        Ok(())
    }

    /// Advances timed state. Clears the refresh indicator once it has run.
    pub fn tick(&mut self, now: Instant) {
        if self.refresh.is_some_and(|r| r.is_done(now)) {
            self.refresh = None;
            self.status = StatusMessage::success("Catalog is up to date");
        }
    }

    /// Opens or closes the side menu.
    pub fn toggle_menu(&mut self) {
        if self.active_popup == Some(PopupType::Menu) {
            self.close_popup();
        } else {
            self.menu = Some(Menu::new(self.menu_config.clone()));
            self.active_popup = Some(PopupType::Menu);
        }
    }

    /// Opens or closes the help overlay.
    pub fn toggle_help(&mut self) {
        self.active_popup = if self.active_popup == Some(PopupType::Help) {
            None
        } else {
            Some(PopupType::Help)
        };
    }

    fn close_popup(&mut self) {
        match self.active_popup.take() {
            Some(PopupType::Menu) => self.menu = None,
            Some(PopupType::Detail) => self.detail.close(),
            Some(PopupType::Help) | None => {}
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut ScreenState<'_>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("catalog screen started");
    loop {
        state.tick(Instant::now());

        terminal.draw(|f| render(f, state))?;

        // Short poll keeps the underline and refresh animations smooth
        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(state, key)?;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }
    info!("catalog screen closed");
    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &ScreenState<'_>) {
    let theme = &state.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let progress = state.underline.progress(Instant::now());
    catalog_view::render_tab_bar(f, chunks[0], &state.tree, progress, theme);
    catalog_view::render_content(f, chunks[1], &state.tree, state.cursor, theme);
    StatusBar::render(f, chunks[2], state, theme);

    match state.active_popup {
        Some(PopupType::Detail) => state.detail.render(f, centered_rect(70, 70, f.area()), theme),
        Some(PopupType::Menu) => {
            if let Some(menu) = &state.menu {
                menu.render(f, side_rect(32, f.area()), theme);
            }
        }
        Some(PopupType::Help) => {
            help_overlay::HelpOverlay::render(f, centered_rect(60, 60, f.area()), theme);
        }
        None => {}
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Left-docked panel of fixed width.
fn side_rect(width: u16, r: Rect) -> Rect {
    Rect {
        width: width.min(r.width),
        ..r
    }
}

/// Handle keyboard input events
pub fn handle_key_event(state: &mut ScreenState<'_>, key: KeyEvent) -> Result<()> {
    match state.active_popup {
        Some(PopupType::Detail) => {
            if let Some(ComponentEvent::Closed) = state.detail.handle_input(key) {
                state.active_popup = None;
            }
            return Ok(());
        }
        Some(PopupType::Menu) => {
            let event = state.menu.as_mut().and_then(|menu| menu.handle_input(key));
            match event {
                Some(ComponentEvent::MenuItemPressed(label)) => {
                    debug!(entry = %label, "menu entry pressed");
                    state.status = StatusMessage::info(format!("Menu: {label}"));
                    state.close_popup();
                }
                Some(ComponentEvent::Closed) => state.close_popup(),
                None => {}
            }
            return Ok(());
        }
        Some(PopupType::Help) => {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
                state.active_popup = None;
            }
            return Ok(());
        }
        None => {}
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => state.next_tab()?,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => state.previous_tab()?,
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            state.select_tab(index)?;
        }
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(-1),
        KeyCode::PageDown => state.move_cursor(5),
        KeyCode::PageUp => state.move_cursor(-5),
        KeyCode::Enter => {
            if state.activate_selected().is_none() {
                warn!("no card to activate");
            }
        }
        KeyCode::Char('r') => state.start_refresh(Instant::now())?,
        KeyCode::Char('m') => state.toggle_menu(),
        KeyCode::Char('?') => state.toggle_help(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn quiet_config() -> Config {
        let mut config = Config::default();
        config.ui.show_help_on_startup = false;
        config
    }

    fn screen<'a>(catalog: &'a Catalog, tokens: &'a DesignTokens) -> ScreenState<'a> {
        ScreenState::new(catalog, tokens, quiet_config()).unwrap()
    }

    #[test]
    fn test_starts_on_first_tab() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let state = screen(&catalog, &tokens);
        assert_eq!(state.active_tab_index(), 0);
        assert_eq!(state.tree().selected_tab().map(|t| t.index), Some(0));
        assert_eq!(state.active_popup, None);
    }

    #[test]
    fn test_help_shown_on_startup_when_configured() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let state = ScreenState::new(&catalog, &tokens, Config::default()).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::Help));
    }

    #[test]
    fn test_reselecting_active_tab_keeps_cursor() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        state.move_cursor(1);
        assert_eq!(state.cursor(), 1);

        state.select_tab(0).unwrap();
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_tab_keys_wrap() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        let count = catalog.tab_count();

        handle_key_event(&mut state, key(KeyCode::BackTab)).unwrap();
        assert_eq!(state.active_tab_index(), count - 1);
        handle_key_event(&mut state, key(KeyCode::Tab)).unwrap();
        assert_eq!(state.active_tab_index(), 0);
    }

    #[test]
    fn test_digit_selects_tab_and_resets_cursor() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        state.move_cursor(1);
        assert_eq!(state.cursor(), 1);

        handle_key_event(&mut state, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(state.active_tab_index(), 1);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.tree().content.as_ref().map(|c| c.tab_index), Some(1));
    }

    #[test]
    fn test_out_of_range_digit_keeps_state() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        handle_key_event(&mut state, key(KeyCode::Char('2'))).unwrap();
        let before = state.tree().clone();

        handle_key_event(&mut state, key(KeyCode::Char('9'))).unwrap();
        assert_eq!(state.active_tab_index(), 1);
        assert_eq!(state.tree(), &before);
        assert_eq!(state.status.kind, StatusKind::Warning);
    }

    #[test]
    fn test_cursor_clamps() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        state.move_cursor(-3);
        assert_eq!(state.cursor(), 0);
        state.move_cursor(1000);
        assert_eq!(state.cursor(), state.tree().card_count() - 1);
    }

    #[test]
    fn test_enter_on_routable_card_opens_detail() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        let first = state.selected_card().unwrap().clone();
        assert!(first.routable);

        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::Detail));
        let intent = state.detail.intent().unwrap();
        assert_eq!(intent.title, first.title);

        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert_eq!(state.active_popup, None);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_enter_on_informational_card_stays_on_screen() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        state.select_tab(1).unwrap();
        assert!(!state.selected_card().unwrap().routable);

        let outcome = state.activate_selected().unwrap();
        assert!(matches!(outcome, DispatchOutcome::Fallback(_)));
        assert_eq!(state.active_popup, None);
        assert!(state.detail.intent().is_none());
        assert_eq!(state.status.kind, StatusKind::Warning);
    }

    #[test]
    fn test_refresh_clears_after_timing() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        let start = Instant::now();
        state.start_refresh(start).unwrap();
        assert!(state.refresh.is_some());

        state.tick(start + Duration::from_millis(10));
        assert!(state.refresh.is_some());

        let refresh = tokens
            .duration(crate::tokens::names::TIMING_REFRESH)
            .unwrap();
        state.tick(start + refresh);
        assert!(state.refresh.is_none());
        assert_eq!(state.status.kind, StatusKind::Success);
    }

    #[test]
    fn test_menu_receives_profile_untouched() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut config = quiet_config();
        config.profile.display_name = Some("Asha".to_string());
        let mut state = ScreenState::new(&catalog, &tokens, config.clone()).unwrap();

        handle_key_event(&mut state, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::Menu));
        assert_eq!(
            state.menu.as_ref().map(|m| &m.config().profile),
            Some(&config.profile)
        );

        handle_key_event(&mut state, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(state.active_popup, None);
        assert!(state.menu.is_none());
    }

    #[test]
    fn test_menu_press_reports_label() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        handle_key_event(&mut state, key(KeyCode::Char('m'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert_eq!(state.active_popup, None);
        assert_eq!(state.status.text, "Menu: Profile");
    }

    #[test]
    fn test_help_toggles() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        handle_key_event(&mut state, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::Help));
        handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap();
        assert!(!state.should_quit);
        handle_key_event(&mut state, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(state.active_popup, None);
    }

    #[test]
    fn test_quit() {
        let (catalog, tokens) = (Catalog::default(), DesignTokens::default());
        let mut state = screen(&catalog, &tokens);
        handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap();
        assert!(state.should_quit);
    }
}
