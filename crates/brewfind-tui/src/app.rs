//! Application core: event loop, action dispatch, status bar, help overlay.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use brewfind_core::{BrewerySource, LoadStatus};

use crate::action::Action;
use crate::component::Component;
use crate::data_bridge;
use crate::event::{Event, EventReader};
use crate::screens::finder::FinderScreen;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App<S> {
    /// Taken by `run` when the fetch task is spawned.
    source: Option<S>,
    screen: FinderScreen,
    running: bool,
    help_visible: bool,
    tick_rate: Duration,
    render_rate: Duration,
    /// Action sender: the data bridge reports through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver: main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl<S: BrewerySource + 'static> App<S> {
    pub fn new(source: S, tick_rate: Duration, render_rate: Duration) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            source: Some(source),
            screen: FinderScreen::new(),
            running: true,
            help_visible: false,
            tick_rate,
            render_rate,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::enter()?;

        // The one fetch. If the view exits first, the task is abandoned.
        if let Some(source) = self.source.take() {
            tokio::spawn(data_bridge::spawn_data_bridge(
                source,
                self.action_tx.clone(),
            ));
        }

        let mut events = EventReader::new(self.tick_rate, self.render_rate);

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }

            // The throbber is the only animation
            events.animate(self.screen.finder().status().is_loading());
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// everything else is delegated to the screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                KeyCode::Char('q') => Ok(Some(Action::Quit)),
                _ => Ok(None),
            };
        }

        match key.code {
            KeyCode::Tab => return Ok(Some(Action::FocusNext)),
            KeyCode::BackTab => return Ok(Some(Action::FocusPrev)),
            _ => {}
        }

        // `q` and `?` are ordinary text while the search box has focus
        if !self.screen.captures_text() {
            match key.code {
                KeyCode::Char('q') => return Ok(Some(Action::Quit)),
                KeyCode::Char('?') => return Ok(Some(Action::ToggleHelp)),
                _ => {}
            }
        }

        self.screen.handle_key_event(key)
    }

    /// Process a single action: update app state and propagate to the screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            // Render is handled in the main loop, not here
            Action::Render => {}

            other => {
                if let Action::Finder(event) = other {
                    debug!(?event, "finder event");
                }
                if let Some(follow_up) = self.screen.update(other)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }

        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let [content_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        self.screen.render(frame, content_area);
        self.render_status_bar(frame, status_area);

        if self.help_visible {
            render_help_overlay(frame, area);
        }
    }

    /// Render the bottom status bar with load status and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let indicator = match self.screen.finder().status() {
            LoadStatus::Idle => Span::styled("○ idle", theme::key_hint()),
            LoadStatus::Loading => {
                Span::styled("◐ loading", Style::default().fg(theme::ELECTRIC_YELLOW))
            }
            LoadStatus::Loaded => {
                Span::styled("● loaded", Style::default().fg(theme::SUCCESS_GREEN))
            }
            LoadStatus::Failed(_) => {
                Span::styled("✗ fetch failed", Style::default().fg(theme::ERROR_RED))
            }
        };

        let hints = Span::styled(" │ Tab focus  ? help  q quit", theme::key_hint());

        let line = Line::from(vec![Span::raw(" "), indicator, hints]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Render the help overlay centered on screen.
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_width = 56u16.min(area.width.saturating_sub(4));
    let help_height = 20u16.min(area.height.saturating_sub(2));

    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BG_DARK)),
        help_area,
    );

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused());

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let entry = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), theme::key_hint_key()),
            Span::styled(text, theme::key_hint()),
        ])
    };
    let section = |title: &'static str| {
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default().fg(theme::NEON_CYAN),
        ))
    };

    let help_text = vec![
        section("Filters"),
        entry("Tab/S-Tab", "Next / previous field"),
        entry("←/→ h/l", "Change state or city"),
        entry("type", "Edit search (when focused)"),
        entry("Backspace", "Delete last character"),
        entry("Ctrl+U", "Clear search"),
        Line::from(""),
        section("List"),
        entry("j/k ↑/↓", "Move up/down"),
        entry("g/G", "Top / bottom"),
        entry("Ctrl+d/u", "Page down / up"),
        Line::from(""),
        section("Global"),
        entry("?", "This help"),
        entry("q Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "                      Esc or ? to close",
            theme::key_hint(),
        )),
    ];

    frame.render_widget(Paragraph::new(help_text), inner);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use brewfind_core::{Brewery, BreweryType, CoreError, FinderEvent};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    struct Canned(Vec<Brewery>);

    impl BrewerySource for Canned {
        async fn fetch_breweries(&self) -> Result<Vec<Brewery>, CoreError> {
            Ok(self.0.clone())
        }
    }

    fn app() -> App<Canned> {
        App::new(
            Canned(Vec::new()),
            Duration::from_millis(250),
            Duration::from_millis(33),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render_text(app: &App<Canned>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = app();
        assert_eq!(app.handle_key_event(key(KeyCode::Char('q'))).unwrap(), Some(Action::Quit));
        assert_eq!(
            app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .unwrap(),
            Some(Action::Quit)
        );

        app.process_action(&Action::Quit).unwrap();
        assert!(!app.running);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = app();
        assert_eq!(app.handle_key_event(key(KeyCode::Tab)).unwrap(), Some(Action::FocusNext));
        assert_eq!(
            app.handle_key_event(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))
                .unwrap(),
            Some(Action::FocusPrev)
        );
    }

    #[test]
    fn search_box_swallows_q() {
        let mut app = app();
        app.process_action(&Action::FocusNext).unwrap();
        app.process_action(&Action::FocusNext).unwrap();

        assert_eq!(
            app.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::Finder(FinderEvent::SetSearch("q".into())))
        );
        // Ctrl+C still quits from the search box
        assert_eq!(
            app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .unwrap(),
            Some(Action::Quit)
        );
    }

    #[test]
    fn help_overlay_toggles() {
        let mut app = app();
        let toggle = app.handle_key_event(key(KeyCode::Char('?'))).unwrap().unwrap();
        app.process_action(&toggle).unwrap();
        assert!(app.help_visible);
        assert!(render_text(&app).contains("Keyboard Shortcuts"));

        // Keys other than the close keys are ignored while help is up
        assert_eq!(app.handle_key_event(key(KeyCode::Right)).unwrap(), None);
        let close = app.handle_key_event(key(KeyCode::Esc)).unwrap().unwrap();
        app.process_action(&close).unwrap();
        assert!(!app.help_visible);
    }

    #[test]
    fn status_bar_follows_load_status() {
        let mut app = app();
        assert!(render_text(&app).contains("○ idle"));

        app.process_action(&Action::Finder(FinderEvent::FetchStarted)).unwrap();
        assert!(render_text(&app).contains("◐ loading"));

        app.process_action(&Action::Finder(FinderEvent::FetchFailed("Network Error".into())))
            .unwrap();
        let text = render_text(&app);
        assert!(text.contains("✗ fetch failed"));
        assert!(text.contains("Error: Network Error"));
    }

    #[test]
    fn fetched_results_reach_the_screen() {
        let mut app = app();
        let list = vec![Brewery::new("1", "Hoppy Place", "Austin", "Texas", BreweryType::Micro)];
        app.process_action(&Action::Finder(FinderEvent::FetchSucceeded(list)))
            .unwrap();

        let text = render_text(&app);
        assert!(text.contains("● loaded"));
        assert!(text.contains("Total Number of Breweries: 1"));
        assert!(text.contains("Hoppy Place"));
    }
}
