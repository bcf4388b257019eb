//! Finder screen: state/city selectors, search box, total count, load
//! banner, and the filtered brewery list with a detail line.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use brewfind_core::{Brewery, Finder, FinderEvent, LoadStatus};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::selector;

const HEADING: &str = " Brewery Finder ";
const ALL_STATES: &str = "All States";
const ALL_CITIES: &str = "All Cities";
const SEARCH_PLACEHOLDER: &str = "Search for Breweries";
const PAGE: usize = 10;

/// Which input receives keys. Tab order follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    State,
    City,
    Search,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::State => Self::City,
            Self::City => Self::Search,
            Self::Search => Self::List,
            Self::List => Self::State,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::State => Self::List,
            Self::City => Self::State,
            Self::Search => Self::City,
            Self::List => Self::Search,
        }
    }
}

pub struct FinderScreen {
    finder: Finder,
    /// Cached query results, recomputed whenever the finder changes.
    filtered: Vec<Arc<Brewery>>,
    states: Vec<String>,
    cities: Vec<String>,
    focus: Focus,
    table_state: TableState,
    throbber_state: throbber_widgets_tui::ThrobberState,
}

impl FinderScreen {
    pub fn new() -> Self {
        Self {
            finder: Finder::new(),
            filtered: Vec::new(),
            states: Vec::new(),
            cities: Vec::new(),
            focus: Focus::default(),
            table_state: TableState::default(),
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn finder(&self) -> &Finder {
        &self.finder
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Re-run the filter and option queries after a finder change.
    fn refresh(&mut self) {
        self.filtered = self.finder.filtered();
        self.states = self.finder.states();
        self.cities = self.finder.cities();

        if self.filtered.is_empty() {
            self.table_state.select(None);
        } else {
            let idx = self.selected_index().min(self.filtered.len() - 1);
            self.table_state.select(Some(idx));
        }
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn selected_brewery(&self) -> Option<&Arc<Brewery>> {
        self.table_state
            .selected()
            .and_then(|i| self.filtered.get(i))
    }

    fn select(&mut self, idx: usize) {
        if self.filtered.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state
                .select(Some(idx.min(self.filtered.len() - 1)));
        }
    }

    fn move_down(&mut self, by: usize) {
        self.select(self.selected_index().saturating_add(by));
    }

    fn move_up(&mut self, by: usize) {
        self.select(self.selected_index().saturating_sub(by));
    }

    // ── Key handling per focus ──────────────────────────────────

    fn state_key(&self, key: KeyEvent) -> Option<FinderEvent> {
        let current = &self.finder.selection().state;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                Some(FinderEvent::SelectState(selector::prev(&self.states, current)))
            }
            KeyCode::Right | KeyCode::Char('l') => {
                Some(FinderEvent::SelectState(selector::next(&self.states, current)))
            }
            _ => None,
        }
    }

    fn city_key(&self, key: KeyEvent) -> Option<FinderEvent> {
        if self.finder.selection().state.is_empty() {
            return None;
        }
        let current = &self.finder.selection().city;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                Some(FinderEvent::SelectCity(selector::prev(&self.cities, current)))
            }
            KeyCode::Right | KeyCode::Char('l') => {
                Some(FinderEvent::SelectCity(selector::next(&self.cities, current)))
            }
            _ => None,
        }
    }

    fn search_key(&mut self, key: KeyEvent) -> Option<FinderEvent> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let mut search = self.finder.selection().search.clone();
        match key.code {
            KeyCode::Char('u') if ctrl => Some(FinderEvent::SetSearch(String::new())),
            KeyCode::Char(ch) if !ctrl => {
                search.push(ch);
                Some(FinderEvent::SetSearch(search))
            }
            KeyCode::Backspace => {
                search.pop();
                Some(FinderEvent::SetSearch(search))
            }
            KeyCode::Esc | KeyCode::Enter => {
                self.focus = Focus::List;
                None
            }
            _ => None,
        }
    }

    fn list_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('d') if ctrl => self.move_down(PAGE),
            KeyCode::Char('u') if ctrl => self.move_up(PAGE),
            KeyCode::Char('j') | KeyCode::Down => self.move_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(1),
            KeyCode::Char('g') | KeyCode::Home => self.select(0),
            KeyCode::Char('G') | KeyCode::End => self.select(usize::MAX),
            KeyCode::PageDown => self.move_down(PAGE),
            KeyCode::PageUp => self.move_up(PAGE),
            _ => {}
        }
    }

    // ── Rendering ────────────────────────────────────────────────

    fn render_selectors(&self, frame: &mut Frame, area: Rect) {
        let [state_area, city_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let selection = self.finder.selection();
        let state_focused = self.focus == Focus::State;
        let city_focused = self.focus == Focus::City;

        let state_block = Block::default()
            .title(" State ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_for(state_focused));
        frame.render_widget(
            Paragraph::new(selector::selector_line(
                ALL_STATES,
                &selection.state,
                self.states.len(),
                state_focused,
                true,
            ))
            .block(state_block),
            state_area,
        );

        let city_block = Block::default()
            .title(" City ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_for(city_focused));
        frame.render_widget(
            Paragraph::new(selector::selector_line(
                ALL_CITIES,
                &selection.city,
                self.cities.len(),
                city_focused,
                !selection.state.is_empty(),
            ))
            .block(city_block),
            city_area,
        );
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Search;
        let search = &self.finder.selection().search;

        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_for(focused));

        let cursor = Span::styled(
            if focused { "▎" } else { "" },
            Style::default().fg(theme::ELECTRIC_YELLOW),
        );
        let line = if search.is_empty() {
            Line::from(vec![cursor, Span::styled(SEARCH_PLACEHOLDER, theme::placeholder())])
        } else {
            Line::from(vec![
                Span::styled(search.clone(), Style::default().fg(theme::NEON_CYAN)),
                cursor,
            ])
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let [total_area, banner_area] =
            Layout::horizontal([Constraint::Length(34), Constraint::Min(0)]).areas(area);

        let total = Line::from(vec![
            Span::styled(" Total Number of Breweries: ", theme::table_row()),
            Span::styled(
                self.finder.total().to_string(),
                Style::default()
                    .fg(theme::CORAL)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(total), total_area);

        match self.finder.status() {
            LoadStatus::Loading => {
                let throbber = throbber_widgets_tui::Throbber::default()
                    .label("Loading breweries...")
                    .style(theme::key_hint())
                    .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));
                frame.render_stateful_widget(
                    throbber,
                    banner_area,
                    &mut self.throbber_state.clone(),
                );
            }
            LoadStatus::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(Span::styled(format!("Error: {message}"), theme::error_banner())),
                    banner_area,
                );
            }
            LoadStatus::Idle | LoadStatus::Loaded => {}
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::List;
        let block = Block::default()
            .title(format!(" Breweries ({}) ", self.filtered.len()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_for(focused));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.filtered.is_empty() {
            let note = match self.finder.status() {
                LoadStatus::Idle | LoadStatus::Loading => "",
                _ if self.finder.total() == 0 => "  No breweries loaded",
                _ => "  No breweries match the current filters",
            };
            frame.render_widget(Paragraph::new(Span::styled(note, theme::key_hint())), inner);
            return;
        }

        let header = Row::new(vec![
            Cell::from("Name").style(theme::table_header()),
            Cell::from("City").style(theme::table_header()),
            Cell::from("State").style(theme::table_header()),
            Cell::from("Type").style(theme::table_header()),
        ]);

        let selected = self.table_state.selected();
        let rows: Vec<Row> = self
            .filtered
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let is_selected = focused && selected == Some(i);
                let prefix = if is_selected { "▸" } else { " " };
                Row::new(vec![
                    Cell::from(format!("{prefix}{}", b.name))
                        .style(Style::default().fg(theme::NEON_CYAN)),
                    Cell::from(b.city.clone()),
                    Cell::from(b.state.clone()),
                    Cell::from(b.brewery_type.to_string())
                        .style(Style::default().fg(theme::CORAL)),
                ])
                .style(theme::table_row())
            })
            .collect();

        let widths = [
            Constraint::Min(24),
            Constraint::Length(20),
            Constraint::Length(18),
            Constraint::Length(12),
        ];

        let mut table = Table::new(rows, widths).header(header);
        if focused {
            table = table.row_highlight_style(theme::table_selected());
        }

        let mut state = self.table_state;
        frame.render_stateful_widget(table, inner, &mut state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let Some(b) = self.selected_brewery() else {
            return;
        };

        let field = |label: &'static str, value: Option<&str>| {
            [
                Span::styled(label, theme::key_hint()),
                Span::styled(value.unwrap_or("—").to_owned(), theme::table_row()),
            ]
        };

        let mut spans = vec![Span::raw(" ")];
        spans.extend(field("Street ", b.street.as_deref()));
        spans.push(Span::styled("  │  ", theme::key_hint()));
        spans.extend(field("Postal ", b.postal_code.as_deref()));
        spans.push(Span::styled("  │  ", theme::key_hint()));
        spans.extend(field("Phone ", b.phone.as_deref()));
        spans.push(Span::styled("  │  ", theme::key_hint()));
        spans.extend(field("Web ", b.website_url.as_deref()));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn hints(&self) -> Line<'static> {
        let pairs: &[(&'static str, &'static str)] = match self.focus {
            Focus::State | Focus::City => &[("←/→ ", "choose  "), ("Tab ", "next field")],
            Focus::Search => &[
                ("type ", "to filter  "),
                ("Backspace ", "delete  "),
                ("Ctrl+U ", "clear  "),
                ("Esc ", "to list"),
            ],
            Focus::List => &[
                ("j/k ", "navigate  "),
                ("g/G ", "top/bottom  "),
                ("Ctrl+d/u ", "page  "),
                ("Tab ", "next field"),
            ],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, text) in pairs {
            spans.push(Span::styled(*key, theme::key_hint_key()));
            spans.push(Span::styled(*text, theme::key_hint()));
        }
        Line::from(spans)
    }
}

impl Component for FinderScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let event = match self.focus {
            Focus::State => self.state_key(key),
            Focus::City => self.city_key(key),
            Focus::Search => self.search_key(key),
            Focus::List => {
                self.list_key(key);
                None
            }
        };
        Ok(event.map(Action::Finder))
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Finder(event) => {
                if self.finder.apply(event.clone()) {
                    self.refresh();
                }
            }
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Tick if self.finder.status().is_loading() => {
                self.throbber_state.calc_next();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(HEADING)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [selectors, search, summary, list, detail, hints] = Layout::vertical([
            Constraint::Length(3), // state / city
            Constraint::Length(3), // search box
            Constraint::Length(1), // total + banner
            Constraint::Min(3),    // list
            Constraint::Length(1), // detail line
            Constraint::Length(1), // hints
        ])
        .areas(inner);

        self.render_selectors(frame, selectors);
        self.render_search(frame, search);
        self.render_summary(frame, summary);
        self.render_list(frame, list);
        if self.focus == Focus::List {
            self.render_detail(frame, detail);
        }
        frame.render_widget(Paragraph::new(self.hints()), hints);
    }

    fn captures_text(&self) -> bool {
        self.focus == Focus::Search
    }
}
