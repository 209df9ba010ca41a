//! The lesson path as a full-screen ratatui app.
//!
//! [`PlayApp`] holds all state and is driven by key codes, so it can be
//! exercised without a terminal. [`run_play`] owns the terminal lifecycle.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::app::AppContext;
use crate::core::{Lesson, LessonKind, SharedEngine};
use crate::error::{EwError, Result};
use crate::navigation::{Navigator, Screen, Tab};
use crate::seed::{SeedCatalog, Wallet, last_week_rank, seed_leaderboard};

const LOCKED_MESSAGE: &str = "🔒 Finish the previous lesson to unlock this one";

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct PlayApp {
    navigator: Navigator,
    engine: SharedEngine,
    seed: SeedCatalog,
    wallet: Wallet,
    selected: usize,
    status: Option<String>,
    show_hints: bool,
}

impl PlayApp {
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            navigator: Navigator::new(),
            engine: ctx.engine.clone(),
            seed: ctx.seed.clone(),
            wallet: ctx.wallet,
            selected: 0,
            status: None,
            show_hints: ctx.config.display.show_hints,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> &Screen {
        self.navigator.current()
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Flow {
        if code == KeyCode::Char('q') {
            return Flow::Quit;
        }
        self.status = None;
        match self.navigator.current().clone() {
            Screen::Path => return self.path_key(code),
            Screen::Lesson { lesson_id } => self.lesson_key(&lesson_id, code),
            Screen::Leaderboard | Screen::Stats | Screen::Tab { .. } => {
                if matches!(code, KeyCode::Esc | KeyCode::Backspace) {
                    self.navigator.back();
                } else {
                    self.tab_key(code);
                }
            }
        }
        Flow::Continue
    }

    fn path_key(&mut self, code: KeyCode) -> Flow {
        let count = self.engine.snapshot().len();
        match code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Down | KeyCode::Char('j') if self.selected + 1 < count => {
                self.selected += 1;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.open_selected(),
            KeyCode::Char('s') => self.navigator.open_stats(),
            _ => self.tab_key(code),
        }
        Flow::Continue
    }

    fn lesson_key(&mut self, lesson_id: &str, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ' | 'c') => {
                let outcome = self.engine.complete_step(lesson_id);
                if let Some(next) = outcome.newly_unlocked {
                    self.status = Some(format!("Lesson finished! {next} unlocked"));
                } else if outcome.lesson.as_ref().is_some_and(Lesson::is_finished) {
                    self.status = Some("All stars earned".to_string());
                }
            }
            KeyCode::Char('h') => self.show_hints = !self.show_hints,
            KeyCode::Esc | KeyCode::Backspace => self.navigator.back(),
            _ => {}
        }
    }

    /// Number keys pick bottom-nav tabs; `l` is the leaderboard shortcut.
    fn tab_key(&mut self, code: KeyCode) {
        let tab = match code {
            KeyCode::Char('l') => Some(Tab::Leaderboard),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|digit| usize::try_from(digit).ok())
                .and_then(|digit| digit.checked_sub(1))
                .and_then(|idx| Tab::ALL.get(idx).copied()),
            _ => None,
        };
        if let Some(tab) = tab {
            self.navigator.select_tab(tab);
        }
    }

    fn open_selected(&mut self) {
        let catalog = self.engine.snapshot();
        let Some(lesson) = catalog.lessons().get(self.selected) else {
            return;
        };
        if !self.navigator.open_lesson(lesson) {
            self.status = Some(LOCKED_MESSAGE.to_string());
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(frame.area());

        self.draw_header(frame, header);
        match self.navigator.current() {
            Screen::Path => self.draw_path(frame, body),
            Screen::Lesson { lesson_id } => self.draw_lesson(frame, body, lesson_id),
            Screen::Leaderboard => draw_leaderboard(frame, body),
            Screen::Stats => self.draw_stats(frame, body),
            Screen::Tab { tab } => draw_placeholder(frame, body, *tab),
        }
        self.draw_footer(frame, footer);
    }

    fn draw_header(&self, frame: &mut Frame<'_>, area: Rect) {
        let chips = self
            .wallet
            .chips()
            .iter()
            .map(|(label, value)| format!("{label} {value}"))
            .collect::<Vec<_>>()
            .join("   ");
        let progress = self.engine.progress();
        let line = Line::from(vec![
            Span::raw(chips),
            Span::raw("   "),
            Span::styled(
                format!("Progress: {}", progress.summary()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Everyday Winners · {} ", self.navigator.current().title()));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn draw_path(&self, frame: &mut Frame<'_>, area: Rect) {
        let catalog = self.engine.snapshot();
        let mut items = Vec::new();
        let mut index_of_row = Vec::new();
        let mut last_section = None;
        for (idx, lesson) in catalog.iter().enumerate() {
            if last_section != Some(lesson.section) {
                last_section = Some(lesson.section);
                items.push(ListItem::new(Line::styled(
                    self.seed.section_label(lesson.section),
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )));
                index_of_row.push(None);
            }
            items.push(ListItem::new(tile_line(lesson, idx)));
            index_of_row.push(Some(idx));
        }
        let selected_row = index_of_row
            .iter()
            .position(|row| *row == Some(self.selected));

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("› ");
        let mut state = ListState::default().with_selected(selected_row);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_lesson(&self, frame: &mut Frame<'_>, area: Rect, lesson_id: &str) {
        let catalog = self.engine.snapshot();
        let Some(lesson) = catalog.get(lesson_id) else {
            return;
        };
        let mut lines = vec![
            Line::styled(
                lesson.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(format!("{} {}", lesson.kind.glyph(), lesson.kind)),
            Line::raw(""),
            Line::styled(
                lesson.star_glyphs(),
                Style::default().fg(Color::Yellow),
            ),
            Line::raw(format!("{}/{} stars", lesson.stars, lesson.total)),
            Line::raw(""),
        ];
        if self.show_hints {
            lines.push(Line::styled(
                format!("Hint: {}", lesson.hint),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(
            "[ Complete Step ★ ]",
            Style::default()
                .fg(kind_color(lesson.kind))
                .add_modifier(Modifier::BOLD),
        ));
        let block = Block::default().borders(Borders::ALL);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn draw_stats(&self, frame: &mut Frame<'_>, area: Rect) {
        let catalog = self.engine.snapshot();
        let progress = self.engine.progress();
        let finished = catalog.iter().filter(|lesson| lesson.is_finished()).count();
        let [gauge_area, detail_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Stars "))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(u16::try_from(progress.percent.min(100)).unwrap_or(100))
            .label(progress.summary());
        frame.render_widget(gauge, gauge_area);

        let lines = vec![
            Line::raw(format!("Lessons finished: {finished}/{}", catalog.len())),
            Line::raw(format!("Last week's rank: #{}", last_week_rank())),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            detail_area,
        );
    }

    fn draw_footer(&self, frame: &mut Frame<'_>, area: Rect) {
        let help = match self.navigator.current() {
            Screen::Path => "↑/↓ move · Enter open · s stats · l leaderboard · 1-6 tabs · q quit",
            Screen::Lesson { .. } => "Enter complete step · h hint · Esc back · q quit",
            _ => "Esc back · 1-6 tabs · q quit",
        };
        let tabs = Tab::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| format!("{} {}", idx + 1, tab.icon()))
            .collect::<Vec<_>>()
            .join("  ");
        let lines = vec![
            Line::raw(self.status.clone().unwrap_or_else(|| help.to_string())),
            Line::styled(tabs, Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

const fn kind_color(kind: LessonKind) -> Color {
    match kind {
        LessonKind::Core => Color::Rgb(0x15, 0xc2, 0xb8),
        LessonKind::Reading => Color::Rgb(0x8a, 0x5c, 0xf6),
        LessonKind::Listening => Color::Rgb(0xf9, 0x73, 0x16),
        LessonKind::Video => Color::Rgb(0xf4, 0x3f, 0x5e),
    }
}

fn tile_line(lesson: &Lesson, position: usize) -> Line<'static> {
    let indent = if position % 2 == 0 { "  " } else { "        " };
    if !lesson.unlocked {
        return Line::styled(
            format!("{indent}🔒 {}  {}", lesson.title, lesson.star_glyphs()),
            Style::default().fg(Color::DarkGray),
        );
    }
    Line::from(vec![
        Span::raw(format!("{indent}{} ", lesson.kind.glyph())),
        Span::styled(
            lesson.title.clone(),
            Style::default().fg(kind_color(lesson.kind)),
        ),
        Span::styled(
            format!("  {}", lesson.star_glyphs()),
            Style::default().fg(Color::Yellow),
        ),
    ])
}

fn draw_leaderboard(frame: &mut Frame<'_>, area: Rect) {
    let mut lines: Vec<Line<'_>> = seed_leaderboard()
        .into_iter()
        .map(|entry| {
            Line::raw(format!(
                "{:>2}. {} {:<18} {:>5} XP",
                entry.rank, entry.avatar, entry.name, entry.xp
            ))
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!(
        "You finished #{} last week.",
        last_week_rank()
    )));
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_placeholder(frame: &mut Frame<'_>, area: Rect, tab: Tab) {
    let text = format!("{} {}\n\nNothing here yet.", tab.icon(), tab.label());
    frame.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Run the interactive path until the user quits.
pub fn run_play(ctx: &AppContext) -> Result<()> {
    enable_raw_mode().map_err(|err| {
        EwError::Terminal(format!(
            "failed to enable raw mode: {err} (is this a real terminal?)"
        ))
    })?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(EwError::Terminal(format!("failed to initialize terminal: {err}")));
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = PlayApp::new(ctx);
    let result = event_loop(&mut terminal, &mut app);
    let cleanup = restore_terminal(&mut terminal);
    debug!(progress = %ctx.engine.progress().summary(), "play session ended");
    result.and(cleanup)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut PlayApp,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
