//! Application state and main app structure

use anyhow::Result;
use cb_core::comment::{Comment, CommentStore, Draft, DraftField, SubmitOutcome};
use cb_core::config::UiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal browsing mode
    Normal,
    /// Input mode for the comment form
    Insert,
    /// Help mode
    Help,
}

impl Default for AppMode {
    fn default() -> Self {
        AppMode::Normal
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Form field the cursor is in
    pub focus: DraftField,
    /// Status message
    pub message: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// Selected row in the comment list
    pub selected: usize,
    /// Scroll offset for the list view
    pub scroll_offset: usize,
    /// Cursor position in the title field (chars)
    pub title_cursor: usize,
    /// Cursor position in the description field (chars)
    pub description_cursor: usize,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Normal,
            focus: DraftField::Title,
            message: None,
            should_quit: false,
            selected: 0,
            scroll_offset: 0,
            title_cursor: 0,
            description_cursor: 0,
        }
    }
}

/// Main application
pub struct App {
    /// Application state
    pub state: AppState,
    /// The comment store this UI renders and drives
    pub store: CommentStore,
    /// UI configuration
    config: UiConfig,
    /// Color theme
    theme: Theme,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new app around the given store
    pub fn new(store: CommentStore, config: UiConfig) -> Result<Self> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let theme = Theme::by_name(&config.theme);

        Ok(Self {
            state: AppState::new(),
            store,
            config,
            theme,
            terminal,
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        loop {
            // Render
            self.draw()?;

            // Handle input
            if event::poll(Duration::from_millis(100))? {
                if let event::Event::Key(key) = event::read()? {
                    self.handle_input(key)?;
                }
            }

            // Check if should quit
            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the UI
    fn draw(&mut self) -> Result<()> {
        let state = self.state.clone();
        let comments: Vec<Comment> = self.store.comments().to_vec();
        let draft = self.store.draft().clone();
        let editing = self.store.is_editing();
        let theme = self.theme.clone();
        let empty_message = self.config.empty_message.clone();
        let show_help_bar = self.config.show_help_bar;

        self.terminal.draw(|frame| {
            let area = frame.area();

            if state.mode == AppMode::Help {
                render_help(frame, area);
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(6),
                    Constraint::Min(3),
                    Constraint::Length(1),
                ])
                .split(area);

            render_title_bar(frame, chunks[0], &theme);
            render_form(frame, chunks[1], &state, &draft, editing, &theme);
            if comments.is_empty() {
                render_alert(frame, chunks[2], &empty_message, &theme);
            } else {
                render_list(frame, chunks[2], &state, &comments, &theme);
            }
            render_status_bar(frame, chunks[3], &state, comments.len(), editing, show_help_bar);
        })?;
        Ok(())
    }

    /// Handle keyboard input
    fn handle_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.mode {
            AppMode::Normal => self.handle_normal_input(key),
            AppMode::Insert => self.handle_insert_input(key),
            AppMode::Help => self.handle_help_input(key),
        }
    }

    /// Handle input in normal mode
    fn handle_normal_input(&mut self, key: KeyEvent) -> Result<()> {
        self.state.clear_message();
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('?') => self.state.mode = AppMode::Help,

            // List navigation (vim-like)
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('g') => {
                self.state.selected = 0;
                self.ensure_visible();
            }
            KeyCode::Char('G') => {
                self.state.selected = self.store.len().saturating_sub(1);
                self.ensure_visible();
            }

            // Form
            KeyCode::Char('a') | KeyCode::Char('i') => self.enter_form(),

            // Row actions
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected(),
            KeyCode::Char('x') | KeyCode::Char('d') => self.delete_selected(),

            _ => {}
        }
        Ok(())
    }

    /// Handle input in insert mode
    fn handle_insert_input(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Esc only leaves the form; the draft and any active edit stay
            // as they are
            KeyCode::Esc => self.state.mode = AppMode::Normal,
            KeyCode::Tab => self.state.focus = self.state.focus.other(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => {
                let cursor = self.cursor(self.state.focus);
                if cursor > 0 {
                    self.set_cursor(self.state.focus, cursor - 1);
                }
            }
            KeyCode::Right => {
                let field = self.state.focus;
                let char_count = self.store.draft().field(field).chars().count();
                let cursor = self.cursor(field);
                if cursor < char_count {
                    self.set_cursor(field, cursor + 1);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle input in help mode
    fn handle_help_input(&mut self, _key: KeyEvent) -> Result<()> {
        self.state.mode = AppMode::Normal;
        Ok(())
    }

    fn select_next(&mut self) {
        let max = self.store.len().saturating_sub(1);
        if self.state.selected < max {
            self.state.selected += 1;
            self.ensure_visible();
        }
    }

    fn select_prev(&mut self) {
        if self.state.selected > 0 {
            self.state.selected -= 1;
            self.ensure_visible();
        }
    }

    fn ensure_visible(&mut self) {
        // Each row renders as three lines; viewport height is approximate
        let viewport_height = 18;
        let top = self.state.selected * 3;
        if top < self.state.scroll_offset {
            self.state.scroll_offset = top;
        } else if top + 3 > self.state.scroll_offset + viewport_height {
            self.state.scroll_offset = top + 3 - viewport_height;
        }
    }

    /// Move the cursor into the form to draft a new comment
    fn enter_form(&mut self) {
        self.state.mode = AppMode::Insert;
        self.state.focus = DraftField::Title;
        self.state.title_cursor = self.store.draft().title.chars().count();
        self.state.description_cursor = self.store.draft().description.chars().count();
    }

    /// Start editing the selected comment
    fn edit_selected(&mut self) {
        let Some(comment) = self.store.comments().get(self.state.selected).cloned() else {
            self.state.set_message("No comment selected");
            return;
        };
        self.store.begin_edit(&comment);
        self.state.mode = AppMode::Insert;
        self.state.focus = DraftField::Title;
        self.state.title_cursor = comment.title.chars().count();
        self.state.description_cursor = comment.description.chars().count();
    }

    /// Delete the selected comment
    fn delete_selected(&mut self) {
        let Some(comment) = self.store.comments().get(self.state.selected) else {
            self.state.set_message("No comment selected");
            return;
        };
        let id = comment.id.clone();
        if self.store.delete(&id) {
            tracing::debug!(%id, "comment deleted");
            self.state.set_message("Comment deleted");
        }
        self.state.selected = self.state.selected.min(self.store.len().saturating_sub(1));
    }

    /// Submit the form, routing to add or edit by the store's mode
    fn submit_form(&mut self) {
        match self.store.submit() {
            Ok(SubmitOutcome::Added(id)) => {
                tracing::debug!(%id, "comment added");
                self.state.selected = 0;
                self.state.set_message("Comment added");
                self.leave_form();
            }
            Ok(SubmitOutcome::Updated(id)) => {
                tracing::debug!(%id, "comment updated");
                self.state.set_message("Comment updated");
                self.leave_form();
            }
            Ok(SubmitOutcome::TargetMissing) => {
                tracing::warn!("edit target disappeared before saving");
                self.state.set_message("Comment no longer exists");
                self.leave_form();
            }
            Err(err) => {
                // Stay in the form so the input can be corrected
                self.state.set_message(format!("Cannot save: {}", err));
            }
        }
    }

    fn leave_form(&mut self) {
        self.state.mode = AppMode::Normal;
        self.state.focus = DraftField::Title;
        self.state.title_cursor = 0;
        self.state.description_cursor = 0;
        self.ensure_visible();
    }

    fn insert_char(&mut self, c: char) {
        let field = self.state.focus;
        let mut value = self.store.draft().field(field).to_string();
        let cursor = self.cursor(field);
        let byte_pos = char_to_byte_pos(&value, cursor);
        value.insert(byte_pos, c);
        self.store.update_draft(field, value);
        self.set_cursor(field, cursor + 1);
    }

    fn delete_char(&mut self) {
        let field = self.state.focus;
        let cursor = self.cursor(field);
        if cursor == 0 {
            return;
        }
        let mut value = self.store.draft().field(field).to_string();
        let byte_pos = char_to_byte_pos(&value, cursor - 1);
        let char_len = value[byte_pos..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        value.drain(byte_pos..byte_pos + char_len);
        self.store.update_draft(field, value);
        self.set_cursor(field, cursor - 1);
    }

    fn cursor(&self, field: DraftField) -> usize {
        match field {
            DraftField::Title => self.state.title_cursor,
            DraftField::Description => self.state.description_cursor,
        }
    }

    fn set_cursor(&mut self, field: DraftField, pos: usize) {
        match field {
            DraftField::Title => self.state.title_cursor = pos,
            DraftField::Description => self.state.description_cursor = pos,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

// Render functions

fn render_title_bar(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(" Comment Box").style(
            Style::default()
                .bg(theme.bar_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}

fn render_form(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    draft: &Draft,
    editing: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let title_label = if editing { "Title (editing)" } else { "Title" };
    render_input(
        frame,
        chunks[0],
        title_label,
        &draft.title,
        state.mode == AppMode::Insert && state.focus == DraftField::Title,
        editing,
        theme,
    );
    render_input(
        frame,
        chunks[1],
        "Description",
        &draft.description,
        state.mode == AppMode::Insert && state.focus == DraftField::Description,
        editing,
        theme,
    );

    // Place the terminal cursor inside the focused input
    if state.mode == AppMode::Insert {
        let (chunk, value, cursor) = match state.focus {
            DraftField::Title => (chunks[0], &draft.title, state.title_cursor),
            DraftField::Description => (chunks[1], &draft.description, state.description_cursor),
        };
        let width = display_width(value, cursor) as u16;
        let max_x = chunk.x + chunk.width.saturating_sub(2);
        let cursor_x = (chunk.x + 1).saturating_add(width).min(max_x);
        frame.set_cursor_position((cursor_x, chunk.y + 1));
    }
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    editing: bool,
    theme: &Theme,
) {
    let border = if focused {
        theme.focus_border
    } else if editing {
        theme.edit_border
    } else {
        theme.unfocus_border
    };

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(value).style(Style::default().fg(Color::White)),
        inner,
    );
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    comments: &[Comment],
    theme: &Theme,
) {
    let mut lines: Vec<Line> = Vec::new();

    for (row, comment) in comments.iter().enumerate() {
        let selected = row == state.selected;
        let row_style = if selected {
            Style::default().bg(theme.selection_bg)
        } else {
            Style::default()
        };

        lines.push(Line::from(Span::styled(
            comment.title.clone(),
            row_style
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", comment.description),
            row_style.fg(theme.description),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.unfocus_border)),
        )
        .scroll((state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}

fn render_alert(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let alert_area = centered_rect(60, 30, area);
    frame.render_widget(Clear, alert_area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(theme.alert)),
            Span::styled(message.to_string(), Style::default().fg(theme.alert)),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.alert)),
        ),
        alert_area,
    );
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    comment_count: usize,
    editing: bool,
    show_help_bar: bool,
) {
    let mode = match state.mode {
        AppMode::Normal => "NORMAL",
        AppMode::Insert if editing => "EDIT",
        AppMode::Insert => "INSERT",
        AppMode::Help => "HELP",
    };

    let text = state.message.clone().unwrap_or_else(|| {
        if show_help_bar {
            let hints = match state.mode {
                AppMode::Insert => "Tab:switch field  Enter:save  Esc:back",
                _ => "a:add  e:edit  x:delete  j/k:move  ?:help  q:quit",
            };
            format!(" {} | {} comments | {}", mode, comment_count, hints)
        } else {
            format!(" {} | {} comments", mode, comment_count)
        }
    });

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "comment-box",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Navigation", Style::default().fg(Color::Yellow))),
        Line::from("  j/k         Move selection up/down"),
        Line::from("  g/G         Go to top/bottom"),
        Line::from(""),
        Line::from(Span::styled("Comments", Style::default().fg(Color::Yellow))),
        Line::from("  a or i      Focus the form to add a comment"),
        Line::from("  e or Enter  Edit the selected comment"),
        Line::from("  x or d      Delete the selected comment"),
        Line::from(""),
        Line::from(Span::styled("Form", Style::default().fg(Color::Yellow))),
        Line::from("  Tab         Switch between title and description"),
        Line::from("  Enter       Save the comment"),
        Line::from("  Esc         Back to the list"),
        Line::from(""),
        Line::from(Span::styled("Other", Style::default().fg(Color::Yellow))),
        Line::from("  q           Quit"),
        Line::from("  ?           Show this help"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        help_area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup = Layout::default()
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
        .split(popup[1])[1]
}

/// Convert character position to byte position
fn char_to_byte_pos(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Display width of the first `chars` characters (CJK chars are 2 columns)
fn display_width(s: &str, chars: usize) -> usize {
    s.chars()
        .take(chars)
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum()
}
