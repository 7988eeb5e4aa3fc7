//! Full-screen terminal UI frontend built on ratatui.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use super::board_widget::{render_board, symbol_color};
use crate::error::FrontendError;
use crate::game::{Board, ColumnChoice, InputSource, Notice, Notifier, Presenter, Prompt, COLS};

/// Full-screen frontend: arrow keys pick a column, Enter drops.
pub struct TuiFrontend<B: Backend> {
    terminal: Terminal<B>,
    board: Board,
    prompt: Option<Prompt>,
    selected_column: usize,
    message: Option<String>,
}

impl<B: Backend> TuiFrontend<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        TuiFrontend {
            terminal,
            board: Board::new(),
            prompt: None,
            selected_column: COLS / 2, // Start in middle
            message: None,
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// Translate a key press into a choice; `None` means keep waiting.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ColumnChoice> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(ColumnChoice::Closed),
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.selected_column = (self.selected_column + 1).min(COLS - 1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(ColumnChoice::Column(self.selected_column as i64 + 1))
            }
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit) => Some(ColumnChoice::Column(i64::from(digit))),
                None => Some(ColumnChoice::Unparseable(c.to_string())),
            },
            _ => None,
        }
    }

    fn draw(&mut self) -> Result<(), FrontendError> {
        let board = &self.board;
        let prompt = self.prompt.as_ref();
        let selected = prompt.map(|_| self.selected_column);
        let message = self.message.as_deref();

        self.terminal
            .draw(|frame| render(frame, board, prompt, selected, message))
            .map_err(|e| FrontendError::Terminal(e.to_string()))?;
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<(), FrontendError> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

/// Message line text for a notice.
pub fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::InvalidInput(raw) => format!("'{raw}' is not a column number!"),
        Notice::InvalidMove(number) => format!("Column {number} is not playable!"),
        Notice::Won { symbol, name } => format!("{name} ({symbol}) wins!"),
        Notice::Draw => "It's a draw!".to_string(),
    }
}

impl<B: Backend> Presenter for TuiFrontend<B> {
    fn present(&mut self, board: &Board) -> Result<(), FrontendError> {
        self.board = *board;
        self.draw()
    }
}

impl<B: Backend> InputSource for TuiFrontend<B> {
    fn request_column(&mut self, prompt: &Prompt) -> Result<ColumnChoice, FrontendError> {
        self.prompt = Some(prompt.clone());
        self.draw()?;

        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(choice) = self.handle_key(key) {
                    return Ok(choice);
                }
                self.draw()?;
            }
        }
    }
}

impl<B: Backend> Notifier for TuiFrontend<B> {
    fn notify(&mut self, notice: &Notice) -> Result<(), FrontendError> {
        let finished = matches!(notice, Notice::Won { .. } | Notice::Draw);
        let mut text = notice_text(notice);
        if finished {
            self.prompt = None;
            text.push_str("  Press any key to exit.");
        }
        self.message = Some(text);
        self.draw()?;

        if finished {
            self.wait_for_key()?;
        }
        Ok(())
    }
}

fn render(
    frame: &mut Frame,
    board: &Board,
    prompt: Option<&Prompt>,
    selected_column: Option<usize>,
    message: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, prompt, chunks[0]);
    render_board(frame, board, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, prompt: Option<&Prompt>, area: Rect) {
    let (status, style) = match prompt {
        Some(prompt) => (
            format!("{} ({}) to move", prompt.player_name, prompt.symbol),
            Style::default()
                .fg(symbol_color(prompt.symbol))
                .add_modifier(Modifier::BOLD),
        ),
        None => ("Game Over".to_string(), Style::default().add_modifier(Modifier::BOLD)),
    };

    let header = Paragraph::new(status)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  1-7: Drop in column  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
