//! Line-based frontend: prints the board as text and reads one column number
//! per line.

use std::io::{BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::error::FrontendError;
use crate::game::{Board, ColumnChoice, InputSource, Notice, Notifier, Presenter, Prompt};

pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        ConsoleFrontend {
            input,
            output,
            clear_screen,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Text rendering of the board: `| X ` per cell, then a row of column numbers.
pub fn render_board(board: &Board) -> String {
    let mut text = String::new();
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            text.push_str(&format!("| {} ", board.get(row, col).as_char()));
        }
        text.push_str("|\n");
    }
    for col in 0..board.columns() {
        text.push_str(&format!("  {} ", col + 1));
    }
    text.push('\n');
    text
}

/// Interpret one line of player input.
pub fn parse_choice(line: &str) -> ColumnChoice {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return ColumnChoice::Closed;
    }
    match trimmed.parse::<i64>() {
        Ok(number) => ColumnChoice::Column(number),
        Err(_) => ColumnChoice::Unparseable(trimmed.to_string()),
    }
}

impl<R: BufRead, W: Write> Presenter for ConsoleFrontend<R, W> {
    fn present(&mut self, board: &Board) -> Result<(), FrontendError> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.output, "{}", render_board(board))?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleFrontend<R, W> {
    fn request_column(&mut self, prompt: &Prompt) -> Result<ColumnChoice, FrontendError> {
        write!(
            self.output,
            "{} ({}), choose a column ({}-{}): ",
            prompt.player_name,
            prompt.symbol,
            prompt.columns.start(),
            prompt.columns.end()
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(ColumnChoice::Closed);
        }
        Ok(parse_choice(&line))
    }
}

impl<R: BufRead, W: Write> Notifier for ConsoleFrontend<R, W> {
    fn notify(&mut self, notice: &Notice) -> Result<(), FrontendError> {
        match notice {
            Notice::InvalidInput(raw) => {
                writeln!(self.output, "Invalid input '{raw}'. Please enter a column number.")?
            }
            Notice::InvalidMove(number) => {
                writeln!(self.output, "Invalid move: column {number} is not playable. Try again.")?
            }
            Notice::Won { symbol, name } => writeln!(self.output, "{name} ({symbol}) wins!")?,
            Notice::Draw => writeln!(self.output, "It's a draw!")?,
        }
        self.output.flush()?;
        Ok(())
    }
}
