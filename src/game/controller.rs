//! Turn order and end-of-match detection.
//!
//! The controller owns the [`Board`] and the [`MatchState`] and talks to the
//! outside world only through the [`Presenter`], [`InputSource`] and
//! [`Notifier`] traits, so the same loop serves the console and the terminal
//! UI (and scripted frontends in tests).

use std::ops::RangeInclusive;

use tracing::{debug, info, instrument};

use super::{Board, MatchOutcome, MatchState, Symbol, COLS};
use crate::config::{AppConfig, PlayerNames};
use crate::error::FrontendError;

/// What the input source made of the player's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnChoice {
    /// A 1-indexed column number, not yet checked against the board.
    Column(i64),
    /// Input that is not an integer; carries the raw text.
    Unparseable(String),
    /// Input is exhausted or the player asked to leave.
    Closed,
}

/// Context handed to the input source when asking for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub symbol: Symbol,
    pub player_name: String,
    /// Human-facing column numbers.
    pub columns: RangeInclusive<usize>,
}

/// Messages for the player: rejected input and the end of the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    InvalidInput(String),
    InvalidMove(i64),
    Won { symbol: Symbol, name: String },
    Draw,
}

/// Result of feeding one [`ColumnChoice`] to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// Move played; the other player is up.
    Continue,
    /// Nothing changed; the same player must choose again.
    Rejected(Notice),
    Finished(MatchOutcome),
    Closed,
}

pub trait Presenter {
    fn present(&mut self, board: &Board) -> Result<(), FrontendError>;
}

pub trait InputSource {
    fn request_column(&mut self, prompt: &Prompt) -> Result<ColumnChoice, FrontendError>;
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice) -> Result<(), FrontendError>;
}

/// Everything the controller needs from a frontend.
pub trait Frontend: Presenter + InputSource + Notifier {}

impl<T: Presenter + InputSource + Notifier> Frontend for T {}

pub struct MatchController<F> {
    board: Board,
    state: MatchState,
    names: PlayerNames,
    frontend: F,
}

impl<F: Frontend> MatchController<F> {
    pub fn new(frontend: F, config: &AppConfig) -> Self {
        let mut board = Board::new();
        board.initialize();
        MatchController {
            board,
            state: MatchState::new(config.first_player),
            names: config.players.clone(),
            frontend,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Play until someone wins, the board fills up, or the input closes.
    ///
    /// Returns `None` only when the input source reported [`ColumnChoice::Closed`].
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Option<MatchOutcome>, FrontendError> {
        if let Some(outcome) = self.state.outcome() {
            return Ok(Some(outcome));
        }
        info!(first = %self.state.current(), "match started");

        loop {
            self.frontend.present(&self.board)?;
            let prompt = self.prompt();
            let choice = self.frontend.request_column(&prompt)?;

            match self.play_turn(choice) {
                TurnResult::Continue => {}
                TurnResult::Rejected(notice) => self.frontend.notify(&notice)?,
                TurnResult::Finished(outcome) => {
                    self.frontend.present(&self.board)?;
                    let notice = self.outcome_notice(outcome);
                    self.frontend.notify(&notice)?;
                    info!(?outcome, "match finished");
                    return Ok(Some(outcome));
                }
                TurnResult::Closed => {
                    info!("input closed, match abandoned");
                    return Ok(None);
                }
            }
        }
    }

    /// Apply one choice for the current player.
    ///
    /// Rejected choices leave both the board and the turn untouched.
    #[instrument(skip(self), fields(player = %self.state.current()))]
    pub fn play_turn(&mut self, choice: ColumnChoice) -> TurnResult {
        if let Some(outcome) = self.state.outcome() {
            return TurnResult::Finished(outcome);
        }

        let number = match choice {
            ColumnChoice::Column(number) => number,
            ColumnChoice::Unparseable(raw) => {
                debug!(%raw, "rejected unparseable input");
                return TurnResult::Rejected(Notice::InvalidInput(raw));
            }
            ColumnChoice::Closed => return TurnResult::Closed,
        };

        let column = match board_column(number) {
            Some(column) if self.board.is_valid_move(column) => column,
            _ => {
                debug!(number, "rejected invalid move");
                return TurnResult::Rejected(Notice::InvalidMove(number));
            }
        };

        let symbol = self.state.current();
        let row = self.board.drop_symbol(column, symbol);
        debug!(number, ?row, "move played");

        if self.board.check_win(symbol) {
            self.state.finish(MatchOutcome::Winner(symbol));
        } else if self.board.is_full() {
            self.state.finish(MatchOutcome::Draw);
        }

        match self.state.outcome() {
            Some(outcome) => TurnResult::Finished(outcome),
            None => {
                self.state.switch_turn();
                TurnResult::Continue
            }
        }
    }

    fn prompt(&self) -> Prompt {
        let symbol = self.state.current();
        Prompt {
            symbol,
            player_name: self.names.name(symbol).to_string(),
            columns: 1..=COLS,
        }
    }

    fn outcome_notice(&self, outcome: MatchOutcome) -> Notice {
        match outcome {
            MatchOutcome::Winner(symbol) => Notice::Won {
                symbol,
                name: self.names.name(symbol).to_string(),
            },
            MatchOutcome::Draw => Notice::Draw,
        }
    }
}

/// Translate a human-facing 1-indexed column into a board column.
fn board_column(number: i64) -> Option<usize> {
    usize::try_from(number.checked_sub(1)?).ok()
}
