use super::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner(Symbol),
    Draw,
}

/// Turn bookkeeping for a single match. The board lives elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    current: Symbol,
    outcome: Option<MatchOutcome>,
}

impl MatchState {
    pub fn new(first: Symbol) -> Self {
        MatchState {
            current: first,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current(&self) -> Symbol {
        self.current
    }

    /// Get match outcome if the match is over
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Hand the turn to the other player. Has no effect once the match is over.
    pub fn switch_turn(&mut self) {
        if !self.is_over() {
            self.current = self.current.other();
        }
    }

    /// Record the terminal outcome. The first recorded outcome sticks.
    pub fn finish(&mut self, outcome: MatchOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }
}
