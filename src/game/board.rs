use super::player::Symbol;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Line orientations scanned by [`Board::check_win`], as `(d_row, d_col)`.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal, left to right
    (1, 0),  // vertical, top to bottom
    (1, 1),  // diagonal, down-right
    (1, -1), // diagonal, down-left
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player(Symbol),
}

impl Cell {
    /// Character used when printing the board; empty cells are a space.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player(symbol) => symbol.as_char(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The 6x7 grid. Row 0 is the top row, row 5 is where pieces settle first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; ROWS * COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; ROWS * COLS],
        }
    }

    /// Reset every cell to empty. Safe to call repeatedly.
    pub fn initialize(&mut self) {
        self.cells = [Cell::Empty; ROWS * COLS];
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::index(row, col)]
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn columns(&self) -> usize {
        COLS
    }

    /// A column accepts a piece while its top cell is empty.
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < COLS && self.get(0, column).is_empty()
    }

    /// Columns (0-indexed) that can still take a piece.
    pub fn valid_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(|&col| self.is_valid_move(col))
    }

    /// Drop a symbol into a column, returns the row where it landed.
    ///
    /// Callers must check [`Board::is_valid_move`] first. Debug builds panic
    /// on a violated precondition; release builds leave the board untouched
    /// and return `None`.
    pub fn drop_symbol(&mut self, column: usize, symbol: Symbol) -> Option<usize> {
        debug_assert!(
            self.is_valid_move(column),
            "drop_symbol into unplayable column {column}"
        );
        if column >= COLS {
            return None;
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.get(row, column).is_empty())?;
        self.cells[Self::index(row, column)] = Cell::Player(symbol);
        tracing::trace!(row, column, %symbol, "symbol placed");
        Some(row)
    }

    /// True if `symbol` holds [`WIN_LENGTH`] consecutive cells in any
    /// orientation, anywhere on the board.
    pub fn check_win(&self, symbol: Symbol) -> bool {
        DIRECTIONS.iter().any(|&direction| {
            (0..ROWS).any(|row| {
                (0..COLS).any(|col| self.holds_line(row, col, direction, WIN_LENGTH, symbol))
            })
        })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Whether the `length` cells starting at `(row, col)` and stepping by
    /// `direction` all hold `symbol`. Runs that leave the grid never match.
    fn holds_line(
        &self,
        row: usize,
        col: usize,
        (d_row, d_col): (isize, isize),
        length: usize,
        symbol: Symbol,
    ) -> bool {
        let reach = length as isize - 1;
        let end_row = row as isize + d_row * reach;
        let end_col = col as isize + d_col * reach;
        if !(0..ROWS as isize).contains(&end_row) || !(0..COLS as isize).contains(&end_col) {
            return false;
        }

        (0..length as isize).all(|step| {
            let r = (row as isize + d_row * step) as usize;
            let c = (col as isize + d_col * step) as usize;
            self.get(r, c) == Cell::Player(symbol)
        })
    }

    fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < ROWS && col < COLS);
        row * COLS + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_all(board: &mut Board, moves: &[(usize, Symbol)]) {
        for &(col, symbol) in moves {
            assert!(board.is_valid_move(col));
            board.drop_symbol(col, symbol).unwrap();
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut once = Board::new();
        once.drop_symbol(2, Symbol::X);
        once.initialize();

        let mut twice = once;
        twice.drop_symbol(4, Symbol::O);
        twice.initialize();
        twice.initialize();

        assert_eq!(once, Board::new());
        assert_eq!(twice, Board::new());
    }

    #[test]
    fn test_valid_move_bounds() {
        let board = Board::new();
        for col in 0..COLS {
            assert!(board.is_valid_move(col));
        }
        assert!(!board.is_valid_move(7));
        assert!(!board.is_valid_move(9));
        assert!(!board.is_valid_move(usize::MAX));
    }

    #[test]
    fn test_drop_symbol_gravity() {
        let mut board = Board::new();

        assert_eq!(board.drop_symbol(3, Symbol::X), Some(5));
        assert_eq!(board.get(5, 3), Cell::Player(Symbol::X));

        assert_eq!(board.drop_symbol(3, Symbol::O), Some(4));
        assert_eq!(board.get(4, 3), Cell::Player(Symbol::O));

        // Cells above are untouched, neighbouring columns too
        for row in 0..4 {
            assert_eq!(board.get(row, 3), Cell::Empty);
        }
        assert_eq!(board.get(5, 2), Cell::Empty);
        assert_eq!(board.get(5, 4), Cell::Empty);
    }

    #[test]
    fn test_column_full_after_six_drops() {
        let mut board = Board::new();
        for i in 0..ROWS {
            assert!(board.is_valid_move(3));
            assert_eq!(board.drop_symbol(3, Symbol::X), Some(ROWS - 1 - i));
        }
        assert!(!board.is_valid_move(3));
        assert_eq!(board.valid_columns().collect::<Vec<_>>(), vec![0, 1, 2, 4, 5, 6]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unplayable column")]
    fn test_drop_into_full_column_panics_in_debug() {
        let mut board = Board::new();
        for _ in 0..=ROWS {
            board.drop_symbol(0, Symbol::O);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unplayable column")]
    fn test_drop_out_of_range_panics_in_debug() {
        let mut board = Board::new();
        board.drop_symbol(COLS, Symbol::X);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                assert!(!board.is_full());
                board.drop_symbol(col, Symbol::X);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.valid_columns().count(), 0);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        drop_all(&mut board, &[(0, Symbol::X), (1, Symbol::X), (2, Symbol::X)]);
        assert!(!board.check_win(Symbol::X));

        board.drop_symbol(3, Symbol::X);
        assert!(board.check_win(Symbol::X));
        assert!(!board.check_win(Symbol::O));
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut board = Board::new();
        drop_all(&mut board, &[(3, Symbol::O), (4, Symbol::O), (5, Symbol::O)]);
        assert!(!board.check_win(Symbol::O));

        board.drop_symbol(6, Symbol::O);
        assert!(board.check_win(Symbol::O));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        drop_all(&mut board, &[(6, Symbol::O), (6, Symbol::O), (6, Symbol::O)]);
        assert!(!board.check_win(Symbol::O));

        board.drop_symbol(6, Symbol::O);
        assert!(board.check_win(Symbol::O));
    }

    #[test]
    fn test_vertical_run_at_top_of_column() {
        let mut board = Board::new();
        drop_all(
            &mut board,
            &[(2, Symbol::O), (2, Symbol::O), (2, Symbol::X), (2, Symbol::X), (2, Symbol::X)],
        );
        assert!(!board.check_win(Symbol::X));

        board.drop_symbol(2, Symbol::X);
        assert!(board.check_win(Symbol::X));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        // Bottom-left to top-right, which is down-left when read from the top
        let mut board = Board::new();
        drop_all(
            &mut board,
            &[
                (0, Symbol::X),
                (1, Symbol::O),
                (1, Symbol::X),
                (2, Symbol::O),
                (2, Symbol::O),
                (2, Symbol::X),
                (3, Symbol::O),
                (3, Symbol::O),
                (3, Symbol::O),
            ],
        );
        assert!(!board.check_win(Symbol::X));

        board.drop_symbol(3, Symbol::X);
        assert!(board.check_win(Symbol::X));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::new();
        drop_all(
            &mut board,
            &[
                (6, Symbol::O),
                (5, Symbol::X),
                (5, Symbol::O),
                (4, Symbol::X),
                (4, Symbol::X),
                (4, Symbol::O),
                (3, Symbol::X),
                (3, Symbol::X),
                (3, Symbol::X),
            ],
        );
        assert!(!board.check_win(Symbol::O));

        board.drop_symbol(3, Symbol::O);
        assert!(board.check_win(Symbol::O));
    }

    #[test]
    fn test_run_broken_by_opponent() {
        let mut board = Board::new();
        drop_all(
            &mut board,
            &[(0, Symbol::X), (1, Symbol::X), (2, Symbol::O), (3, Symbol::X), (4, Symbol::X)],
        );
        assert!(!board.check_win(Symbol::X));
    }

    #[test]
    fn test_run_does_not_wrap_across_rows() {
        // (4,5) (4,6) (5,0) (5,1) are adjacent in the flat array but not on the grid
        let mut board = Board::new();
        drop_all(
            &mut board,
            &[
                (5, Symbol::O),
                (6, Symbol::O),
                (5, Symbol::X),
                (6, Symbol::X),
                (0, Symbol::X),
                (1, Symbol::X),
            ],
        );
        assert_eq!(board.get(4, 5), Cell::Player(Symbol::X));
        assert_eq!(board.get(4, 6), Cell::Player(Symbol::X));
        assert_eq!(board.get(5, 0), Cell::Player(Symbol::X));
        assert_eq!(board.get(5, 1), Cell::Player(Symbol::X));
        assert!(!board.check_win(Symbol::X));
    }

    #[test]
    fn test_full_board_without_winner() {
        // Even columns read X O O X X O from the bottom up, odd columns the inverse
        let mut board = Board::new();
        for col in 0..COLS {
            for height in 0..ROWS {
                let x = ((height + 1) / 2 + col) % 2 == 0;
                board.drop_symbol(col, if x { Symbol::X } else { Symbol::O });
            }
        }
        assert!(board.is_full());
        assert!(!board.check_win(Symbol::X));
        assert!(!board.check_win(Symbol::O));
    }

    #[test]
    fn test_empty_cell_renders_as_space() {
        assert_eq!(Cell::Empty.as_char(), ' ');
        assert_eq!(Cell::Player(Symbol::O).as_char(), 'O');
    }
}
