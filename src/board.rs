//! The grid of cells pieces are dropped into

use std::fmt;

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2, as shown to the people playing
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(*player),
            Cell::Empty => None,
        }
    }
}

/// A fixed-size Connect 4 grid
///
/// Row 0 is the top of the board and row `height - 1` the bottom, so pieces
/// fall towards higher row indices. Occupied cells in a column always form an
/// unbroken run up from the bottom row.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    // cells are stored top-to-bottom, left-to-right
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Board {
    /// Creates an empty board
    ///
    /// # Panics
    /// Panics if either dimension is zero, or if the board would have more
    /// cells than fit in a `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {}x{}",
            width,
            height
        );
        let size = width.checked_mul(height).unwrap_or_else(|| {
            panic!("board dimensions {}x{} are too large", width, height)
        });
        Self {
            cells: vec![Cell::Empty; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to a cell, `None` when off the board
    pub fn cell_at(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.height && column < self.width {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    /// Bounds-checked lookup for signed coordinates, used when probing rays
    /// that may run off the edge of the board
    pub(crate) fn probe(&self, row: isize, column: isize) -> Option<Cell> {
        if row < 0 || column < 0 {
            return None;
        }
        self.cell_at(row as usize, column as usize)
    }

    /// Iterates over the rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Returns the row a piece dropped into `column` would land on, or `None`
    /// if the column is full or doesn't exist
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_empty())
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.lowest_empty_row(column).is_none()
    }

    /// Puts a piece for `player` at (`row`, `column`)
    ///
    /// `row` must be the value `lowest_empty_row(column)` just returned;
    /// anything else would leave a floating piece and is a bug in the caller.
    pub(crate) fn place(&mut self, row: usize, column: usize, player: Player) {
        match self.lowest_empty_row(column) {
            Some(landing_row) if landing_row == row => {
                self.cells[row * self.width + column] = Cell::Occupied(player);
            }
            landing_row => unreachable!(
                "tried to place at ({}, {}) but the column's landing row is {:?}",
                row, column, landing_row
            ),
        }
    }

    /// Pieces settle from the bottom up, so the top row is the last to fill;
    /// once it is full the whole board is
    pub fn is_top_row_full(&self) -> bool {
        self.cells[..self.width].iter().all(|cell| !cell.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.width(), WIDTH);
        assert_eq!(board.height(), HEIGHT);
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                assert_eq!(board.cell_at(row, column), Some(Cell::Empty));
            }
        }
    }

    #[test]
    #[should_panic]
    fn zero_sized_board_is_rejected() {
        Board::new(0, 6);
    }

    #[test]
    #[should_panic(expected = "are too large")]
    fn overflowing_board_is_rejected() {
        Board::new(usize::MAX, 2);
    }

    #[test]
    fn cell_at_off_board() {
        let board = Board::new(3, 2);
        assert_eq!(board.cell_at(2, 0), None);
        assert_eq!(board.cell_at(0, 3), None);
        assert_eq!(board.probe(-1, 0), None);
        assert_eq!(board.probe(0, -1), None);
        assert_eq!(board.probe(1, 2), Some(Cell::Empty));
    }

    #[test]
    fn pieces_stack_from_the_bottom() {
        let mut board = Board::default();
        assert_eq!(board.lowest_empty_row(3), Some(HEIGHT - 1));

        board.place(HEIGHT - 1, 3, Player::One);
        assert_eq!(board.cell_at(HEIGHT - 1, 3), Some(Cell::Occupied(Player::One)));
        assert_eq!(board.lowest_empty_row(3), Some(HEIGHT - 2));

        board.place(HEIGHT - 2, 3, Player::Two);
        assert_eq!(board.cell_at(HEIGHT - 2, 3), Some(Cell::Occupied(Player::Two)));
        // neighbouring columns are untouched
        assert_eq!(board.lowest_empty_row(2), Some(HEIGHT - 1));
        assert_eq!(board.lowest_empty_row(4), Some(HEIGHT - 1));
    }

    #[test]
    fn full_column_has_no_spot() {
        let mut board = Board::default();
        for _ in 0..HEIGHT {
            let row = board.lowest_empty_row(0).unwrap();
            board.place(row, 0, Player::One);
        }
        assert_eq!(board.lowest_empty_row(0), None);
        assert!(board.is_column_full(0));
        assert!(!board.is_column_full(1));
    }

    #[test]
    fn out_of_range_column_has_no_spot() {
        let board = Board::default();
        assert_eq!(board.lowest_empty_row(WIDTH), None);
        assert_eq!(board.lowest_empty_row(usize::MAX), None);
    }

    #[test]
    #[should_panic]
    fn placing_above_the_landing_row_panics() {
        let mut board = Board::default();
        board.place(0, 0, Player::One);
    }

    #[test]
    #[should_panic]
    fn placing_on_an_occupied_cell_panics() {
        let mut board = Board::default();
        board.place(HEIGHT - 1, 0, Player::One);
        board.place(HEIGHT - 1, 0, Player::Two);
    }

    #[test]
    fn top_row_fills_last() {
        let mut board = Board::new(2, 2);
        assert!(!board.is_top_row_full());
        board.place(1, 0, Player::One);
        board.place(1, 1, Player::Two);
        assert!(!board.is_top_row_full());
        board.place(0, 0, Player::One);
        assert!(!board.is_top_row_full());
        board.place(0, 1, Player::Two);
        assert!(board.is_top_row_full());
    }

    #[test]
    fn rows_run_top_to_bottom() {
        let mut board = Board::new(3, 2);
        board.place(1, 2, Player::Two);
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].iter().all(Cell::is_empty));
        assert_eq!(rows[1][2].owner(), Some(Player::Two));
    }

    #[test]
    fn players_alternate() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::Two.to_string(), "Player 2");
    }
}
