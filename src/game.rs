//! Turn sequencing and end-of-game detection

use log::{debug, info, trace};

use crate::{board::*, error::MoveError, RUN_LENGTH};

/// Row/column steps for the four directions a line can run in:
/// horizontal, vertical, diagonal down-right and diagonal down-left.
/// Lines in the opposite directions are found from their other end.
const RAYS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Tie,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Where an accepted piece landed and what it did to the game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DropOutcome {
    Continues {
        row: usize,
        column: usize,
        next_player: Player,
    },
    Won {
        row: usize,
        column: usize,
        player: Player,
    },
    Tie {
        row: usize,
        column: usize,
    },
}

impl DropOutcome {
    /// The (row, column) the piece landed on
    pub fn position(&self) -> (usize, usize) {
        match *self {
            DropOutcome::Continues { row, column, .. }
            | DropOutcome::Won { row, column, .. }
            | DropOutcome::Tie { row, column } => (row, column),
        }
    }
}

/// A single game session
///
/// # Notes
/// Player 1 always moves first. After every accepted drop the whole board is
/// scanned for a line belonging to the player who just moved, then the top
/// row is checked for a tie; a move that does both is a win. Once the game
/// has been won or tied every further drop is refused with
/// [`MoveError::GameOver`].
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    active_player: Player,
    outcome: Outcome,
}

impl GameState {
    /// Starts a game on the standard sized board
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    /// Starts a game on the given board, which the game takes ownership of
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            active_player: Player::One,
            outcome: Outcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is, or who made the final move once the game
    /// is over
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Throws the current game away and starts again on an empty board of the
    /// same size
    pub fn reset(&mut self) {
        *self = Self::with_board(Board::new(self.board.width(), self.board.height()));
    }

    /// Drops the active player's piece into `column`
    pub fn attempt_drop(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        if self.is_terminal() {
            debug!("rejected drop in column {}: game is over", column);
            return Err(MoveError::GameOver);
        }

        let row = match self.board.lowest_empty_row(column) {
            Some(row) => row,
            None => {
                debug!("rejected drop in column {}: no room", column);
                return Err(MoveError::IllegalMove { column });
            }
        };

        let player = self.active_player;
        self.board.place(row, column, player);
        debug!("{} dropped into column {}, landed on row {}", player, column, row);

        if self.check_for_win(player) {
            self.outcome = Outcome::Won(player);
            info!("{} won", player);
            return Ok(DropOutcome::Won { row, column, player });
        }

        if self.board.is_top_row_full() {
            self.outcome = Outcome::Tie;
            info!("board full, game tied");
            return Ok(DropOutcome::Tie { row, column });
        }

        self.active_player = player.other();
        Ok(DropOutcome::Continues {
            row,
            column,
            next_player: self.active_player,
        })
    }

    /// Checks every cell for the start of a line of `player`'s pieces
    fn check_for_win(&self, player: Player) -> bool {
        for row in 0..self.board.height() {
            for column in 0..self.board.width() {
                for &ray in RAYS.iter() {
                    if self.ray_wins(row as isize, column as isize, ray, player) {
                        trace!(
                            "winning line from ({}, {}) along {:?}",
                            row,
                            column,
                            ray
                        );
                        return true;
                    }
                }
            }
        }
        false
    }

    // a ray that leaves the board can't win
    fn ray_wins(
        &self,
        row: isize,
        column: isize,
        (d_row, d_column): (isize, isize),
        player: Player,
    ) -> bool {
        (0..RUN_LENGTH as isize).all(|step| {
            self.board.probe(row + step * d_row, column + step * d_column)
                == Some(Cell::Occupied(player))
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
