/// Reasons a drop can be refused. Neither leaves any trace on the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The column doesn't exist or has no room left
    #[error("illegal move, column {column} is full or off the board")]
    IllegalMove { column: usize },

    /// The game already has a winner or ended in a tie
    #[error("the game is over, no more moves are accepted")]
    GameOver,
}
