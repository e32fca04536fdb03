//! Rules engine for two-player, shared-screen 'Connect 4'
//!
//! The crate owns the board, move legality, turn order and the
//! four-in-a-row check. Drawing the board and announcing results is left to
//! the caller, who feeds column choices into [`GameState::attempt_drop`] and
//! renders whatever comes back.
//!
//! # Basic Usage
//!
//! ```
//! use connect4::{DropOutcome, GameState, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = GameState::new();
//!
//! let result = game.attempt_drop(3)?;
//! assert_eq!(
//!     result,
//!     DropOutcome::Continues { row: 5, column: 3, next_player: Player::Two }
//! );
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod board;

pub mod error;

pub mod game;

pub mod render;


pub use board::{Board, Cell, Player};
pub use error::MoveError;
pub use game::{DropOutcome, GameState, Outcome};

/// The width of the standard game board in tiles
pub const WIDTH: usize = 7;

/// The height of the standard game board in tiles
pub const HEIGHT: usize = 6;

/// Number of pieces in a row needed to win
pub const RUN_LENGTH: usize = 4;

// the standard board has to be able to hold a winning line
const_assert!(WIDTH >= RUN_LENGTH && HEIGHT >= RUN_LENGTH);
