//! Drawing the board for the people sitting at the terminal
//!
//! Nothing in here touches game state; the CLI hands over the board and the
//! outcome and prints whatever comes back.

use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::Write;

use crate::{board::*, game::Outcome};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RenderStyle {
    /// Coloured pieces on a blue board
    Colour,
    /// Bare characters, for terminals without colour support
    Plain,
}

/// Writes the column labels followed by the grid, top row first
///
/// Columns are labelled from 1, which is what players type to pick one.
pub fn draw<W: Write>(board: &Board, out: &mut W, render_style: RenderStyle) -> Result<()> {
    let labels: String = (1..=board.width()).map(|x| format!("{:^3}", x)).collect();
    writeln!(out, "{}", labels)?;

    for row in board.rows() {
        for cell in row {
            match render_style {
                RenderStyle::Colour => {
                    out.queue(PrintStyledContent(
                        style(" O ")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match cell.owner() {
                                Some(Player::One) => Color::Red,
                                Some(Player::Two) => Color::Yellow,
                                None => Color::DarkBlue,
                            }),
                    ))?;
                }
                RenderStyle::Plain => {
                    let symbol = match cell.owner() {
                        Some(player) => char::from(b'0' + player.number()),
                        None => '.',
                    };
                    write!(out, " {} ", symbol)?;
                }
            }
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// The end-of-game message, `None` while the game is still going
pub fn announcement(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won(player) => Some(format!("{} won!", player)),
        Outcome::Tie => Some("It's a TIE!".to_string()),
    }
}
