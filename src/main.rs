use anyhow::Result;
use clap::Parser;

use std::io::{stdin, stdout, Stdin, Write};

use connect4::{
    render::{self, RenderStyle},
    Board, DropOutcome, GameState, MoveError, HEIGHT, WIDTH,
};

/// Two-player Connect 4 on a single shared terminal
#[derive(Parser, Debug)]
#[command(name = "connect4")]
struct Args {
    /// Number of columns on the board
    #[arg(long, default_value_t = WIDTH, value_parser = parse_dimension)]
    width: usize,

    /// Number of rows on the board
    #[arg(long, default_value_t = HEIGHT, value_parser = parse_dimension)]
    height: usize,

    /// Draw the board without colours
    #[arg(long)]
    plain: bool,
}

/// Largest width or height the CLI will set up a board for
const MAX_DIMENSION: usize = 64;

fn parse_dimension(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) if n > MAX_DIMENSION => Err(format!("must be at most {}", MAX_DIMENSION)),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let render_style = if args.plain {
        RenderStyle::Plain
    } else {
        RenderStyle::Colour
    };

    let mut game = GameState::with_board(Board::new(args.width, args.height));
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        render::draw(game.board(), &mut stdout(), render_style)?;

        print!("{}, column (1-{}) > ", game.active_player(), args.width);
        stdout().flush()?;

        let input = match read_input(&stdin)? {
            Some(input) => input,
            None => break,
        };
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        // players count columns from 1
        let column = match input.parse::<usize>() {
            Ok(column) => column.checked_sub(1).unwrap_or(usize::MAX),
            Err(_) => {
                println!("Invalid number: {}", input);
                continue;
            }
        };

        let mover = game.active_player();
        match game.attempt_drop(column) {
            Ok(result @ DropOutcome::Continues { .. }) => {
                let (row, column) = result.position();
                println!("{} dropped into column {}, row {}", mover, column + 1, row + 1);
            }
            Ok(DropOutcome::Won { .. }) | Ok(DropOutcome::Tie { .. }) => {
                render::draw(game.board(), &mut stdout(), render_style)?;
                if let Some(message) = render::announcement(game.outcome()) {
                    println!("{}", message);
                }
                if ask_yes_no(&stdin, "Play again? y/n: ")? {
                    game.reset();
                } else {
                    break;
                }
            }
            Err(MoveError::IllegalMove { column }) => {
                if column < args.width && game.board().is_column_full(column) {
                    println!("Invalid move, column {} full", input);
                } else {
                    println!(
                        "Invalid move, column {} out of range. Columns must be between 1 and {}",
                        input, args.width
                    );
                }
            }
            Err(MoveError::GameOver) => break,
        }
    }
    Ok(())
}

/// Reads one trimmed line, `None` once stdin is closed
fn read_input(stdin: &Stdin) -> Result<Option<String>> {
    let mut buffer = String::new();
    if stdin.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        print!("{}", question);
        stdout().flush()?;

        let answer = match read_input(stdin)? {
            Some(answer) => answer,
            None => return Ok(false),
        };
        match answer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') | Some('q') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_in_range_is_accepted() {
        assert_eq!(parse_dimension("1"), Ok(1));
        assert_eq!(parse_dimension("7"), Ok(7));
        assert_eq!(parse_dimension("64"), Ok(MAX_DIMENSION));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(parse_dimension("0"), Err("must be at least 1".to_string()));
    }

    #[test]
    fn oversized_dimension_is_rejected() {
        assert_eq!(parse_dimension("65"), Err("must be at most 64".to_string()));
        assert!(parse_dimension("4294967296").is_err());
        assert!(parse_dimension("18446744073709551616").is_err());
    }

    #[test]
    fn non_numeric_dimension_is_rejected() {
        assert!(parse_dimension("wide").is_err());
    }
}
