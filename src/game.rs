//! Interactive text game

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::MazeError;
use crate::grid::Grid;
use crate::navigation::{Direction, MoveResult, Navigator, Obstacle};
use crate::render::render;
use crate::symbols::Symbols;

/// ANSI sequence clearing the screen and homing the cursor
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// Show the maze again
    Map,
    Quit,
}

impl FromStr for Command {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" => Ok(Command::Map),
            "q" => Ok(Command::Quit),
            _ => s.parse().map(Command::Move),
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { moves: usize },
    Quit,
    /// Input ran out before the game was over
    InputClosed,
}

/// One play-through of a maze
pub struct Game<'a> {
    navigator: Navigator<'a>,
    symbols: Symbols,
    /// Redraw the whole screen after every command
    refresh: bool,
}

impl<'a> Game<'a> {
    pub fn new(grid: &'a Grid, symbols: Symbols, refresh: bool) -> Self {
        Self {
            navigator: Navigator::new(grid),
            symbols,
            refresh,
        }
    }

    pub fn navigator(&self) -> &Navigator<'a> {
        &self.navigator
    }

    /// Run the game loop, reading one command per line from `input`
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> io::Result<Outcome> {
        write!(output, "{CLEAR_SCREEN}")?;
        writeln!(
            output,
            "Welcome to the Maze Game! (W, A, S, D to move.{})",
            if self.refresh { "" } else { " M for Map" }
        )?;
        self.show_maze(output)?;

        let mut line = String::new();
        while !self.navigator.is_solved() {
            write!(
                output,
                "Next move (W/A/S/D/{}Q): ",
                if self.refresh { "" } else { "M/" }
            )?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(Outcome::InputClosed);
            }

            let message = match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    writeln!(output, "Quitting game.")?;
                    return Ok(Outcome::Quit);
                }
                Ok(Command::Map) => {
                    if !self.refresh {
                        self.show_maze(output)?;
                    }
                    ""
                }
                Ok(Command::Move(direction)) => {
                    let result = self.navigator.attempt_move(direction);
                    debug!(?direction, ?result, "player move");
                    match result {
                        MoveResult::Blocked(Obstacle::Wall) => {
                            "Invalid move: you can't move through walls."
                        }
                        MoveResult::Blocked(Obstacle::OutOfBounds) => {
                            "Invalid move: you can't move out of bounds."
                        }
                        MoveResult::Moved(_) | MoveResult::Won(_) | MoveResult::Finished => "",
                    }
                }
                Err(_) => "Invalid input: please use W, A, S, D, M, or Q.",
            };

            if self.refresh {
                write!(output, "{CLEAR_SCREEN}")?;
                writeln!(output, "{message}")?;
                self.show_maze(output)?;
            } else if !message.is_empty() {
                writeln!(output, "{message}")?;
            }
        }

        let moves = self.navigator.moves();
        writeln!(
            output,
            "Congratulations! You've found the exit and won the game in {moves} moves."
        )?;
        Ok(Outcome::Won { moves })
    }

    fn show_maze<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(
            output,
            "{}",
            render(
                self.navigator.grid(),
                &self.symbols,
                Some(self.navigator.current_position())
            )
        )
    }
}
