//! Player movement inside a maze

use std::str::FromStr;

use crate::error::MazeError;
use crate::grid::{Grid, Position};

/// One-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` of a single step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Parse `W`/`A`/`S`/`D` (any case) or the direction name
impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "up" => Ok(Direction::Up),
            "s" | "down" => Ok(Direction::Down),
            "a" | "left" => Ok(Direction::Left),
            "d" | "right" => Ok(Direction::Right),
            _ => Err(MazeError::UnknownCommand(s.to_string())),
        }
    }
}

/// Why a move did not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Wall,
    OutOfBounds,
}

/// Outcome of [`Navigator::attempt_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Player moved to a new cell
    Moved(Position),
    /// Player moved onto the end cell
    Won(Position),
    /// Nothing happened
    Blocked(Obstacle),
    /// Game is already won; moves are ignored
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
}

/// Player state for one game session
///
/// The grid is borrowed, never modified. The position always refers to a
/// passable cell.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    grid: &'a Grid,
    position: Position,
    status: Status,
    moves: usize,
}

impl<'a> Navigator<'a> {
    /// Start a session on the start cell of `grid`
    pub fn new(grid: &'a Grid) -> Self {
        let position = grid.start();
        Self {
            grid,
            position,
            status: Self::status_at(grid, position),
            moves: 0,
        }
    }

    fn status_at(grid: &Grid, position: Position) -> Status {
        if position == grid.end() {
            Status::Won
        } else {
            Status::InProgress
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn current_position(&self) -> Position {
        self.position
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_solved(&self) -> bool {
        self.status == Status::Won
    }

    /// Number of successful moves so far
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Step one cell towards `direction` if the target is open
    ///
    /// Walls and the maze edge block the move without error.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        if self.is_solved() {
            return MoveResult::Finished;
        }

        let (dr, dc) = direction.delta();
        let Some(target) = self
            .position
            .offset(dr, dc)
            .filter(|p| self.grid.contains(*p))
        else {
            return MoveResult::Blocked(Obstacle::OutOfBounds);
        };
        match self.grid.is_passable(target.row, target.col) {
            Ok(true) => {}
            Ok(false) => return MoveResult::Blocked(Obstacle::Wall),
            Err(_) => return MoveResult::Blocked(Obstacle::OutOfBounds),
        }

        self.position = target;
        self.moves += 1;
        self.status = Self::status_at(self.grid, target);
        match self.status {
            Status::Won => MoveResult::Won(target),
            Status::InProgress => MoveResult::Moved(target),
        }
    }
}
