//! Generate mazes and find your way out of them
//!
//! Mazes are rectangular grids of walls and paths with one start and one
//! end. They are either generated with randomized Prim's algorithm or read
//! from plain text files, and then walked one step at a time.
//!
//! # Examples
//! ## Generate a maze and save it
//! ```
//! use maze_game::{format, MazeGenerator, Symbols};
//!
//! let mut gen = MazeGenerator::new(Some(2024));
//! let grid = gen.generate_maze(9, 7).unwrap();
//! let text = format::serialize(&grid, &Symbols::default());
//! assert_eq!(text.lines().count(), 7);
//! assert_eq!(format::parse(&text, &Symbols::default()).unwrap(), grid);
//! ```
//!
//! ## Walk through a hand-made maze
//! ```
//! use maze_game::{format, Direction, MoveResult, Navigator, Obstacle, Symbols};
//!
//! let maze = "\n#######\n#S#   #\n# # # #\n#   #E#\n#######";
//! let grid = format::parse(maze.trim(), &Symbols::default()).unwrap();
//! let mut nav = Navigator::new(&grid);
//!
//! assert_eq!(nav.attempt_move(Direction::Right), MoveResult::Blocked(Obstacle::Wall));
//! for dir in "ssddwwddss".chars() {
//!     nav.attempt_move(dir.to_string().parse().unwrap());
//! }
//! assert!(nav.is_solved());
//! ```

pub mod error;
pub mod format;
pub mod game;
pub mod grid;
pub mod logging;
pub mod maze_generator;
pub mod navigation;
pub mod render;
pub mod symbols;

pub use error::{MazeError, Result};
pub use game::{Command, Game, Outcome};
pub use grid::{Cell, Grid, Marker, Position};
pub use maze_generator::MazeGenerator;
pub use navigation::{Direction, MoveResult, Navigator, Obstacle, Status};
pub use symbols::Symbols;

/// Smallest maze width or height that can be generated
pub const MIN_SIZE: usize = 5;
/// Largest maze width or height that can be generated
pub const MAX_SIZE: usize = 100;
/// Size used when none is given
pub const DEFAULT_SIZE: usize = 10;
