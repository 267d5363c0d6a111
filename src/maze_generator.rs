//! Maze generation

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::error::{MazeError, Result};
use crate::grid::{Cell, Grid, Position};
use crate::{MAX_SIZE, MIN_SIZE};

/// Wall between a carved room and a not yet carved one
#[derive(Debug, Clone, Copy)]
struct Frontier {
    wall: Position,
    room: Position,
    /// Rooms between the start and `room` once it is carved
    depth: usize,
}

/// Maze generator using randomized Prim's algorithm.
///
/// Rooms sit on odd rows and odd columns, so corridors and the walls between
/// them are both one cell thick. The outer border is never carved.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    const DIRECTIONS: [(isize, isize); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

    /// Generator with a fixed seed, or seeded from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a perfect maze of `width` x `height` cells
    ///
    /// The start is a random room; the end is the room farthest away from it
    /// along the corridors. Both stay inside the border, which is all wall.
    ///
    /// Returns error if either dimension is outside `MIN_SIZE..=MAX_SIZE`.
    ///
    /// # Examples
    /// ```
    /// use maze_game::MazeGenerator;
    ///
    /// let mut gen = MazeGenerator::new(Some(7));
    /// let grid = gen.generate_maze(11, 9).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (11, 9));
    /// assert!(grid.is_solvable());
    /// assert!(gen.generate_maze(4, 9).is_err());
    /// ```
    pub fn generate_maze(&mut self, width: usize, height: usize) -> Result<Grid> {
        let valid = MIN_SIZE..=MAX_SIZE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(MazeError::InvalidSize { width, height });
        }

        let mut cells = vec![Cell::Wall; width * height];
        let index = |pos: Position| pos.row * width + pos.col;

        // Room rows are 1, 3, .., never the last row
        let start = Position::new(
            1 + 2 * self.random.gen_range(0..(height - 1) / 2),
            1 + 2 * self.random.gen_range(0..(width - 1) / 2),
        );
        cells[index(start)] = Cell::Path;

        let mut frontier = Vec::new();
        Self::extend_frontier(&mut frontier, &cells, start, 0, width, height);

        let mut end = start;
        let mut end_depth = 0;
        let mut rooms = 1;
        while !frontier.is_empty() {
            let pick = self.random.gen_range(0..frontier.len());
            let Frontier { wall, room, depth } = frontier.swap_remove(pick);
            if cells[index(room)] != Cell::Wall {
                // Reached through another wall already
                continue;
            }

            cells[index(wall)] = Cell::Path;
            cells[index(room)] = Cell::Path;
            rooms += 1;
            if depth > end_depth {
                end = room;
                end_depth = depth;
            }
            Self::extend_frontier(&mut frontier, &cells, room, depth, width, height);
        }

        cells[index(start)] = Cell::Start;
        cells[index(end)] = Cell::End;
        debug!(
            width,
            height,
            rooms,
            start = %start,
            end = %end,
            corridor_length = 2 * end_depth,
            "generated maze"
        );

        Ok(Grid::from_parts(width, height, cells, start, end))
    }

    /// Queue walls leading from `room` to uncarved rooms
    fn extend_frontier(
        frontier: &mut Vec<Frontier>,
        cells: &[Cell],
        room: Position,
        depth: usize,
        width: usize,
        height: usize,
    ) {
        for (dy, dx) in Self::DIRECTIONS {
            let Some(next) = room.offset(dy, dx) else {
                continue;
            };
            if next.row + 1 >= height || next.col + 1 >= width {
                continue;
            }
            if cells[next.row * width + next.col] != Cell::Wall {
                continue;
            }
            if let Some(wall) = room.offset(dy / 2, dx / 2) {
                frontier.push(Frontier {
                    wall,
                    room: next,
                    depth: depth + 1,
                });
            }
        }
    }
}
