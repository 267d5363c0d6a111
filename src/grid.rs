//! Grid model shared by the generator, the loader and the game

use std::collections::VecDeque;
use std::fmt;

use crate::error::{MazeError, Result};

/// State of one maze square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Path,
    Start,
    End,
}

impl Cell {
    /// Can the player stand on this cell
    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// The two unique cells of a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

impl Marker {
    fn cell(self) -> Cell {
        match self {
            Marker::Start => Cell::Start,
            Marker::End => Cell::End,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Start => write!(f, "start"),
            Marker::End => write!(f, "end"),
        }
    }
}

/// Location in the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position shifted by `(d_row, d_col)`, `None` if it would go below zero
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row={}, col={}", self.row, self.col)
    }
}

/// Rectangular maze of [`Cell`]s with exactly one start and one end
///
/// Cells are stored row-major. A `Grid` is never modified once built; the
/// player position lives in [`Navigator`](crate::Navigator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
    end: Position,
}

impl Grid {
    const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    /// Build a grid from rows of cells
    ///
    /// Returns error if the rows are empty or of unequal length, or if there
    /// is not exactly one [`Cell::Start`] and one [`Cell::End`].
    ///
    /// # Examples
    /// ```
    /// use maze_game::{Grid, Position};
    /// use maze_game::Cell::{End as E, Path as P, Start as S, Wall as W};
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec![W, W, W, W],
    ///     vec![W, S, P, W],
    ///     vec![W, W, E, W],
    ///     vec![W, W, W, W],
    /// ])
    /// .unwrap();
    /// assert_eq!(grid.start(), Position::new(1, 1));
    /// assert_eq!(grid.end(), Position::new(2, 2));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = rows
            .iter()
            .map(Vec::len)
            .find(|len| *len > 0)
            .ok_or(MazeError::EmptyMaze)?;
        if let Some((line, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MazeError::RaggedRow {
                line: line + 1,
                expected: width,
                found: row.len(),
            });
        }
        let height = rows.len();
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();

        let start = Self::unique_marker(&cells, width, Marker::Start)?;
        let end = Self::unique_marker(&cells, width, Marker::End)?;

        Ok(Self {
            width,
            height,
            cells,
            start,
            end,
        })
    }

    /// Assemble a grid whose markers are already known to be unique
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        cells: Vec<Cell>,
        start: Position,
        end: Position,
    ) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
            start,
            end,
        }
    }

    fn unique_marker(cells: &[Cell], width: usize, marker: Marker) -> Result<Position> {
        let mut found = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == marker.cell())
            .map(|(i, _)| Position::new(i / width, i % width));

        let first = found.next().ok_or(MazeError::MissingMarker(marker))?;
        match found.next() {
            Some(second) => Err(MazeError::DuplicateMarker {
                marker,
                first,
                second,
            }),
            None => Ok(first),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Cell state at `(row, col)`
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell> {
        if row >= self.height || col >= self.width {
            return Err(MazeError::OutOfBounds { row, col });
        }
        Ok(self.cells[row * self.width + col])
    }

    /// Location of the start or the end cell
    ///
    /// Markers are validated when the grid is built, so this only fails if
    /// the recorded position does not hold the marker cell.
    pub fn find_marker(&self, marker: Marker) -> Result<Position> {
        let pos = match marker {
            Marker::Start => self.start,
            Marker::End => self.end,
        };
        if self.cell_at(pos.row, pos.col)? == marker.cell() {
            Ok(pos)
        } else {
            Err(MazeError::MissingMarker(marker))
        }
    }

    /// Whether `(row, col)` can be walked on
    pub fn is_passable(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.cell_at(row, col)?.is_passable())
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Passable orthogonal neighbours of `pos`
    pub fn open_neighbours(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Self::NEIGHBOURS
            .into_iter()
            .filter_map(move |(dr, dc)| pos.offset(dr, dc))
            .filter(|p| self.contains(*p) && self.cells[p.row * self.width + p.col].is_passable())
    }

    /// Breadth-first step counts from `from` to every cell
    ///
    /// Index the result as `row * width + col`; walls and unreachable cells
    /// are `None`.
    pub fn distances_from(&self, from: Position) -> Vec<Option<usize>> {
        let mut dist = vec![None; self.cells.len()];
        if !self.contains(from) || !self.cells[from.row * self.width + from.col].is_passable() {
            return dist;
        }

        let mut queue = VecDeque::from([from]);
        dist[from.row * self.width + from.col] = Some(0);
        while let Some(pos) = queue.pop_front() {
            let d = dist[pos.row * self.width + pos.col].unwrap_or_default();
            for next in self.open_neighbours(pos) {
                let slot = &mut dist[next.row * self.width + next.col];
                if slot.is_none() {
                    *slot = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }

    /// Can the end be reached from the start
    pub fn is_solvable(&self) -> bool {
        self.distances_from(self.start)[self.end.row * self.width + self.end.col].is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Cell::{End as E, Path as P, Start as S, Wall as W};

    fn sample() -> Grid {
        Grid::from_rows(vec![
            vec![W, W, W, W, W],
            vec![W, S, P, P, W],
            vec![W, W, W, P, W],
            vec![W, E, P, P, W],
            vec![W, W, W, W, W],
        ])
        .unwrap()
    }

    #[test]
    fn markers_are_found() {
        let grid = sample();
        assert_eq!(grid.find_marker(Marker::Start).unwrap(), Position::new(1, 1));
        assert_eq!(grid.find_marker(Marker::End).unwrap(), Position::new(3, 1));
        assert_eq!((grid.width(), grid.height()), (5, 5));
    }

    #[test]
    fn cell_access_is_bounds_checked() {
        let grid = sample();
        assert_eq!(grid.cell_at(1, 2).unwrap(), P);
        assert!(matches!(
            grid.cell_at(5, 0),
            Err(MazeError::OutOfBounds { row: 5, col: 0 })
        ));
        assert!(matches!(
            grid.is_passable(0, 7),
            Err(MazeError::OutOfBounds { .. })
        ));
        assert!(!grid.is_passable(0, 0).unwrap());
        assert!(grid.is_passable(3, 1).unwrap());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let res = Grid::from_rows(vec![vec![S, E, W], vec![W, W], vec![W, W, W]]);
        assert!(matches!(
            res,
            Err(MazeError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn missing_and_duplicate_markers_are_rejected() {
        let res = Grid::from_rows(vec![vec![S, P, W]]);
        assert!(matches!(res, Err(MazeError::MissingMarker(Marker::End))));

        let res = Grid::from_rows(vec![vec![S, E, S]]);
        match res {
            Err(MazeError::DuplicateMarker {
                marker,
                first,
                second,
            }) => {
                assert_eq!(marker, Marker::Start);
                assert_eq!(first, Position::new(0, 0));
                assert_eq!(second, Position::new(0, 2));
            }
            other => panic!("unexpected result {other:?}"),
        }

        assert!(matches!(Grid::from_rows(vec![]), Err(MazeError::EmptyMaze)));
        assert!(matches!(
            Grid::from_rows(vec![vec![], vec![]]),
            Err(MazeError::EmptyMaze)
        ));
    }

    #[test]
    fn blank_first_row_is_ragged() {
        let res = Grid::from_rows(vec![vec![], vec![S, P, E]]);
        assert!(matches!(
            res,
            Err(MazeError::RaggedRow {
                line: 1,
                expected: 3,
                found: 0
            })
        ));
    }

    #[test]
    fn distances_follow_corridors() {
        let grid = sample();
        let dist = grid.distances_from(grid.start());
        let end = grid.end();
        assert_eq!(dist[end.row * grid.width() + end.col], Some(6));
        assert_eq!(dist[0], None);
        assert!(grid.is_solvable());
    }

    #[test]
    fn walled_off_end_is_not_solvable() {
        let grid = Grid::from_rows(vec![
            vec![W, W, W, W, W],
            vec![W, S, W, E, W],
            vec![W, W, W, W, W],
        ])
        .unwrap();
        assert!(!grid.is_solvable());
    }
}
