//! Character alphabet of the maze text format

use crate::error::{MazeError, Result};
use crate::grid::Cell;

/// Characters used for each [`Cell`] in maze files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    wall: char,
    path: char,
    start: char,
    end: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            wall: Self::WALL,
            path: Self::PATH,
            start: Self::START,
            end: Self::END,
        }
    }
}

impl Symbols {
    pub const WALL: char = '#';
    pub const PATH: char = ' ';
    pub const START: char = 'S';
    pub const END: char = 'E';

    /// Custom alphabet
    ///
    /// Returns error if any two characters are equal or if one of them is
    /// `\n` or `\r`, since the file could not be read back unambiguously.
    pub fn new(wall: char, path: char, start: char, end: char) -> Result<Self> {
        let all = [wall, path, start, end];
        if let Some(symbol) = all.into_iter().find(|c| matches!(*c, '\n' | '\r')) {
            return Err(MazeError::LineBreakSymbol(symbol));
        }
        let distinct = (0..all.len()).all(|i| !all[i + 1..].contains(&all[i]));
        if !distinct {
            return Err(MazeError::AmbiguousSymbols {
                wall,
                path,
                start,
                end,
            });
        }
        Ok(Self {
            wall,
            path,
            start,
            end,
        })
    }

    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Wall => self.wall,
            Cell::Path => self.path,
            Cell::Start => self.start,
            Cell::End => self.end,
        }
    }

    /// Cell represented by `symbol`, if it belongs to the alphabet
    pub fn cell(&self, symbol: char) -> Option<Cell> {
        match symbol {
            c if c == self.wall => Some(Cell::Wall),
            c if c == self.path => Some(Cell::Path),
            c if c == self.start => Some(Cell::Start),
            c if c == self.end => Some(Cell::End),
            _ => None,
        }
    }
}
