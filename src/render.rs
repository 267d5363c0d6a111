//! Text view of a maze

use itertools::Itertools;

use crate::grid::{Grid, Position};
use crate::symbols::Symbols;

/// Character drawn on the player's cell
pub const PLAYER: char = 'X';

/// Draw `grid` line by line, with the player on top if given
pub fn render(grid: &Grid, symbols: &Symbols, player: Option<Position>) -> String {
    grid.rows()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match player {
                    Some(p) if p == Position::new(row, col) => PLAYER,
                    _ => symbols.symbol(*cell),
                })
                .collect::<String>()
        })
        .join("\n")
}
