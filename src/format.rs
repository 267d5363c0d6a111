//! Plain text maze files
//!
//! A maze file is the character matrix of the grid, one newline-terminated
//! line per row, using the characters of a [`Symbols`] alphabet. For
//! compatibility with older files, [`parse`] also accepts a first line of the
//! form `<height> <width>`, which must then agree with the rows below it.

use std::fs;
use std::path::Path;

use itertools::Itertools;
use tracing::{info, warn};

use crate::error::{MazeError, Result};
use crate::grid::{Cell, Grid};
use crate::symbols::Symbols;

/// Text form of `grid`
pub fn serialize(grid: &Grid, symbols: &Symbols) -> String {
    grid.rows()
        .map(|row| row.iter().map(|c| symbols.symbol(*c)).collect::<String>() + "\n")
        .join("")
}

/// Read a grid from its text form
///
/// Returns error if a character is outside the alphabet, if rows differ in
/// length, or if start/end markers are missing or repeated.
///
/// # Examples
/// ```
/// use maze_game::{format, Symbols};
///
/// let text = "#####\n#S  #\n### #\n#E  #\n#####\n";
/// let grid = format::parse(text, &Symbols::default()).unwrap();
/// assert_eq!((grid.height(), grid.width()), (5, 5));
/// assert_eq!(format::serialize(&grid, &Symbols::default()), text);
/// ```
pub fn parse(text: &str, symbols: &Symbols) -> Result<Grid> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let header = lines.first().and_then(|line| parse_header(line, symbols));
    let first_row_line = if header.is_some() { 2 } else { 1 };
    let body = if header.is_some() { &lines[1..] } else { &lines[..] };

    let rows = body
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.chars()
                .enumerate()
                .map(|(column, symbol)| {
                    symbols.cell(symbol).ok_or(MazeError::UnknownSymbol {
                        symbol,
                        line: i + first_row_line,
                        column: column + 1,
                    })
                })
                .collect::<Result<Vec<Cell>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let grid = Grid::from_rows(rows).map_err(|err| match err {
        MazeError::RaggedRow {
            line,
            expected,
            found,
        } => MazeError::RaggedRow {
            line: line + first_row_line - 1,
            expected,
            found,
        },
        other => other,
    })?;

    if let Some((declared_height, declared_width)) = header {
        if (declared_height, declared_width) != (grid.height(), grid.width()) {
            return Err(MazeError::HeaderMismatch {
                declared_height,
                declared_width,
                height: grid.height(),
                width: grid.width(),
            });
        }
    }
    Ok(grid)
}

/// `<height> <width>` line, unless it is a maze row in its own right
fn parse_header(line: &str, symbols: &Symbols) -> Option<(usize, usize)> {
    if line.chars().all(|c| symbols.cell(c).is_some()) {
        return None;
    }
    line.split_whitespace()
        .map(str::parse::<usize>)
        .collect_tuple()
        .and_then(|(h, w)| Some((h.ok()?, w.ok()?)))
}

/// Read a maze file
pub fn load(path: impl AsRef<Path>, symbols: &Symbols) -> Result<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    if text.is_empty() {
        return Err(MazeError::EmptyMaze);
    }
    let grid = parse(&text, symbols)?;
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "loaded maze"
    );
    if !grid.is_solvable() {
        warn!(path = %path.display(), "the end of this maze cannot be reached from the start");
    }
    Ok(grid)
}

/// Write a maze file, replacing any existing content
pub fn save(path: impl AsRef<Path>, grid: &Grid, symbols: &Symbols) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serialize(grid, symbols))?;
    info!(path = %path.display(), "saved maze");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::grid::Position;

    const SAMPLE: &str = "\
#######
#S#   #
# # # #
#   #E#
#######
";

    #[test]
    fn parse_hand_authored_maze() {
        let grid = parse(SAMPLE, &Symbols::default()).unwrap();
        assert_eq!((grid.height(), grid.width()), (5, 7));
        assert_eq!(grid.start(), Position::new(1, 1));
        assert_eq!(grid.end(), Position::new(3, 5));
        assert_eq!(grid.cell_at(2, 1).unwrap(), Cell::Path);
        assert!(grid.is_solvable());
    }

    #[test]
    fn hand_authored_maze_round_trips() {
        let grid = parse(SAMPLE, &Symbols::default()).unwrap();
        assert_eq!(serialize(&grid, &Symbols::default()), SAMPLE);
        assert_eq!(
            parse(&serialize(&grid, &Symbols::default()), &Symbols::default()).unwrap(),
            grid
        );
    }

    #[test]
    fn custom_alphabet_round_trips() {
        let symbols = Symbols::new('W', '.', 'a', 'z').unwrap();
        let grid = parse(SAMPLE, &Symbols::default()).unwrap();
        let text = serialize(&grid, &symbols);
        assert!(text.starts_with("WWWWWWW\nWaW...W\n"));
        assert_eq!(parse(&text, &symbols).unwrap(), grid);
    }

    #[test]
    fn ragged_row_is_malformed() {
        let err = parse("#S#\n#E\n###\n", &Symbols::default()).unwrap_err();
        assert!(err.is_malformed());
        assert!(matches!(
            err,
            MazeError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn unknown_character_is_reported_with_location() {
        let err = parse("###\n#S#\n#x#\n#E#\n", &Symbols::default()).unwrap_err();
        assert!(matches!(
            err,
            MazeError::UnknownSymbol {
                symbol: 'x',
                line: 3,
                column: 2
            }
        ));
    }

    #[test]
    fn missing_end_is_malformed() {
        let err = parse("###\n#S#\n###\n", &Symbols::default()).unwrap_err();
        assert!(matches!(err, MazeError::MissingMarker(crate::Marker::End)));
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let grid = parse("#####\r\n#S E#\r\n#####\r\n", &Symbols::default()).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.end(), Position::new(1, 3));
    }

    #[test]
    fn dimension_header_is_checked() {
        let grid = parse("3 5\n#####\n#S E#\n#####\n", &Symbols::default()).unwrap();
        assert_eq!((grid.height(), grid.width()), (3, 5));

        let err = parse("4 5\n#####\n#S E#\n#####\n", &Symbols::default()).unwrap_err();
        assert!(matches!(
            err,
            MazeError::HeaderMismatch {
                declared_height: 4,
                ..
            }
        ));

        let err = parse("3 5\n#####\n#S E\n#####\n", &Symbols::default()).unwrap_err();
        assert!(matches!(err, MazeError::RaggedRow { line: 3, .. }));
    }

    #[test]
    fn empty_text_is_malformed() {
        assert!(matches!(
            parse("", &Symbols::default()),
            Err(MazeError::EmptyMaze)
        ));
        assert!(matches!(
            parse("\n\n", &Symbols::default()),
            Err(MazeError::EmptyMaze)
        ));
    }

    #[test]
    fn blank_first_line_is_reported() {
        let err = parse("\n#####\n#S E#\n#####\n", &Symbols::default()).unwrap_err();
        assert!(err.is_malformed());
        assert!(matches!(
            err,
            MazeError::RaggedRow {
                line: 1,
                expected: 5,
                found: 0
            }
        ));
    }

    #[test]
    fn line_break_alphabets_cannot_be_built() {
        let grid = parse(SAMPLE, &Symbols::default()).unwrap();
        assert!(Symbols::new('\r', ' ', 'S', 'E').is_err());
        assert!(Symbols::new('#', '\n', 'S', 'E').is_err());

        // Any alphabet that can be built survives a write and read
        let symbols = Symbols::new('\t', ' ', 'S', 'E').unwrap();
        let text = serialize(&grid, &symbols);
        assert_eq!(parse(&text, &symbols).unwrap(), grid);
    }

    #[test]
    fn empty_file_is_malformed() {
        let path = env::temp_dir().join(format!("maze-game-empty-{}.txt", std::process::id()));
        fs::write(&path, "").unwrap();
        let loaded = load(&path, &Symbols::default());
        fs::remove_file(&path).unwrap();
        assert!(matches!(loaded, Err(MazeError::EmptyMaze)));
    }

    #[test]
    fn save_then_load() {
        let path = env::temp_dir().join(format!("maze-game-format-{}.txt", std::process::id()));
        let grid = parse(SAMPLE, &Symbols::default()).unwrap();
        save(&path, &grid, &Symbols::default()).unwrap();
        let loaded = load(&path, &Symbols::default());
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap(), grid);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = env::temp_dir().join("maze-game-this-file-does-not-exist.txt");
        assert!(matches!(
            load(path, &Symbols::default()),
            Err(MazeError::Io(_))
        ));
    }
}
