//! CLI for playing a maze

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use clap::Parser;
use maze_game::{format, logging, Game, MazeGenerator, Outcome, Symbols, MAX_SIZE, MIN_SIZE};

/// Maze Game: navigate through the maze to find the exit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File containing the maze layout
    maze_file: PathBuf,

    /// Redraw the screen after each move
    #[arg(long)]
    refresh: bool,

    /// Generate a new maze, save it to the maze file and play it
    #[arg(long)]
    generate: bool,
}

/// Ask a question on stdout, return the trimmed answer
fn prompt(question: &str) -> anyhow::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        bail!("input closed while waiting for an answer");
    }
    Ok(answer.trim().to_string())
}

/// Interactively generate a maze into `path`
///
/// Returns `false` if the user declined to overwrite an existing file.
fn generate(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        let answer = prompt(&format!(
            "The file '{}' already exists. Overwrite it? [Y/N]: ",
            path.display()
        ))?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Exiting without generating a new maze.");
            return Ok(false);
        }
    }

    let answer = prompt(&format!(
        "Enter the dimensions (from {MIN_SIZE} to {MAX_SIZE}) of the maze to generate (e.g. 10): "
    ))?;
    let size: usize = answer
        .parse()
        .with_context(|| format!("`{answer}` is not a maze size"))?;

    let grid = MazeGenerator::new(None).generate_maze(size, size)?;
    format::save(path, &grid, &Symbols::default())
        .with_context(|| format!("Failed to write maze to {}", path.display()))?;
    Ok(true)
}

/// Read maze from file, play until won or quit
fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    if args.generate && !generate(&args.maze_file)? {
        return Ok(());
    }

    let symbols = Symbols::default();
    let grid = format::load(&args.maze_file, &symbols)
        .with_context(|| format!("Failed to load maze from {}", args.maze_file.display()))?;

    let mut game = Game::new(&grid, symbols, args.refresh);
    let outcome = game.play(io::stdin().lock(), &mut io::stdout().lock())?;
    tracing::info!(?outcome, "game over");
    if outcome == Outcome::InputClosed {
        println!("Input closed, leaving the maze.");
    }
    Ok(())
}
