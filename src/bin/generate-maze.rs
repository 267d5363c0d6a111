//! CLI for maze generation

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use maze_game::{format, logging, render::render, MazeGenerator, Symbols, DEFAULT_SIZE};

/// Generate a maze with customizable entrance, exit, path and wall characters
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output file to write the maze to
    output: PathBuf,

    /// Width and height of the maze (between 5 and 100, inclusive)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Character to represent the walls
    #[arg(long, default_value_t = Symbols::WALL)]
    wall: char,

    /// Character to represent the paths
    #[arg(long, default_value_t = Symbols::PATH)]
    path: char,

    /// Character to represent the start point
    #[arg(long, default_value_t = Symbols::START)]
    start: char,

    /// Character to represent the end point
    #[arg(long, default_value_t = Symbols::END)]
    end: char,

    /// Print the maze to the console
    #[arg(long)]
    print: bool,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, write it to file
fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let symbols = Symbols::new(args.wall, args.path, args.start, args.end)?;
    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen.generate_maze(args.size, args.size)?;

    if args.print {
        println!("{}", render(&grid, &symbols, None));
    }

    format::save(&args.output, &grid, &symbols)
        .with_context(|| format!("Failed to write maze to {}", args.output.display()))?;
    Ok(())
}
