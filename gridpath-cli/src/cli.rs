//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use gridpath_puzzles::{DEFAULT_FALLEN_BYTES, DEFAULT_MEMORY_SIZE, PuzzleKind};
use std::path::PathBuf;

/// When to colour the highlighted path
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal (default)
    #[default]
    Auto,
    /// Always emit ANSI colours
    Always,
    /// Never emit ANSI colours; highlighted cells are drawn as `O`
    Never,
}

/// Grid path puzzle solver
#[derive(Parser, Debug)]
#[command(name = "gridpath", about = "Solve grid path puzzles", version)]
pub struct Args {
    /// Puzzle to solve: reindeer-maze, ram-run or weighted-grid
    pub puzzle: PuzzleKind,

    /// Puzzle input file (`-` reads stdin)
    pub input: PathBuf,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Side length of the RAM run memory space
    #[arg(long, default_value_t = DEFAULT_MEMORY_SIZE)]
    pub memory_size: usize,

    /// Number of fallen bytes RAM run part 1 considers
    #[arg(long, default_value_t = DEFAULT_FALLEN_BYTES)]
    pub fallen_bytes: usize,

    /// Draw the grid with the solution highlighted
    #[arg(long)]
    pub show_path: bool,

    /// Colour output: auto, always or never
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
