//! Configuration resolution from CLI args

use crate::cli::{Args, ColorChoice};
use crate::error::CliError;
use gridpath_puzzles::{PuzzleKind, PuzzleOptions};
use log::LevelFilter;
use std::fmt;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Where the puzzle input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(expand_tilde(path))
        }
    }

    /// Read the whole input
    pub fn read(&self) -> Result<String, CliError> {
        let result = match self {
            InputSource::Stdin => {
                let mut input = String::new();
                std::io::stdin().read_to_string(&mut input).map(|_| input)
            }
            InputSource::File(path) => std::fs::read_to_string(path),
        };
        result.map_err(|source| CliError::Input {
            source_name: self.to_string(),
            source,
        })
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolved runtime configuration
pub struct Config {
    /// Puzzle to solve
    pub puzzle: PuzzleKind,
    /// Where the input was read from
    pub source: InputSource,
    /// Raw puzzle input
    pub input: String,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Puzzle settings
    pub options: PuzzleOptions,
    /// Whether to draw the solution
    pub show_path: bool,
    /// Whether to emit ANSI colours
    pub color: bool,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: LevelFilter,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, reading the puzzle input
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let source = InputSource::from_arg(&args.input);
        let input = source.read()?;
        Self::with_input(args, source, input)
    }

    fn with_input(args: Args, source: InputSource, input: String) -> Result<Self, CliError> {
        if args.memory_size == 0 {
            return Err(CliError::Config(
                "memory size must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            puzzle: args.puzzle,
            source,
            input,
            part_filter: args.part,
            options: PuzzleOptions {
                memory_size: args.memory_size,
                fallen_bytes: args.fallen_bytes,
            },
            show_path: args.show_path,
            color: resolve_color(args.color, std::io::stdout().is_terminal()),
            log_level: log_level(args.verbose, args.quiet),
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

fn resolve_color(choice: ColorChoice, stdout_is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Auto => stdout_is_terminal,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Log level from the `-v` count, or errors only in quiet mode
fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
