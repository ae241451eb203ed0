//! gridpath - Command-line interface for solving grid path puzzles

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod render;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use output::{OutputFormatter, PartReport};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init(config.log_level);
    log::info!("solving {} from {}", config.puzzle, config.source);

    let mut puzzle = gridpath_puzzles::create(config.puzzle, &config.options, &config.input)?;

    let parts = match config.part_filter {
        Some(part) => part..=part,
        None => 1..=puzzle.parts(),
    };

    let formatter = OutputFormatter::new(config.quiet);
    let mut reports = Vec::new();
    for part in parts {
        let parse_duration = reports.is_empty().then(|| puzzle.parse_duration());
        let report = PartReport::new(puzzle.name(), part, puzzle.solve(part), parse_duration);
        formatter.print_result(&report);
        reports.push(report);
    }

    if config.show_path {
        show_path(puzzle.as_mut(), config.color);
    }

    formatter.print_summary(&reports);

    let failed = reports.iter().filter(|r| r.answer.is_err()).count();
    if failed > 0 {
        return Err(CliError::PartsFailed(failed));
    }
    Ok(())
}

fn show_path(puzzle: &mut dyn gridpath_puzzles::DynPuzzle, color: bool) {
    match puzzle.overlay() {
        Ok(Some(overlay)) => {
            println!();
            println!("{}", render::render_overlay(&overlay, color));
        }
        Ok(None) => log::warn!("{} has nothing to draw", puzzle.name()),
        Err(e) => log::warn!("cannot draw {}: {}", puzzle.name(), e),
    }
}
