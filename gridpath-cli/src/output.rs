//! Output formatting for puzzle results

use chrono::TimeDelta;
use gridpath_puzzles::{SolveError, SolveResult};

/// Outcome of one part, ready to print
#[derive(Debug)]
pub struct PartReport {
    pub puzzle: &'static str,
    pub part: u8,
    pub answer: Result<String, SolveError>,
    /// Set on the first part run, which carries the parse cost
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl PartReport {
    pub fn new(
        puzzle: &'static str,
        part: u8,
        outcome: Result<SolveResult, SolveError>,
        parse_duration: Option<TimeDelta>,
    ) -> Self {
        let (answer, solve_duration) = match outcome {
            Ok(result) => {
                let duration = result.duration();
                (Ok(result.answer), duration)
            }
            Err(e) => (Err(e), TimeDelta::zero()),
        };

        Self {
            puzzle,
            part,
            answer,
            parse_duration,
            solve_duration,
        }
    }
}

/// Output formatter for puzzle results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, report: &PartReport) {
        match self.format_result(report) {
            Ok(line) => println!("{}", line),
            Err(line) => eprintln!("{}", line),
        }
    }

    /// The line for one result: `Ok` for stdout, `Err` for stderr
    fn format_result(&self, report: &PartReport) -> Result<String, String> {
        let prefix = format!("{} Part {}", report.puzzle, report.part);

        match (&report.answer, self.quiet) {
            (Ok(answer), true) => Ok(answer.clone()),
            (Err(e), true) => Err(format!("Error: {}", e)),
            (Ok(answer), false) => {
                let parse_timing = report
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                Ok(format!(
                    "{}: {} ({}solve: {})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(report.solve_duration)
                ))
            }
            (Err(e), false) => Err(format!("{}: Error - {}", prefix, e)),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, reports: &[PartReport]) {
        if self.quiet {
            return;
        }

        let successes = reports.iter().filter(|r| r.answer.is_ok()).count();
        let failures = reports.len() - successes;

        let total_parse_time: TimeDelta = reports.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = reports
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros.unsigned_abs().into())
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
