//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI: banners, memory lines, the results
//! table and the closing prompt. Rendering functions return `String`s; the
//! `print_*` wrappers write them to stdout.

use crate::registry::AlgorithmRegistry;
use crate::utils::trial::{OutcomeStatus, TrialOutcome};
use std::fmt::Write as _;
use std::io::{self, BufRead, IsTerminal, Write as _};
use std::time::Duration;
use terminal_size::{terminal_size, Width};

/// Column labels of the results table
pub const RESULT_HEADERS: [&str; 5] = [
    "Algorithm",
    "Status",
    "Trials run",
    "Total time (ms)",
    "Average time (ms)",
];

/// Get the current terminal width, constrained to a reasonable range
pub fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Horizontal placement used by [`pad`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Pad `s` with `fill` up to `width` characters.
///
/// Strings already at least `width` long are returned unchanged. Centering
/// puts the odd fill character on the right.
pub fn pad(s: &str, fill: char, width: usize, align: Align) -> String {
    let len = s.chars().count();
    let missing = width.saturating_sub(len);
    let (left, right) = match align {
        Align::Left => (0, missing),
        Align::Center => (missing / 2, missing - missing / 2),
    };

    let mut out = String::with_capacity(s.len() + missing * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// Centered title surrounded by spaces and padded with dashes
pub fn banner(title: &str, width: usize) -> String {
    pad(&format!(" {} ", title), '-', width, Align::Center)
}

/// Print a banner one column narrower than the terminal
pub fn print_banner(title: &str) {
    println!("{}", banner(title, get_term_width().saturating_sub(1)));
}

/// Render a peak-memory line, "n/a" when the query failed
pub fn memory_line(label: &str, megabytes: Option<u64>) -> String {
    match megabytes {
        Some(mb) => format!("{}: {} MB", label, mb),
        None => format!("{}: n/a", label),
    }
}

pub fn print_memory(label: &str, megabytes: Option<u64>) {
    println!("{}", memory_line(label, megabytes));
}

fn format_millis(d: Duration, decimals: usize) -> String {
    format!("{:.*}", decimals, d.as_secs_f64() * 1000.0)
}

/// A `TrialOutcome` rendered to table cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub status: String,
    pub trials: String,
    pub total: String,
    pub average: String,
}

impl ReportRow {
    pub fn from_outcome(outcome: &TrialOutcome) -> Self {
        Self {
            name: outcome.name.clone(),
            status: outcome.status.label().to_string(),
            trials: outcome.trials.to_string(),
            total: format_millis(outcome.total, 3),
            average: format_millis(outcome.average, 4),
        }
    }

    /// Cells in `RESULT_HEADERS` order
    pub fn cells(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.status.as_str(),
            self.trials.as_str(),
            self.total.as_str(),
            self.average.as_str(),
        ]
    }
}

/// Column widths: the longest of the header label and every cell
pub fn column_widths<R: AsRef<str>>(headers: &[&str], rows: &[Vec<R>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.as_ref().chars().count());
        }
    }
    widths
}

/// Render an aligned table.
///
/// Widths are measured over all rows before anything is written. Every line
/// of the output has the same length: the sum of the column widths plus
/// three characters per column plus one.
pub fn render_table<R: AsRef<str>>(title: &str, headers: &[&str], rows: &[Vec<R>]) -> String {
    let widths = column_widths(headers, rows);
    let total_width = widths.iter().sum::<usize>() + widths.len() * 3 + 1;

    let mut out = String::new();
    let _ = writeln!(out, "{}", banner(title, total_width));

    for (header, &width) in headers.iter().zip(&widths) {
        let _ = write!(out, "| {} ", pad(header, ' ', width, Align::Center));
    }
    out.push_str("|\n");

    for &width in &widths {
        let _ = write!(out, "|{}", "-".repeat(width + 2));
    }
    out.push_str("|\n");

    for row in rows {
        for (cell, &width) in row.iter().zip(&widths) {
            let _ = write!(out, "| {} ", pad(cell.as_ref(), ' ', width, Align::Left));
        }
        out.push_str("|\n");
    }

    let _ = writeln!(out, "{}", "-".repeat(total_width));
    out
}

/// Render the results table for a set of outcomes, in the given order
pub fn render_results(outcomes: &[TrialOutcome]) -> String {
    let rows: Vec<Vec<String>> = outcomes
        .iter()
        .map(ReportRow::from_outcome)
        .map(|row| row.cells().iter().map(|c| c.to_string()).collect())
        .collect();

    render_table("Results", &RESULT_HEADERS, &rows)
}

pub fn print_results_table(outcomes: &[TrialOutcome]) {
    print!("{}", render_results(outcomes));
}

/// Print crash messages below the table, which only shows the status label
pub fn print_crash_details(outcomes: &[TrialOutcome]) {
    for outcome in outcomes {
        if let OutcomeStatus::Crashed { message } = &outcome.status {
            println!("  {}: {}", outcome.name, message);
        }
    }
}

/// Closing prompt framed to the terminal width
pub fn render_pause_prompt(width: usize) -> String {
    let rule = "=".repeat(width);
    format!(
        "{}\n{}\n{}",
        rule,
        pad("Press Enter to continue...", ' ', width, Align::Center),
        rule
    )
}

/// Wait for Enter. Does nothing when stdin is not a terminal.
pub fn pause() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }

    println!("{}", render_pause_prompt(get_term_width().saturating_sub(1)));
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = stdin.lock().read_line(&mut line);
}

/// Print the help message
pub fn print_help() {
    println!("Usage: algo-bench [OPTIONS]");
    println!();
    println!("Runs every sorting and searching benchmark concurrently and prints a results table.");
    println!();
    println!("Options:");
    println!("  --list, -l            List the benchmark subjects");
    println!("  --help, -h            Show this help message");
    println!("  --sort-size N         Length of the reverse-ordered sort input (default: 10000)");
    println!("  --search-size N       Length of the ascending search space (default: 10000000)");
    println!("  --sort-trials N       Trials per sort benchmark (default: 100)");
    println!("  --search-trials N     Trials per search benchmark (default: 1000)");
    println!("  --timeout SECS        Give up on a benchmark after SECS seconds, 0 = never (default: 600)");
    println!("  --seed N              Seed for search target selection (default: random)");
    println!("  --sequential          Run benchmarks one at a time");
    println!("  --no-pause            Exit without waiting for Enter");
    println!();
    println!("Environment:");
    println!("  RUST_LOG              Log filter, logs go to stderr (default: info)");
}

/// Print the list of benchmark subjects
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for subject in registry.all() {
        let verified = match subject.verify() {
            Ok(()) => "ok".to_string(),
            Err(e) => format!("FAILED: {}", e),
        };
        println!(
            "  {:<15} [{}] - {} (verify: {})",
            subject.name(),
            subject.category(),
            subject.description(),
            verified
        );
    }
}
