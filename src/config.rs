//! Harness configuration and command-line parsing.
//!
//! The harness runs with no arguments using the compiled-in defaults below.
//! Flags exist to shrink the workload or change scheduling.

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// Length of the reverse-ordered array handed to every sort
pub const DEFAULT_SORT_SIZE: usize = 10_000;
/// Length of the ascending search space
pub const DEFAULT_SEARCH_SIZE: usize = 10_000_000;
/// Trials per sort benchmark
pub const DEFAULT_SORT_TRIALS: usize = 100;
/// Trials per search benchmark
pub const DEFAULT_SEARCH_TRIALS: usize = 1_000;
/// Bounded wait for all benchmarks to report
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Configuration for one harness run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    pub sort_size: usize,
    pub search_size: usize,
    pub sort_trials: usize,
    pub search_trials: usize,
    /// `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Seed for search target selection; random when `None`
    pub seed: Option<u64>,
    /// Run benchmarks one at a time instead of concurrently
    pub sequential: bool,
    /// Wait for Enter before exiting
    pub pause: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sort_size: DEFAULT_SORT_SIZE,
            search_size: DEFAULT_SEARCH_SIZE,
            sort_trials: DEFAULT_SORT_TRIALS,
            search_trials: DEFAULT_SEARCH_TRIALS,
            timeout: Some(DEFAULT_TIMEOUT),
            seed: None,
            sequential: false,
            pause: true,
        }
    }
}

/// What the CLI was asked to do
#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand {
    Run(HarnessConfig),
    Help,
    List,
}

impl HarnessConfig {
    /// Parse command-line arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<CliCommand, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = HarnessConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(CliCommand::Help),
                "--list" | "-l" => return Ok(CliCommand::List),
                "--sort-size" => config.sort_size = parse_value("--sort-size", args.next())?,
                "--search-size" => {
                    config.search_size = parse_value("--search-size", args.next())?
                }
                "--sort-trials" => {
                    config.sort_trials = parse_value("--sort-trials", args.next())?
                }
                "--search-trials" => {
                    config.search_trials = parse_value("--search-trials", args.next())?
                }
                "--timeout" => {
                    let secs: u64 = parse_value("--timeout", args.next())?;
                    config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
                }
                "--seed" => config.seed = Some(parse_value("--seed", args.next())?),
                "--sequential" => config.sequential = true,
                "--no-pause" => config.pause = false,
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }

        Ok(CliCommand::Run(config))
    }
}

fn parse_value<T, S>(option: &'static str, raw: Option<S>) -> Result<T, ConfigError>
where
    T: FromStr,
    S: AsRef<str>,
{
    let raw = raw.ok_or(ConfigError::MissingValue(option))?;
    raw.as_ref()
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            option,
            value: raw.as_ref().to_string(),
        })
}
