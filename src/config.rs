use chrono::Utc;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::utils::paths::get_default_quote_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Clipboard,
    Stdout,
}

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub quote_file: PathBuf,
    pub seed: Option<u64>,
    pub output: OutputTarget,
}

fn default_quote_file() -> PathBuf {
    get_default_quote_path()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quote_file: default_quote_file(),
            seed: None,
            output: OutputTarget::default(),
        }
    }
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            quote_file: cli.quote_file.unwrap_or_else(default_quote_file),
            seed: cli.seed,
            output: if cli.stdout {
                OutputTarget::Stdout
            } else {
                OutputTarget::Clipboard
            },
        }
    }

    /// The explicit seed if one was given, otherwise the clock.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

/// Whole seconds since the Unix epoch. Runs within the same second share a seed.
pub fn clock_seed() -> u64 {
    Utc::now().timestamp() as u64
}
