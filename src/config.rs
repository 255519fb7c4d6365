use crate::cli::Cli;
use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_INPUT, DEFAULT_OUTPUT};
use anyhow::Result;
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Maximum number of byte literals on one row.
    pub chunk_size: NonZeroUsize,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Ok(Cli::parse().into())
    }

    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        chunk_size: NonZeroUsize,
    ) -> Self {
        Config {
            input: input.into(),
            output: output.into(),
            chunk_size,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            output: cli.output,
            chunk_size: cli.chunk_size,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
