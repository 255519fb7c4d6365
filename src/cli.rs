use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "model-header")]
#[command(
    about = "Embed a binary model file into a C header as a hex byte array \
                   with a matching length constant."
)]
pub struct Cli {
    /// Binary file to embed.
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Header file to create or overwrite.
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of byte literals per row. Must be at least 1.
    #[arg(short = 'c', long = "chunk-size", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: NonZeroUsize,
}
