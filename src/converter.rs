use crate::codegen::{render_header, rows::row_count};
use crate::config::Config;
use crate::io::files;
use anyhow::{Result, anyhow};
use std::path::PathBuf;
use tracing::{debug, info};

/// The two ways a conversion can fail.
#[derive(Debug)]
pub enum ConvertError {
    /// Input missing, unreadable or permission-denied.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Output path unwritable, disk full or permission-denied.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ConvertError::Read { path, .. } => {
                write!(f, "failed to read input {}", path.display())
            }
            ConvertError::Write { path, .. } => {
                write!(f, "failed to write output {}", path.display())
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Read { source, .. } | ConvertError::Write { source, .. } => Some(source),
        }
    }
}

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub bytes: usize,
    pub rows: usize,
}

/// Staged read → render → write pipeline over one input file.
pub struct Converter {
    config: Config,
    bytes: Vec<u8>,
    header: Option<String>,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            bytes: Vec::new(),
            header: None,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Load the entire input file.
    pub fn read_input(&mut self) -> Result<()> {
        self.bytes = files::read_input(&self.config.input)?;
        debug!(
            path = %self.config.input.display(),
            bytes = self.bytes.len(),
            "read input"
        );
        Ok(())
    }

    /// Render the header text from the bytes read so far.
    pub fn render(&mut self) {
        let header = render_header(&self.bytes, self.config.chunk_size);
        debug!(
            rows = row_count(self.bytes.len(), self.config.chunk_size),
            chunk_size = self.config.chunk_size.get(),
            "rendered header"
        );
        self.header = Some(header);
    }

    /// Write the rendered header, creating or overwriting the output file.
    pub fn write_output(&self) -> Result<Summary> {
        let header = self
            .header
            .as_deref()
            .ok_or_else(|| anyhow!("write_output called before render"))?;
        files::write_output(&self.config.output, header)?;
        info!(
            path = %self.config.output.display(),
            bytes = header.len(),
            "wrote header"
        );
        Ok(Summary {
            output: self.config.output.clone(),
            bytes: self.bytes.len(),
            rows: row_count(self.bytes.len(), self.config.chunk_size),
        })
    }
}

/// Runs the full conversion described by `config`.
pub fn convert(config: &Config) -> Result<Summary> {
    let mut converter = Converter::new(config);
    converter.read_input()?;
    converter.render();
    converter.write_output()
}
