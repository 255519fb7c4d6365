use crate::converter::ConvertError;
use anyhow::Result;
use std::{fs, path::Path};

/// Reads the whole input file into memory. The handle is closed before returning.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| {
        anyhow::Error::from(ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Creates or truncates `path` and writes `text` in full.
pub fn write_output(
    path: &Path,
    text: &str,
) -> Result<()> {
    fs::write(path, text).map_err(|source| {
        anyhow::Error::from(ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })
    })
}
