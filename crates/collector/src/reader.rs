use crate::error::{CollectorError, Result};
use std::path::Path;

/// Read a source file, dropping any bytes that are not valid UTF-8.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CollectorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_source_lossy(&bytes))
}

/// Decode bytes as UTF-8, skipping invalid sequences instead of failing.
pub fn read_source_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}
