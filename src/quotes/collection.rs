use crate::error::{QuoteError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Trimmed quote lines in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteCollection {
    lines: Vec<String>,
}

impl QuoteCollection {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn with_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Reads the whole file and splits it into quotes.
    ///
    /// The file handle is closed before this returns. Any failure to open or
    /// read the file is reported as [`QuoteError::SourceUnavailable`]; an empty
    /// file is not an error here, callers decide what an empty collection means.
    pub fn from_file(path: &Path) -> Result<Self> {
        let unavailable = |source: std::io::Error| QuoteError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let mut bytes = Vec::new();
        {
            let mut file = File::open(path).map_err(unavailable)?;
            file.read_to_end(&mut bytes).map_err(unavailable)?;
        }

        let content = String::from_utf8_lossy(&bytes);
        let collection = Self::parse(&content);
        debug!(path = %path.display(), bytes = bytes.len(), lines = collection.len(), "Loaded quote file");

        Ok(collection)
    }

    /// Splits text on `\n`, `\r\n` or a lone `\r` and trims every line.
    ///
    /// Blank lines are kept as empty quotes. A terminator at the very end does
    /// not produce a trailing empty line.
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

        let lines = normalized
            .lines()
            .map(|line| line.trim().to_string())
            .collect();

        Self { lines }
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push(line.trim().to_string());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
