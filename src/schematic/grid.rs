use std::ops::Range;
use std::path::Path;

use tracing::debug;

use crate::engine::config::{InputConfig, DEFAULT_BLANK};
use crate::engine::error::{load_file_safe, SchematicError};

/// Classification of a single schematic cell.
///
/// Every character falls into exactly one kind. The blank filler never counts
/// as a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Digit,
    Period,
    Symbol,
}

impl CellKind {
    pub fn classify(c: char) -> Self {
        Self::classify_with(c, DEFAULT_BLANK)
    }

    pub fn classify_with(c: char, blank: char) -> Self {
        if c.is_ascii_digit() {
            CellKind::Digit
        } else if c == blank {
            CellKind::Period
        } else {
            CellKind::Symbol
        }
    }
}

/// Immutable character grid read from the input.
///
/// Rows keep their own length; nothing is padded, so every lookup is
/// bounds-checked against the row it touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic {
    rows: Vec<Vec<char>>,
    blank: char,
}

impl Schematic {
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, DEFAULT_BLANK)
    }

    /// Splits `text` into rows, stripping trailing whitespace from each line.
    pub fn parse_with(text: &str, blank: char) -> Self {
        let rows = text
            .lines()
            .map(|line| line.trim_end().chars().collect())
            .collect();
        Self { rows, blank }
    }

    pub fn load(config: &InputConfig) -> Result<Self, SchematicError> {
        Self::load_from(&config.path, config.blank)
    }

    pub fn load_from(path: &Path, blank: char) -> Result<Self, SchematicError> {
        let text = load_file_safe(path)?;
        let grid = Self::parse_with(&text, blank);
        debug!(
            path = %path.display(),
            rows = grid.height(),
            "loaded schematic"
        );
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, y: usize) -> Option<&[char]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// Length of row `y`, or 0 past the last row.
    pub fn row_len(&self, y: usize) -> usize {
        self.row(y).map_or(0, <[char]>::len)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.row(y).and_then(|row| row.get(x).copied())
    }

    pub fn kind_of(&self, c: char) -> CellKind {
        CellKind::classify_with(c, self.blank)
    }

    pub fn kind(&self, x: usize, y: usize) -> Option<CellKind> {
        self.cell(x, y).map(|c| self.kind_of(c))
    }

    pub fn is_digit_at(&self, x: usize, y: usize) -> bool {
        self.kind(x, y) == Some(CellKind::Digit)
    }

    pub fn is_symbol_at(&self, x: usize, y: usize) -> bool {
        self.kind(x, y) == Some(CellKind::Symbol)
    }

    /// True when row `y` holds a symbol anywhere in `columns`.
    ///
    /// The range is clipped to the row, so a short or missing row just
    /// contributes fewer cells.
    pub fn span_has_symbol(&self, y: usize, columns: Range<usize>) -> bool {
        let Some(row) = self.row(y) else {
            return false;
        };
        let end = columns.end.min(row.len());
        let start = columns.start.min(end);
        row[start..end]
            .iter()
            .any(|&c| self.kind_of(c) == CellKind::Symbol)
    }

    /// Parses the cells `columns` of row `y` as one number.
    ///
    /// Out-of-range or empty spans parse as the empty string and fail.
    pub fn number_at(&self, y: usize, columns: Range<usize>) -> Result<u64, SchematicError> {
        let text: String = self
            .row(y)
            .and_then(|row| row.get(columns.clone()))
            .unwrap_or(&[])
            .iter()
            .collect();
        match text.parse() {
            Ok(value) => Ok(value),
            Err(source) => Err(SchematicError::InvalidNumber {
                row: y,
                column: columns.start,
                text,
                source,
            }),
        }
    }
}
