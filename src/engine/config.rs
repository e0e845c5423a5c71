// Configuration for the schematic scanner.
// Defaults reproduce the fixed puzzle conventions: `input.txt`, `.` blanks, `*` gears.

use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_BLANK: char = '.';
pub const DEFAULT_GEAR_SYMBOL: char = '*';

/// Where the grid comes from and how its filler cells look.
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// Schematic file, relative to the working directory (default `input.txt`)
    pub path: PathBuf,

    /// Filler character that is neither a digit nor a symbol (default `.`)
    pub blank: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT_PATH),
            blank: DEFAULT_BLANK,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GearConfig {
    /// Symbol inspected by the gear pass (default `*`)
    pub symbol: char,

    /// Number of distinct adjacent values that makes a gear (default 2)
    pub required_values: usize,
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_GEAR_SYMBOL,
            required_values: 2,
        }
    }
}

/// Text written to stdout around the two sums.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub banner: String,
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            banner: "2023 AoC - Day 3".to_string(),
            separator: "-".repeat(16),
        }
    }
}

/// Master configuration combining all scanner settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub input: InputConfig,
    pub gear: GearConfig,
    pub output: OutputConfig,
}
