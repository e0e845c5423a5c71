use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::grid::Schematic;
use crate::engine::config::GearConfig;
use crate::engine::error::SchematicError;

/// West, east, the three cells above, the three cells below.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A gear symbol and the distinct token values around it.
///
/// Values are deduplicated, so two different tokens with the same value
/// next to one symbol count once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearCandidate {
    pub column: usize,
    pub row: usize,
    pub values: BTreeSet<u64>,
    pub is_gear: bool,
}

impl GearCandidate {
    /// Product of the adjacent values, only for actual gears.
    ///
    /// `None` also when the product does not fit in a `u128`, which takes
    /// more than two values around the symbol.
    pub fn ratio(&self) -> Option<u128> {
        if !self.is_gear {
            return None;
        }
        self.values
            .iter()
            .try_fold(1u128, |product, &value| product.checked_mul(u128::from(value)))
    }
}

/// Raster scan yielding one [`GearCandidate`] per gear symbol.
pub struct GearScanner<'a> {
    grid: &'a Schematic,
    config: GearConfig,
    x: usize,
    y: usize,
}

impl<'a> GearScanner<'a> {
    pub fn new(grid: &'a Schematic, config: GearConfig) -> Self {
        Self {
            grid,
            config,
            x: 0,
            y: 0,
        }
    }

    fn candidate_at(&self, x: usize, y: usize) -> Result<GearCandidate, SchematicError> {
        let mut values = BTreeSet::new();
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if self.grid.is_digit_at(nx, ny) {
                values.insert(recover_token(self.grid, nx, ny)?);
            }
        }

        let is_gear = values.len() == self.config.required_values;
        trace!(row = y, column = x, ?values, is_gear, "gear candidate");
        Ok(GearCandidate {
            column: x,
            row: y,
            values,
            is_gear,
        })
    }
}

impl Iterator for GearScanner<'_> {
    type Item = Result<GearCandidate, SchematicError>;

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        while let Some(row) = grid.row(self.y) {
            while self.x < row.len() {
                let x = self.x;
                self.x += 1;
                if row[x] == self.config.symbol {
                    return Some(self.candidate_at(x, self.y));
                }
            }
            self.y += 1;
            self.x = 0;
        }
        None
    }
}

/// Expands from the digit at `(x, y)` to the whole run containing it.
///
/// Fails when `(x, y)` is not a digit, since the recovered span is then empty.
pub fn recover_token(grid: &Schematic, x: usize, y: usize) -> Result<u64, SchematicError> {
    let row = grid.row(y).unwrap_or(&[]);
    let is_digit = |i: usize| row.get(i).is_some_and(char::is_ascii_digit);

    let mut end = x;
    while is_digit(end) {
        end += 1;
    }
    let mut start = x;
    if end > x {
        while start > 0 && is_digit(start - 1) {
            start -= 1;
        }
    }

    grid.number_at(y, start..end)
}

pub fn scan_gears(grid: &Schematic) -> GearScanner<'_> {
    scan_gears_with(grid, GearConfig::default())
}

pub fn scan_gears_with(grid: &Schematic, config: GearConfig) -> GearScanner<'_> {
    GearScanner::new(grid, config)
}

/// Sum of the ratios of every gear.
pub fn gear_ratio_sum(grid: &Schematic) -> Result<u128, SchematicError> {
    gear_ratio_sum_with(grid, GearConfig::default())
}

pub fn gear_ratio_sum_with(grid: &Schematic, config: GearConfig) -> Result<u128, SchematicError> {
    let overflow = |quantity| SchematicError::Overflow { quantity };
    let sum = scan_gears_with(grid, config).try_fold(0u128, |sum, gear| -> Result<u128, SchematicError> {
        let gear = gear?;
        if !gear.is_gear {
            return Ok(sum);
        }
        let ratio = gear.ratio().ok_or(overflow("gear ratio"))?;
        sum.checked_add(ratio).ok_or(overflow("gear ratio sum"))
    })?;
    debug!(sum, "gear ratios");
    Ok(sum)
}
