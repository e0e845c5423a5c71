use std::ops::Range;

use tracing::{debug, trace};

use super::grid::Schematic;
use crate::engine::error::SchematicError;

/// A maximal horizontal run of digits and whether it touches a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartToken {
    pub value: u64,
    pub is_valid: bool,
    pub row: usize,
    /// Half-open column span of the digits within `row`.
    pub columns: Range<usize>,
}

/// Raster scan over a schematic yielding one [`PartToken`] per digit run.
///
/// After a run ending at column `e` scanning resumes at `e + 1`. The skipped
/// cell is never a digit since runs are maximal.
pub struct PartScanner<'a> {
    grid: &'a Schematic,
    x: usize,
    y: usize,
}

impl<'a> PartScanner<'a> {
    pub fn new(grid: &'a Schematic) -> Self {
        Self { grid, x: 0, y: 0 }
    }
}

impl Iterator for PartScanner<'_> {
    type Item = Result<PartToken, SchematicError>;

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        while let Some(row) = grid.row(self.y) {
            while self.x < row.len() {
                let start = self.x;
                if !row[start].is_ascii_digit() {
                    self.x += 1;
                    continue;
                }

                let mut end = start + 1;
                while end < row.len() && row[end].is_ascii_digit() {
                    end += 1;
                }
                self.x = end + 1;

                let y = self.y;
                return Some(grid.number_at(y, start..end).map(|value| {
                    let is_valid = touches_symbol(grid, y, start..end);
                    trace!(row = y, column = start, value, is_valid, "digit run");
                    PartToken {
                        value,
                        is_valid,
                        row: y,
                        columns: start..end,
                    }
                }));
            }
            self.y += 1;
            self.x = 0;
        }
        None
    }
}

/// Checks west, east, then the rows above and below, stopping at the first hit.
fn touches_symbol(grid: &Schematic, y: usize, run: Range<usize>) -> bool {
    let west = run
        .start
        .checked_sub(1)
        .is_some_and(|x| grid.is_symbol_at(x, y));
    if west || grid.is_symbol_at(run.end, y) {
        return true;
    }

    let span = run.start.saturating_sub(1)..grid.row_len(y).min(run.end + 1);
    let north = y
        .checked_sub(1)
        .is_some_and(|above| grid.span_has_symbol(above, span.clone()));
    north || grid.span_has_symbol(y + 1, span)
}

pub fn scan_parts(grid: &Schematic) -> PartScanner<'_> {
    PartScanner::new(grid)
}

/// Sum of the values of every digit run adjacent to a symbol.
///
/// Accumulates in `u128` so that even `u64::MAX`-sized parts add up.
pub fn part_number_sum(grid: &Schematic) -> Result<u128, SchematicError> {
    let sum = scan_parts(grid).try_fold(0u128, |sum, token| -> Result<u128, SchematicError> {
        let token = token?;
        if !token.is_valid {
            return Ok(sum);
        }
        sum.checked_add(u128::from(token.value))
            .ok_or(SchematicError::Overflow {
                quantity: "part number sum",
            })
    })?;
    debug!(sum, "part numbers");
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    fn tokens(text: &str) -> Vec<PartToken> {
        let grid = Schematic::parse(text);
        scan_parts(&grid).collect::<Result<_, _>>().unwrap()
    }

    #[test]
    fn test_sample_part_number_sum() {
        let grid = Schematic::parse(SAMPLE);
        assert_eq!(part_number_sum(&grid).unwrap(), 4361);
    }

    #[test]
    fn test_sample_invalid_tokens() {
        let invalid: Vec<u64> = tokens(SAMPLE)
            .into_iter()
            .filter(|t| !t.is_valid)
            .map(|t| t.value)
            .collect();
        assert_eq!(invalid, vec![114, 58]);
    }

    #[test]
    fn test_token_records_location() {
        let found = tokens("..12..\n.....#");
        assert_eq!(
            found,
            vec![PartToken {
                value: 12,
                is_valid: false,
                row: 0,
                columns: 2..4,
            }]
        );
    }

    #[test]
    fn test_no_symbols_sums_to_zero() {
        let grid = Schematic::parse("123..\n..45.\n6....");
        assert_eq!(part_number_sum(&grid).unwrap(), 0);
    }

    #[test]
    fn test_west_and_east_neighbors() {
        assert!(tokens("#12")[0].is_valid);
        assert!(tokens("12%")[0].is_valid);
        assert!(!tokens(".12.")[0].is_valid);
    }

    #[test]
    fn test_diagonal_neighbors() {
        assert!(tokens("$...\n.12.")[0].is_valid);
        assert!(tokens("...$\n.12.")[0].is_valid);
        assert!(tokens(".12.\n$...")[0].is_valid);
        assert!(tokens(".12.\n...$")[0].is_valid);
        assert!(!tokens("....$\n.12..")[0].is_valid);
    }

    #[test]
    fn test_runs_at_grid_edges() {
        let found = tokens("12..34\n......\n56..78");
        assert_eq!(found.len(), 4);
        assert!(found.iter().all(|t| !t.is_valid));

        let found = tokens("1\n*");
        assert!(found[0].is_valid);
    }

    #[test]
    fn test_ragged_neighbor_rows() {
        let found = tokens("#\n...123\n.");
        assert_eq!(found.len(), 1);
        assert!(!found[0].is_valid);

        let found = tokens("....\n12345678\n.......*");
        assert!(found[0].is_valid);
    }

    #[test]
    fn test_period_is_never_a_symbol() {
        let grid = Schematic::parse("...\n.5.\n...");
        assert_eq!(part_number_sum(&grid).unwrap(), 0);
    }

    #[test]
    fn test_cell_after_run_is_skipped() {
        // `a` is skipped after the first run; `9` still starts its own run.
        let found = tokens("1a9");
        assert_eq!(found.len(), 2);
        // Runs never wrap onto the next row.
        let found = tokens("12\n34");
        assert_eq!(
            found.iter().map(|t| t.value).collect::<Vec<_>>(),
            vec![12, 34]
        );
    }

    #[test]
    fn test_scan_is_repeatable() {
        let grid = Schematic::parse(SAMPLE);
        let first = part_number_sum(&grid).unwrap();
        let second = part_number_sum(&grid).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sum_wider_than_a_single_part() {
        let grid = Schematic::parse("18446744073709551615*1");
        assert_eq!(
            part_number_sum(&grid).unwrap(),
            u128::from(u64::MAX) + 1
        );
    }

    #[test]
    fn test_overflowing_run_is_an_error() {
        let grid = Schematic::parse("*99999999999999999999999");
        assert!(matches!(
            part_number_sum(&grid),
            Err(SchematicError::InvalidNumber { row: 0, column: 1, .. })
        ));
    }
}
