use tracing::info;

use crate::engine::config::{Config, GearConfig, OutputConfig};
use crate::engine::error::SchematicError;
use crate::schematic::{gear_ratio_sum_with, part_number_sum, Schematic};

/// Both puzzle answers for one schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    /// Sum of part numbers adjacent to a symbol
    pub part1: u128,
    /// Sum of gear ratios
    pub part2: u128,
}

impl Report {
    pub fn render(&self, output: &OutputConfig) -> String {
        format!(
            "{}\n{}\nPart 1: {}\nPart 2: {}\n",
            output.banner, output.separator, self.part1, self.part2
        )
    }
}

pub fn analyze(grid: &Schematic, gear: &GearConfig) -> Result<Report, SchematicError> {
    let part1 = part_number_sum(grid)?;
    let part2 = gear_ratio_sum_with(grid, gear.clone())?;
    Ok(Report { part1, part2 })
}

/// Loads the configured input, runs both passes and renders the report.
///
/// Nothing is rendered unless both passes succeed.
pub fn run(config: &Config) -> Result<String, SchematicError> {
    let grid = Schematic::load(&config.input)?;
    let report = analyze(&grid, &config.gear)?;
    info!(part1 = report.part1, part2 = report.part2, "schematic analyzed");
    Ok(report.render(&config.output))
}
