pub mod gear;
pub mod grid;
pub mod token;

pub use gear::{
    gear_ratio_sum, gear_ratio_sum_with, recover_token, scan_gears, scan_gears_with,
    GearCandidate, GearScanner,
};
pub use grid::{CellKind, Schematic};
pub use token::{part_number_sum, scan_parts, PartScanner, PartToken};
