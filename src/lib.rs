pub mod engine;
pub mod logging;
pub mod report;
pub mod schematic;

pub use engine::{Config, SchematicError};
pub use report::{analyze, run, Report};
pub use schematic::{CellKind, Schematic};
