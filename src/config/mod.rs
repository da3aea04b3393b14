#[cfg(feature = "cli")]
pub mod cli;
pub mod drill_sheet;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use drill_sheet::{Drill, DrillSheet, Expectation};
