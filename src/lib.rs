pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::DrillSheet;
pub use crate::core::engine::{DrillOutcome, DrillReport, KataEngine};
pub use crate::core::{
    alphabet_replace, find_wrong_way_fruit, generate_matrix, get_pug_owners, no_boring_zeros,
    tally_in_city, translate_key, KataKind,
};
pub use utils::error::{KataError, Result};
