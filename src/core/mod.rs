pub mod alphabet;
pub mod engine;
pub mod kata;
pub mod matrix;
pub mod numbers;
pub mod orchard;
pub mod records;

pub use crate::domain::model::{Dog, Matrix, Person, Record, Residence};
pub use crate::utils::error::Result;
pub use alphabet::alphabet_replace;
pub use kata::KataKind;
pub use matrix::generate_matrix;
pub use numbers::no_boring_zeros;
pub use orchard::find_wrong_way_fruit;
pub use records::{get_pug_owners, tally_in_city, translate_key, PUG};
