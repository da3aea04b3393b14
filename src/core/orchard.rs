use crate::utils::error::{KataError, Result};
use std::collections::HashMap;

const KATA: &str = "find_wrong_way_fruit";

/// Index of the one fruit spelled differently from the rest.
///
/// When several spellings occur once (e.g. `["apple", "elppa"]`) the earliest wins.
pub fn find_wrong_way_fruit<S: AsRef<str>>(orchard: &[S]) -> Result<usize> {
    if orchard.is_empty() {
        return Err(KataError::invalid_argument(KATA, "orchard is empty"));
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for fruit in orchard {
        *counts.entry(fruit.as_ref()).or_default() += 1;
    }

    orchard
        .iter()
        .position(|fruit| counts[fruit.as_ref()] == 1)
        .ok_or_else(|| {
            KataError::not_found(
                KATA,
                format!("no singleton among {} fruits", orchard.len()),
            )
        })
}
