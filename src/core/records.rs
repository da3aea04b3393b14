use crate::core::{Dog, Person, Record};

pub const PUG: &str = "Pug";

/// Returns a copy of `record` with `old_key` renamed to `new_key`.
///
/// An absent `old_key` still produces `new_key`, holding `null`. If `new_key`
/// already exists its value is replaced by the renamed one.
pub fn translate_key(record: &Record, old_key: &str, new_key: &str) -> Record {
    if old_key == new_key {
        return record.clone();
    }

    let mut translated = record.clone();
    let value = translated
        .data
        .remove(old_key)
        .unwrap_or(serde_json::Value::Null);
    translated.data.insert(new_key.to_string(), value);
    translated
}

/// Counts people whose `lives.city` is exactly `city`.
pub fn tally_in_city(people: &[Person], city: &str) -> usize {
    people
        .iter()
        .filter(|person| person.city() == Some(city))
        .count()
}

/// Owners of every dog of `breed`, in input order. Ownerless dogs are skipped.
pub fn get_pug_owners(dogs: &[Dog], breed: &str) -> Vec<String> {
    dogs.iter()
        .filter(|dog| dog.breed.as_deref() == Some(breed))
        .filter_map(|dog| dog.owner.clone())
        .collect()
}
