// src/schema/mod.rs

use std::collections::{BTreeMap, HashSet};

/// The six column names every year page is expected to carry, in position order.
pub const HEADERS: [&str; 6] = [
    "date",
    "location",
    "operator",
    "aircraft type",
    "registration",
    "fatalities",
];

/// Column position -> lower-cased column name.
pub type HeaderSchema = BTreeMap<usize, String>;

/// True once positions `0..6` are all filled and their values are exactly
/// the expected column names, in any order.
pub fn is_complete(headers: &HeaderSchema) -> bool {
    if !(0..HEADERS.len()).all(|pos| headers.contains_key(&pos)) {
        return false;
    }
    let got: HashSet<&str> = (0..HEADERS.len())
        .filter_map(|pos| headers.get(&pos).map(String::as_str))
        .collect();
    let want: HashSet<&str> = HEADERS.iter().copied().collect();
    got == want
}

/// The schema as a fully populated map, for comparisons.
pub fn expected() -> HeaderSchema {
    HEADERS
        .iter()
        .enumerate()
        .map(|(pos, name)| (pos, name.to_string()))
        .collect()
}
