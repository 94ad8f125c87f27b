//! "key;value" line-block parsing
//!
//! The Result information section is a plain block of `key;value` lines.
//! Splitting happens on the first separator only, so values may themselves
//! contain semicolons. Malformed lines are skipped; duplicate keys keep the
//! last value seen.

use crate::constants::FIELD_SEPARATOR;
use std::collections::HashMap;

/// Parse a key/value block into a map
pub fn parse_block(lines: &[&str]) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for line in lines {
        if let Some((key, value)) = line.split_once(FIELD_SEPARATOR) {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    map
}
