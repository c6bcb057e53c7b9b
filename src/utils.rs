//! Utility functions for the dictionary adapter

use crate::collection::constants::VALUE_SEPARATOR;

/// Join a key's values into the single string reported on read.
///
/// An empty list is the null value, not an empty string.
pub fn join_values(values: &[String]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(values.join(VALUE_SEPARATOR))
}
