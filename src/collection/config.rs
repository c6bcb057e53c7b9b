//! Collection configuration

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// How keys are compared when looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum KeyComparison {
    /// Keys match only when byte-for-byte equal
    #[default]
    Ordinal,
    /// Keys match ignoring ASCII case
    IgnoreAsciiCase,
}

impl KeyComparison {
    /// Check whether two keys name the same entry
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            KeyComparison::Ordinal => a == b,
            KeyComparison::IgnoreAsciiCase => a.eq_ignore_ascii_case(b),
        }
    }
}

/// Configuration for a [`NameValueCollection`](super::NameValueCollection)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct CollectionConfig {
    /// Key comparison used for every lookup
    pub key_comparison: KeyComparison,
    /// Number of keys reserved up front
    pub initial_capacity: usize,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            key_comparison: KeyComparison::Ordinal,
            initial_capacity: 0,
        }
    }
}
