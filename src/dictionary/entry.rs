//! Key/value pair type and nullable string arguments

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// A key paired with its joined value, as produced by enumeration
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Entry {
    /// The key
    pub key: String,
    /// The joined value, `None` for the null value
    pub value: Option<String>,
}

impl Entry {
    /// Create a new entry
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Get the key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl From<(String, Option<String>)> for Entry {
    fn from((key, value): (String, Option<String>)) -> Self {
        Self { key, value }
    }
}

impl<'a> From<(&'a str, &'a str)> for Entry {
    fn from((key, value): (&'a str, &'a str)) -> Self {
        Self::new(key, Some(value.to_string()))
    }
}

/// A string argument that may be absent.
///
/// Implemented for the usual string types and for `Option` of them, so that
/// `None` stands for a null argument.
pub trait NullableStr {
    /// View the argument as an optional string slice
    fn as_nullable_str(&self) -> Option<&str>;
}

impl NullableStr for str {
    fn as_nullable_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl NullableStr for String {
    fn as_nullable_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: NullableStr + ?Sized> NullableStr for &T {
    fn as_nullable_str(&self) -> Option<&str> {
        (**self).as_nullable_str()
    }
}

impl<T: NullableStr> NullableStr for Option<T> {
    fn as_nullable_str(&self) -> Option<&str> {
        self.as_ref().and_then(NullableStr::as_nullable_str)
    }
}
