//! Dictionary view over a multi-value store
//!
//! [`DictionaryAdapter`] wraps any [`MultiValueStore`](crate::collection::MultiValueStore)
//! and exposes it with unique-key mapping semantics:
//!
//! - Reads fail with `KeyNotFound` for missing keys instead of returning nothing
//! - `add` rejects keys that already exist
//! - `set` collapses a multi-value key down to one value
//! - Absent (null) keys are rejected with `InvalidArgument`
//!
//! Keys, values and entries are live views. Nothing is cached between calls.

pub mod adapter;
pub mod entry;
pub mod iter;

pub use adapter::DictionaryAdapter;
pub use entry::{Entry, NullableStr};
pub use iter::{Iter, Keys, Values};
