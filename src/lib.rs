//! # Dictionary Adapter
//!
//! A unique-key dictionary view over an ordered, multi-value name/value
//! collection. One key in the collection may carry several values; the view
//! reads them back as a single comma-joined string and enforces dictionary
//! semantics on top.
//!
//! ## Features
//!
//! - **Collection Module**: `NameValueCollection`, an ordered multi-value store, and the
//!   `MultiValueStore` trait any backing store can implement
//! - **Dictionary Module**: `DictionaryAdapter`, the unique-key view with live keys,
//!   values and iteration
//!
//! ## Optional Features
//!
//! - `serde_support`: Serde serialization support (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use dictionary_adapter::prelude::*;
//!
//! let mut collection = NameValueCollection::new();
//! collection.add("foo", "1");
//! collection.add("foo", "2");
//! collection.add("bar", "abc");
//!
//! let dictionary = DictionaryAdapter::new(&mut collection);
//! assert_eq!(dictionary.len(), 2);
//! assert_eq!(dictionary.get("foo")?.as_deref(), Some("1,2"));
//! assert!(dictionary.get("zzz").is_err());
//! # Ok::<(), dictionary_adapter::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result};

// Core modules
pub mod error;
pub mod collection;
pub mod dictionary;

// Utility modules
mod utils;

pub use collection::{MultiValueStore, NameValueCollection};
pub use dictionary::{DictionaryAdapter, Entry};

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::error::{Error, Result};
    pub use crate::collection::{CollectionConfig, KeyComparison, MultiValueStore, NameValueCollection};
    pub use crate::dictionary::{DictionaryAdapter, Entry, NullableStr};
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
