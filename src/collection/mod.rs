//! Ordered multi-value collections
//!
//! This module provides the backing side of the dictionary view:
//! - **`NameValueCollection`** - An ordered collection where one name may carry several values
//! - **`MultiValueStore`** - The contract the dictionary view consumes from any backing store
//!
//! Reading a name that carries several values yields them joined by
//! [`constants::VALUE_SEPARATOR`].
//!
//! # Examples
//!
//! ```rust
//! use dictionary_adapter::collection::NameValueCollection;
//!
//! let mut collection = NameValueCollection::new();
//! collection.add("foo", "1");
//! collection.add("foo", "2");
//! collection.add("bar", None);
//!
//! assert_eq!(collection.get("foo").as_deref(), Some("1,2"));
//! assert_eq!(collection.get("bar"), None);
//! assert!(collection.contains_key("bar"));
//! ```

pub mod config;
pub mod name_value;
pub mod store;

pub use config::{CollectionConfig, KeyComparison};
pub use name_value::NameValueCollection;
pub use store::MultiValueStore;

/// Collection constants
pub mod constants {
    //! Constants used throughout the collection module

    /// Separator placed between the values of one key on read
    pub const VALUE_SEPARATOR: &str = ",";
}
