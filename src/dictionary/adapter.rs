//! Unique-key dictionary view over a multi-value store

use tracing::{debug, trace};

use super::entry::{Entry, NullableStr};
use super::iter::{Iter, Keys, Values};
use crate::collection::MultiValueStore;
use crate::error::{Error, Result};

/// Presents a [`MultiValueStore`] as a mapping with unique keys.
///
/// The adapter holds only the store handle. Every call is delegated to the
/// store immediately, so counts, keys, values and iteration always reflect the
/// store's current state. Keys whose values were added natively read back as
/// one comma-joined string.
///
/// # Examples
///
/// ```rust
/// use dictionary_adapter::prelude::*;
///
/// let mut collection = NameValueCollection::new();
/// collection.add("foo", "1");
/// collection.add("foo", "2");
///
/// let mut dictionary = DictionaryAdapter::new(&mut collection);
/// assert_eq!(dictionary.get("foo")?.as_deref(), Some("1,2"));
///
/// dictionary.set("foo", "567")?;
/// assert!(dictionary.add("foo", "8").is_err());
/// assert_eq!(collection.get("foo").as_deref(), Some("567"));
/// # Ok::<(), dictionary_adapter::Error>(())
/// ```
#[derive(Debug)]
pub struct DictionaryAdapter<S> {
    store: S,
}

impl<S: MultiValueStore> DictionaryAdapter<S> {
    /// Wrap a store handle
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Wrap a store handle that may be absent
    pub fn try_new(store: Option<S>) -> Result<Self> {
        store.map(Self::new).ok_or_else(|| Error::NullReference {
            name: "store".to_string(),
        })
    }

    /// Get the store handle
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the store handle mutably
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Release the store handle
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Number of keys currently in the store
    pub fn len(&self) -> usize {
        self.store.count()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Always `false`: the view accepts writes
    pub fn is_read_only(&self) -> bool {
        false
    }

    /// Get the joined value for `key`.
    ///
    /// Fails with [`Error::KeyNotFound`] if the key is not present. A present
    /// key without values yields `Ok(None)`.
    pub fn get<K: NullableStr>(&self, key: K) -> Result<Option<String>> {
        let key = require_key(&key)?;
        if !self.store.contains_key(key) {
            debug!(key, "lookup of missing key");
            return Err(Error::KeyNotFound {
                key: key.to_string(),
            });
        }
        Ok(self.store.get(key))
    }

    /// Assign `value` to `key`, replacing every value the key held before
    pub fn set<K: NullableStr, V: NullableStr>(&mut self, key: K, value: V) -> Result<()> {
        let key = require_key(&key)?;
        trace!(key, "set");
        self.store.set(key, value.as_nullable_str());
        Ok(())
    }

    /// Keys in insertion order, read from the store as the iterator advances
    pub fn keys(&self) -> Keys<'_, S> {
        Keys::new(&self.store)
    }

    /// Joined values in key order, read from the store as the iterator advances
    pub fn values(&self) -> Values<'_, S> {
        Values::new(&self.store)
    }

    /// Check whether `key` is present
    pub fn contains_key<K: NullableStr>(&self, key: K) -> Result<bool> {
        let key = require_key(&key)?;
        Ok(self.store.contains_key(key))
    }

    /// Check whether the store's current value for `key` is exactly `value`.
    ///
    /// A null key is never contained. A missing key reads as the null value,
    /// so it matches a null `value`.
    pub fn contains_entry<K: NullableStr, V: NullableStr>(&self, key: K, value: V) -> bool {
        match key.as_nullable_str() {
            Some(key) => self.store.get(key).as_deref() == value.as_nullable_str(),
            None => false,
        }
    }

    /// Look up `key`, returning whether it was found along with its value
    pub fn try_get<K: NullableStr>(&self, key: K) -> Result<(bool, Option<String>)> {
        let key = require_key(&key)?;
        if self.store.contains_key(key) {
            Ok((true, self.store.get(key)))
        } else {
            Ok((false, None))
        }
    }

    /// Insert a new key.
    ///
    /// Fails with [`Error::Unsupported`] if the key is already present,
    /// whatever its value.
    pub fn add<K: NullableStr, V: NullableStr>(&mut self, key: K, value: V) -> Result<()> {
        let key = require_key(&key)?;
        if self.store.contains_key(key) {
            debug!(key, "rejected duplicate key");
            return Err(Error::Unsupported {
                operation: "add".to_string(),
                reason: format!("key '{}' already exists", key),
            });
        }
        self.set(key, value)
    }

    /// Insert a new entry, see [`DictionaryAdapter::add`]
    pub fn add_entry(&mut self, entry: Entry) -> Result<()> {
        self.add(entry.key, entry.value)
    }

    /// Remove every key from the store
    pub fn clear(&mut self) {
        trace!("clear");
        self.store.clear();
    }

    /// Remove `key`, returning whether it was present
    pub fn remove<K: NullableStr>(&mut self, key: K) -> Result<bool> {
        let key = require_key(&key)?;
        if !self.store.contains_key(key) {
            return Ok(false);
        }
        trace!(key, "remove");
        self.store.remove(key);
        Ok(true)
    }

    /// Remove `key` only if its current value is exactly `value`.
    ///
    /// Follows [`DictionaryAdapter::contains_entry`]: a missing key paired
    /// with a null value reports `true` and leaves the store unchanged.
    pub fn remove_entry<K: NullableStr, V: NullableStr>(&mut self, key: K, value: V) -> bool {
        if !self.contains_entry(&key, &value) {
            return false;
        }
        match key.as_nullable_str() {
            Some(key) => {
                trace!(key, "remove entry");
                self.store.remove(key);
                true
            }
            None => false,
        }
    }

    /// Iterate over `(key, joined value)` entries in insertion order
    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(&self.store)
    }

    /// Write every entry into `destination`, starting at `start_index`.
    ///
    /// Fails with [`Error::InvalidArgument`] if the destination is absent or
    /// too short, and with [`Error::OutOfRange`] if `start_index` is negative.
    /// The destination is untouched on failure.
    pub fn copy_to(&self, destination: Option<&mut [Entry]>, start_index: isize) -> Result<()> {
        let destination = destination.ok_or_else(|| Error::InvalidArgument {
            name: "destination".to_string(),
            reason: "destination must not be null".to_string(),
        })?;
        let start = usize::try_from(start_index).map_err(|_| Error::OutOfRange {
            name: "start_index".to_string(),
            value: start_index as i64,
        })?;
        let count = self.len();
        let fits = start
            .checked_add(count)
            .is_some_and(|end| end <= destination.len());
        if !fits {
            debug!(start, count, capacity = destination.len(), "copy destination too short");
            return Err(Error::InvalidArgument {
                name: "destination".to_string(),
                reason: format!(
                    "{} entries do not fit at index {} of a destination of length {}",
                    count,
                    start,
                    destination.len()
                ),
            });
        }
        for (slot, entry) in destination[start..].iter_mut().zip(self.iter()) {
            *slot = entry;
        }
        Ok(())
    }
}

impl<'a, S: MultiValueStore> IntoIterator for &'a DictionaryAdapter<S> {
    type Item = Entry;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn require_key<K: NullableStr + ?Sized>(key: &K) -> Result<&str> {
    key.as_nullable_str().ok_or_else(|| {
        debug!("rejected null key");
        Error::null_key()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::NameValueCollection;

    fn sample() -> NameValueCollection {
        let mut collection = NameValueCollection::new();
        collection.add("foo", "1");
        collection.add("foo", "2");
        collection.add("bar", "abc");
        collection.add("baz", None);
        collection
    }

    #[test]
    fn test_try_new_without_store() {
        let result = DictionaryAdapter::<&mut NameValueCollection>::try_new(None);
        assert!(matches!(result, Err(Error::NullReference { .. })));

        let mut collection = sample();
        let dictionary = DictionaryAdapter::try_new(Some(&mut collection)).unwrap();
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_is_read_only() {
        let mut collection = NameValueCollection::new();
        let dictionary = DictionaryAdapter::new(&mut collection);
        assert!(!dictionary.is_read_only());
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_get() {
        let mut collection = sample();
        let dictionary = DictionaryAdapter::new(&mut collection);
        assert_eq!(dictionary.get("foo").unwrap().as_deref(), Some("1,2"));
        assert_eq!(dictionary.get("bar").unwrap().as_deref(), Some("abc"));
        assert_eq!(dictionary.get("baz").unwrap(), None);
    }

    #[test]
    fn test_get_missing_key() {
        let mut collection = sample();
        let dictionary = DictionaryAdapter::new(&mut collection);
        assert_eq!(
            dictionary.get("zzz"),
            Err(Error::KeyNotFound {
                key: "zzz".to_string()
            })
        );
        assert!(!dictionary.contains_key("zzz").unwrap());
    }

    #[test]
    fn test_null_key_is_invalid() {
        let mut collection = sample();
        let mut dictionary = DictionaryAdapter::new(&mut collection);
        let null = None::<&str>;
        assert_eq!(dictionary.get(null), Err(Error::null_key()));
        assert_eq!(dictionary.set(null, "x"), Err(Error::null_key()));
        assert_eq!(dictionary.contains_key(null), Err(Error::null_key()));
        assert_eq!(dictionary.try_get(null), Err(Error::null_key()));
        assert_eq!(dictionary.add(null, "x"), Err(Error::null_key()));
        assert_eq!(dictionary.remove(null), Err(Error::null_key()));
        assert!(!dictionary.contains_entry(null, "x"));
        assert!(!dictionary.remove_entry(null, None::<&str>));
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_set_collapses_values() {
        let mut collection = sample();
        {
            let mut dictionary = DictionaryAdapter::new(&mut collection);
            dictionary.set("foo", "567").unwrap();
            assert_eq!(dictionary.get("foo").unwrap().as_deref(), Some("567"));
            dictionary.set("new", None::<&str>).unwrap();
            assert_eq!(dictionary.len(), 4);
        }
        assert_eq!(collection.get_values("foo").unwrap(), ["567"]);
        assert_eq!(collection.key_at(3), Some("new"));
    }

    #[test]
    fn test_add_new_key() {
        let mut collection = sample();
        let mut dictionary = DictionaryAdapter::new(&mut collection);
        dictionary.add("qux", "1").unwrap();
        assert_eq!(dictionary.get("qux").unwrap().as_deref(), Some("1"));
        dictionary
            .add_entry(Entry::new("quux", None))
            .unwrap();
        assert_eq!(dictionary.try_get("quux").unwrap(), (true, None));
    }

    #[test]
    fn test_add_existing_key() {
        let mut collection = sample();
        let mut dictionary = DictionaryAdapter::new(&mut collection);
        for value in ["1,2", "other"] {
            let result = dictionary.add("foo", value);
            assert!(matches!(result, Err(Error::Unsupported { .. })));
        }
        let result = dictionary.add_entry(Entry::from(("bar", "abc")));
        assert!(matches!(result, Err(Error::Unsupported { .. })));
        assert!(matches!(
            dictionary.add("baz", None::<&str>),
            Err(Error::Unsupported { .. })
        ));
        assert_eq!(dictionary.get("foo").unwrap().as_deref(), Some("1,2"));
    }

    #[test]
    fn test_try_get() {
        let mut collection = sample();
        let dictionary = DictionaryAdapter::new(&mut collection);
        assert_eq!(
            dictionary.try_get("bar").unwrap(),
            (true, Some("abc".to_string()))
        );
        assert_eq!(dictionary.try_get("zzz").unwrap(), (false, None));
    }

    #[test]
    fn test_contains_entry() {
        let mut collection = sample();
        let dictionary = DictionaryAdapter::new(&mut collection);
        assert!(dictionary.contains_entry("foo", "1,2"));
        assert!(!dictionary.contains_entry("foo", "1"));
        assert!(dictionary.contains_entry("baz", None::<&str>));
        assert!(!dictionary.contains_entry("baz", ""));
        assert!(dictionary.contains_entry("zzz", None::<&str>));
        assert!(!dictionary.contains_entry("zzz", "x"));
    }

    #[test]
    fn test_remove() {
        let mut collection = sample();
        let mut dictionary = DictionaryAdapter::new(&mut collection);
        assert!(dictionary.remove("foo").unwrap());
        assert_eq!(dictionary.len(), 2);
        assert!(!dictionary.remove("foo").unwrap());
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_remove_entry() {
        let mut collection = sample();
        let mut dictionary = DictionaryAdapter::new(&mut collection);
        assert!(!dictionary.remove_entry("foo", "1"));
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.remove_entry("foo", "1,2"));
        assert!(!dictionary.contains_key("foo").unwrap());
        assert!(dictionary.remove_entry("baz", None::<&str>));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_remove_entry_missing_key_with_null_value() {
        let mut collection = sample();
        let mut dictionary = DictionaryAdapter::new(&mut collection);
        assert!(dictionary.remove_entry("zzz", None::<&str>));
        assert!(!dictionary.remove_entry("zzz", "x"));
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut collection = sample();
        DictionaryAdapter::new(&mut collection).clear();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_views() {
        let mut collection = sample();
        let mut dictionary = DictionaryAdapter::new(&mut collection);
        let keys: Vec<String> = dictionary.keys().collect();
        assert_eq!(keys, vec!["foo", "bar", "baz"]);
        let values: Vec<Option<String>> = dictionary.values().collect();
        assert_eq!(
            values,
            vec![Some("1,2".to_string()), Some("abc".to_string()), None]
        );

        dictionary.store_mut().add("bar", "def");
        dictionary.store_mut().add("qux", "1");
        let entries: Vec<Entry> = (&dictionary).into_iter().collect();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1], Entry::new("bar", Some("abc,def".to_string())));
        assert_eq!(entries[3].key(), "qux");
    }

    #[test]
    fn test_copy_to() {
        let mut collection = NameValueCollection::new();
        collection.add("a", "1");
        collection.add("b", "2");
        collection.add("c", "3");
        let dictionary = DictionaryAdapter::new(&mut collection);

        let mut destination = vec![Entry::default(); 6];
        dictionary.copy_to(Some(destination.as_mut_slice()), 2).unwrap();
        assert_eq!(destination[0], Entry::default());
        assert_eq!(destination[1], Entry::default());
        assert_eq!(destination[2], Entry::from(("a", "1")));
        assert_eq!(destination[3], Entry::from(("b", "2")));
        assert_eq!(destination[4], Entry::from(("c", "3")));
        assert_eq!(destination[5], Entry::default());

        dictionary.copy_to(Some(destination.as_mut_slice()), 3).unwrap();
        assert_eq!(destination[5], Entry::from(("c", "3")));
    }

    #[test]
    fn test_copy_to_errors() {
        let mut collection = NameValueCollection::new();
        collection.add("a", "1");
        collection.add("b", "2");
        collection.add("c", "3");
        let dictionary = DictionaryAdapter::new(&mut collection);
        let mut destination = vec![Entry::default(); 6];

        assert!(matches!(
            dictionary.copy_to(Some(destination.as_mut_slice()), 4),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            dictionary.copy_to(Some(destination.as_mut_slice()), -2),
            Err(Error::OutOfRange { value: -2, .. })
        ));
        assert!(matches!(
            dictionary.copy_to(None, 0),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            dictionary.copy_to(Some(destination.as_mut_slice()), isize::MAX),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(destination.iter().all(|entry| *entry == Entry::default()));
    }
}
