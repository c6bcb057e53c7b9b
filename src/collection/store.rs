//! Backing store trait consumed by the dictionary view

use std::cell::RefCell;
use std::rc::Rc;

use super::name_value::NameValueCollection;

/// Ordered multi-value string store that a dictionary view can sit on top of.
///
/// Reads return owned values so that handles with interior mutability can
/// release their borrow before returning.
pub trait MultiValueStore {
    /// Number of distinct keys
    fn count(&self) -> usize;

    /// Joined value for `key`, or `None` if the key is missing or holds no value
    fn get(&self, key: &str) -> Option<String>;

    /// Replace every value under `key` with `value`
    fn set(&mut self, key: &str, value: Option<&str>);

    /// Remove `key` and all its values
    fn remove(&mut self, key: &str);

    /// Remove every key
    fn clear(&mut self);

    /// Key at `index` in insertion order
    fn key_at(&self, index: usize) -> Option<String>;

    /// All keys in insertion order
    fn keys(&self) -> Vec<String> {
        (0..self.count()).filter_map(|i| self.key_at(i)).collect()
    }

    /// Check if `key` is present
    fn contains_key(&self, key: &str) -> bool {
        self.keys().iter().any(|existing| existing == key)
    }
}

impl MultiValueStore for NameValueCollection {
    fn count(&self) -> usize {
        self.len()
    }

    fn get(&self, key: &str) -> Option<String> {
        NameValueCollection::get(self, key)
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        NameValueCollection::set(self, key, value);
    }

    fn remove(&mut self, key: &str) {
        NameValueCollection::remove(self, key);
    }

    fn clear(&mut self) {
        NameValueCollection::clear(self);
    }

    fn key_at(&self, index: usize) -> Option<String> {
        NameValueCollection::key_at(self, index).map(str::to_string)
    }

    fn keys(&self) -> Vec<String> {
        NameValueCollection::keys(self).map(str::to_string).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        NameValueCollection::contains_key(self, key)
    }
}

impl<T: MultiValueStore + ?Sized> MultiValueStore for &mut T {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn key_at(&self, index: usize) -> Option<String> {
        (**self).key_at(index)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }
}

/// Shared handle: every call takes a borrow for its own duration only.
impl<T: MultiValueStore + ?Sized> MultiValueStore for Rc<RefCell<T>> {
    fn count(&self) -> usize {
        self.borrow().count()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) {
        self.borrow_mut().remove(key)
    }

    fn clear(&mut self) {
        self.borrow_mut().clear()
    }

    fn key_at(&self, index: usize) -> Option<String> {
        self.borrow().key_at(index)
    }

    fn keys(&self) -> Vec<String> {
        self.borrow().keys()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.borrow().contains_key(key)
    }
}
