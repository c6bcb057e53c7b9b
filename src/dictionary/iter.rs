//! Live iterators over a dictionary view
//!
//! The iterators walk the backing store by position and re-read it on every
//! step, so each item reflects the store as it is when `next` is called.
//! The cursor re-anchors on the last key it yielded, so removing keys that
//! were already yielded never causes a later key to be skipped.

use super::entry::Entry;
use crate::collection::MultiValueStore;

#[derive(Debug)]
struct Cursor<'a, S: ?Sized> {
    store: &'a S,
    index: usize,
    last: Option<String>,
}

impl<'a, S: MultiValueStore + ?Sized> Cursor<'a, S> {
    fn new(store: &'a S) -> Self {
        Self {
            store,
            index: 0,
            last: None,
        }
    }

    fn resync(&mut self) {
        let Some(last) = self.last.as_deref() else {
            return;
        };
        let previous = self.index.checked_sub(1).and_then(|i| self.store.key_at(i));
        if previous.as_deref() == Some(last) {
            return;
        }
        let position = (0..self.store.count())
            .find(|&i| self.store.key_at(i).as_deref() == Some(last));
        self.index = match position {
            Some(position) => position + 1,
            // the last yielded key itself is gone; its successors moved down one slot
            None => self.index.saturating_sub(1),
        };
    }

    fn next_key(&mut self) -> Option<String> {
        self.resync();
        let key = self.store.key_at(self.index)?;
        self.index += 1;
        self.last = Some(key.clone());
        Some(key)
    }
}

/// Iterator over `(key, joined value)` entries in insertion order
#[derive(Debug)]
pub struct Iter<'a, S: ?Sized> {
    cursor: Cursor<'a, S>,
}

impl<'a, S: MultiValueStore + ?Sized> Iter<'a, S> {
    pub(crate) fn new(store: &'a S) -> Self {
        Self {
            cursor: Cursor::new(store),
        }
    }
}

impl<S: MultiValueStore + ?Sized> Iterator for Iter<'_, S> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        let key = self.cursor.next_key()?;
        let value = self.cursor.store.get(&key);
        Some(Entry::new(key, value))
    }
}

/// Iterator over keys in insertion order
#[derive(Debug)]
pub struct Keys<'a, S: ?Sized> {
    cursor: Cursor<'a, S>,
}

impl<'a, S: MultiValueStore + ?Sized> Keys<'a, S> {
    pub(crate) fn new(store: &'a S) -> Self {
        Self {
            cursor: Cursor::new(store),
        }
    }
}

impl<S: MultiValueStore + ?Sized> Iterator for Keys<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.cursor.next_key()
    }
}

/// Iterator over joined values, in the same order as [`Keys`]
#[derive(Debug)]
pub struct Values<'a, S: ?Sized> {
    cursor: Cursor<'a, S>,
}

impl<'a, S: MultiValueStore + ?Sized> Values<'a, S> {
    pub(crate) fn new(store: &'a S) -> Self {
        Self {
            cursor: Cursor::new(store),
        }
    }
}

impl<S: MultiValueStore + ?Sized> Iterator for Values<'_, S> {
    type Item = Option<String>;

    fn next(&mut self) -> Option<Option<String>> {
        let key = self.cursor.next_key()?;
        Some(self.cursor.store.get(&key))
    }
}
