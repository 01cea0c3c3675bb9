use crate::constants::ATTR_BUCKET_CAPACITY;
use crate::error::{RtResult, RuntimeError};

use super::AttrValue;

#[derive(Debug)]
struct Entry {
    key: Box<str>,
    value: AttrValue,
    next: Option<Box<Entry>>,
}

/// String-keyed attribute table: a fixed array of bucket chains, newest
/// entry first. Inserting never scans the chain, so an existing key is
/// shadowed rather than replaced; `remove` then re-exposes the older entry.
/// Lookup always answers with the most recently inserted match.
#[derive(Debug)]
pub struct AttributeTable {
    buckets: [Option<Box<Entry>>; ATTR_BUCKET_CAPACITY],
}

fn hash_key(key: &str) -> usize {
    let mut hash: u64 = 5381;
    for byte in key.bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(byte as u64);
    }
    (hash % ATTR_BUCKET_CAPACITY as u64) as usize
}

impl AttributeTable {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| None),
        }
    }

    pub fn insert(&mut self, key: &str, value: AttrValue) {
        let index = hash_key(key);
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry {
            key: key.into(),
            value,
            next,
        }));
    }

    pub fn lookup(&self, key: &str) -> Option<&AttrValue> {
        let mut current = self.buckets[hash_key(key)].as_deref();
        while let Some(entry) = current {
            if entry.key.as_ref() == key {
                return Some(&entry.value);
            }
            current = entry.next.as_deref();
        }
        None
    }

    /// In-place overwrite of the most recent entry for `key`. The entry
    /// must exist; absence is a precondition violation, not an insert.
    pub fn replace(&mut self, key: &str, value: AttrValue) -> RtResult<()> {
        let mut current = self.buckets[hash_key(key)].as_deref_mut();
        while let Some(entry) = current {
            if entry.key.as_ref() == key {
                entry.value = value;
                return Ok(());
            }
            current = entry.next.as_deref_mut();
        }
        Err(RuntimeError::attribute_not_found(key))
    }

    /// Unlinks the most recent entry for `key`; no-op when absent.
    pub fn remove(&mut self, key: &str) {
        let index = hash_key(key);
        let (chain, _) = remove_first(self.buckets[index].take(), key);
        self.buckets[index] = chain;
    }
}

fn remove_first(node: Option<Box<Entry>>, key: &str) -> (Option<Box<Entry>>, bool) {
    match node {
        None => (None, false),
        Some(mut entry) => {
            if entry.key.as_ref() == key {
                (entry.next.take(), true)
            } else {
                let (rest, removed) = remove_first(entry.next.take(), key);
                entry.next = rest;
                (Some(entry), removed)
            }
        }
    }
}

impl Default for AttributeTable {
    fn default() -> Self {
        Self::new()
    }
}
