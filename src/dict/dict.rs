use std::mem;

use tracing::debug;

use crate::config::DictConfig;
use crate::dict::error::HashError;
use crate::dict::hash::HashFunction;
use crate::dict::lib::{*};

#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry<V> {
    pub(crate) key: String,
    pub(crate) val: V,
}

impl<V> DictEntry<V> {
    pub fn new(key: String, val: V) -> Self {
        Self { key, val }
    }

    #[inline]
    pub fn get_key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn get_val(&self) -> &V {
        &self.val
    }

    #[inline]
    pub fn set_val(&mut self, val: V) {
        self.val = val
    }
}

pub(crate) type Bucket<V> = Vec<DictEntry<V>>;

/// Chained hash table keyed by strings.
///
/// Slots hold `None` until the first key hashes to them. The table doubles
/// before an insert whenever the projected fill would exceed `load_factor`.
#[derive(Debug, Clone)]
pub struct Dict<V> {
    /// dict table, one optional chain per slot
    pub(crate) ht_table: Vec<Option<Bucket<V>>>,
    /// number of entries across all chains
    ht_used: usize,
    /// growth threshold, fixed at construction
    load_factor: f64,
    hash_function: HashFunction,
}

impl<V> Default for Dict<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Dict<V> {
    pub fn new() -> Self {
        Self {
            ht_table: empty_table(DICT_HT_INITIAL_SIZE),
            ht_used: 0,
            load_factor: DICT_DEFAULT_LOAD_FACTOR,
            hash_function: HashFunction::default(),
        }
    }

    pub fn with_capacity(capacity: usize, load_factor: f64) -> Result<Self, HashError> {
        Self::with_hash_function(capacity, load_factor, HashFunction::default())
    }

    pub fn with_hash_function(
        capacity: usize,
        load_factor: f64,
        hash_function: HashFunction,
    ) -> Result<Self, HashError> {
        let capacity = check_capacity(capacity)?;
        let load_factor = check_load_factor(load_factor)?;
        Ok(Self {
            ht_table: empty_table(capacity),
            ht_used: 0,
            load_factor,
            hash_function,
        })
    }

    pub fn from_config(config: &DictConfig) -> Result<Self, HashError> {
        Self::with_hash_function(config.initial_capacity, config.load_factor, config.hash_function)
    }

    #[inline]
    fn key_index(&self, key: &str) -> Result<usize, HashError> {
        self.hash_function.index(key, self.ht_table.len())
    }

    /// Inserts `key`, or overwrites the value of an existing one.
    pub fn set(&mut self, key: impl Into<String>, val: V) -> Result<(), HashError> {
        let key = key.into();
        self.expand_if_needed()?;

        let idx = self.key_index(&key)?;
        let bucket = self.ht_table[idx].get_or_insert_with(Vec::new);
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            entry.set_val(val);
            return Ok(());
        }
        bucket.push(DictEntry::new(key, val));
        self.ht_used += 1;
        Ok(())
    }

    fn find(&self, key: &str) -> Result<Option<&DictEntry<V>>, HashError> {
        let idx = self.key_index(key)?;
        Ok(self.ht_table[idx]
            .as_ref()
            .and_then(|bucket| bucket.iter().find(|entry| entry.key == key)))
    }

    pub fn get(&self, key: &str) -> Result<Option<&V>, HashError> {
        Ok(self.find(key)?.map(DictEntry::get_val))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut V>, HashError> {
        let idx = self.key_index(key)?;
        Ok(self.ht_table[idx]
            .as_mut()
            .and_then(|bucket| bucket.iter_mut().find(|entry| entry.key == key))
            .map(|entry| &mut entry.val))
    }

    pub fn has(&self, key: &str) -> Result<bool, HashError> {
        Ok(self.find(key)?.is_some())
    }

    /// Removes `key` and hands back its value. Missing keys leave the size untouched.
    pub fn remove(&mut self, key: &str) -> Result<Option<V>, HashError> {
        let idx = self.key_index(key)?;
        let bucket = match self.ht_table[idx].as_mut() {
            Some(bucket) => bucket,
            None => return Ok(None),
        };
        match bucket.iter().position(|entry| entry.key == key) {
            Some(pos) => {
                // keep insertion order of the rest of the chain
                let entry = bucket.remove(pos);
                self.ht_used -= 1;
                Ok(Some(entry.val))
            }
            None => Ok(None),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ht_used
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ht_used == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.ht_table.len()
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    #[inline]
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Drops every entry but keeps the current number of slots.
    pub fn clear(&mut self) {
        debug!(capacity = self.capacity(), used = self.ht_used, "dict clear");
        self.ht_table = empty_table(self.capacity());
        self.ht_used = 0;
    }

    pub fn keys(&self) -> Vec<&str> {
        self.iter().map(|(key, _)| key).collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, val)| val).collect()
    }

    pub fn entries(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }

    fn expand_if_needed(&mut self) -> Result<(), HashError> {
        if dict_ratio(self.ht_used + 1, self.capacity()) <= self.load_factor {
            return Ok(());
        }
        let new_size = next_size(self.capacity(), self.ht_used + 1, self.load_factor)?;
        self.resize(new_size)
    }

    /// Rehashes every entry into a table of `new_size` slots.
    fn resize(&mut self, new_size: usize) -> Result<(), HashError> {
        // every index is computed before anything moves
        let indices = self
            .iter()
            .map(|(key, _)| self.hash_function.index(key, new_size))
            .collect::<Result<Vec<_>, _>>()?;

        let mut new_table = empty_table(new_size);
        let old_table = mem::take(&mut self.ht_table);
        let old_size = old_table.len();
        for (entry, idx) in old_table.into_iter().flatten().flatten().zip(indices) {
            new_table[idx].get_or_insert_with(Vec::new).push(entry);
        }
        self.ht_table = new_table;
        debug!(from = old_size, to = new_size, used = self.ht_used, "dict resize");
        Ok(())
    }
}

fn empty_table<V>(size: usize) -> Vec<Option<Bucket<V>>> {
    let mut table = Vec::with_capacity(size);
    table.resize_with(size, || None);
    table
}
