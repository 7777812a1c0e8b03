use cityhasher::CityHasher;
use serde::{Deserialize, Serialize};
use std::hash::Hasher;

use crate::dict::error::HashError;

pub const HASH_SEED: u64 = 0x87c37b91114253d5;

/// Maps a key onto a bucket slot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFunction {
    /// Sum of code points, reduced by the capacity after every character.
    #[default]
    Additive,
    /// Seeded CityHash64 of the key bytes.
    City,
    #[serde(skip)]
    Custom(fn(&str) -> u64),
}

impl HashFunction {
    /// Bucket index of `key` in a table of `capacity` slots.
    pub fn index(&self, key: &str, capacity: usize) -> Result<usize, HashError> {
        let size = capacity as u64;
        let idx = match self {
            HashFunction::Additive => additive_hash(key, size),
            HashFunction::City => sys_hash(key) % size,
            HashFunction::Custom(f) => f(key) % size,
        };
        if idx >= size {
            return Err(HashError::IndexOutOfBound { index: idx, capacity });
        }
        Ok(idx as usize)
    }
}

#[inline]
pub fn additive_hash(key: &str, size: u64) -> u64 {
    let mut hash = 0;
    for ch in key.chars() {
        hash = (hash + ch as u64) % size;
    }
    hash
}

#[inline]
pub fn sys_hash(key: &str) -> u64 {
    let mut hasher = CityHasher::with_seed(HASH_SEED);
    hasher.write(key.as_bytes());
    hasher.finish()
}
