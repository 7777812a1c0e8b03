use std::iter::FusedIterator;
use std::slice;

use crate::dict::dict::{Bucket, Dict, DictEntry};

/// Walks occupied slots in slot order, and each chain in insertion order.
pub struct DictIter<'a, V> {
    table: slice::Iter<'a, Option<Bucket<V>>>,
    entry: Option<slice::Iter<'a, DictEntry<V>>>,
    remaining: usize,
}

impl<V> Dict<V> {
    pub fn iter(&self) -> DictIter<'_, V> {
        DictIter {
            table: self.ht_table.iter(),
            entry: None,
            remaining: self.len(),
        }
    }

    pub fn iter_mut(&mut self) -> DictIterMut<'_, V> {
        let remaining = self.len();
        DictIterMut {
            table: self.ht_table.iter_mut(),
            entry: None,
            remaining,
        }
    }
}

impl<'a, V> Iterator for DictIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry.as_mut().and_then(|iter| iter.next()) {
                self.remaining -= 1;
                return Some((entry.get_key(), entry.get_val()));
            }
            // advance to the next occupied slot
            let bucket = self.table.by_ref().flatten().next()?;
            self.entry = Some(bucket.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for DictIter<'_, V> {}

impl<V> FusedIterator for DictIter<'_, V> {}

impl<'a, V> IntoIterator for &'a Dict<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = DictIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct DictIterMut<'a, V> {
    table: slice::IterMut<'a, Option<Bucket<V>>>,
    entry: Option<slice::IterMut<'a, DictEntry<V>>>,
    remaining: usize,
}

impl<'a, V> Iterator for DictIterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry.as_mut().and_then(|iter| iter.next()) {
                self.remaining -= 1;
                return Some((entry.key.as_str(), &mut entry.val));
            }
            let bucket = self.table.by_ref().flatten().next()?;
            self.entry = Some(bucket.iter_mut());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for DictIterMut<'_, V> {}

impl<V> FusedIterator for DictIterMut<'_, V> {}

impl<'a, V> IntoIterator for &'a mut Dict<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = DictIterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
