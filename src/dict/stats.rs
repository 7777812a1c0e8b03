use std::fmt::{Display, Formatter};

use crate::dict::dict::Dict;
use crate::dict::lib::DICT_STATS_VECTLEN;

#[derive(Debug, Clone, PartialEq)]
pub struct DictStats {
    /// occupied slots
    pub buckets: u64,
    pub max_chain_len: u64,
    pub total_chain_len: u64,
    pub ht_size: u64,
    pub ht_used: u64,
    /// cl_vector[n] counts slots with a chain of length n, the last cell collects longer chains
    pub cl_vector: Vec<u64>,
}

impl<V> Dict<V> {
    pub fn stats(&self) -> DictStats {
        let mut stats = DictStats {
            buckets: 0,
            max_chain_len: 0,
            total_chain_len: 0,
            ht_size: self.capacity() as u64,
            ht_used: self.len() as u64,
            cl_vector: vec![0; DICT_STATS_VECTLEN],
        };
        for slot in &self.ht_table {
            let chain_len = slot.as_ref().map_or(0, Vec::len);
            if chain_len == 0 {
                stats.cl_vector[0] += 1;
                continue;
            }
            stats.buckets += 1;
            stats.cl_vector[chain_len.min(DICT_STATS_VECTLEN - 1)] += 1;
            stats.max_chain_len = stats.max_chain_len.max(chain_len as u64);
            stats.total_chain_len += chain_len as u64;
        }
        stats
    }
}

impl Display for DictStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.ht_used == 0 {
            return writeln!(f, "Hash table stats: No stats available for empty dictionaries");
        }
        writeln!(f, "Hash table stats:")?;
        writeln!(f, " table size: {}", self.ht_size)?;
        writeln!(f, " number of elements: {}", self.ht_used)?;
        writeln!(f, " different slots: {}", self.buckets)?;
        writeln!(f, " max chain length: {}", self.max_chain_len)?;
        writeln!(
            f,
            " avg chain length (counted): {:.2}",
            self.total_chain_len as f64 / self.buckets as f64
        )?;
        writeln!(
            f,
            " avg chain length (computed): {:.2}",
            self.ht_used as f64 / self.buckets as f64
        )?;
        writeln!(f, " Chain length distribution:")?;
        for (len, &count) in self.cl_vector.iter().enumerate() {
            if count == 0 {
                continue;
            }
            writeln!(
                f,
                "   {}: {} ({:.02}%)",
                len,
                count,
                count as f64 * 100.0 / self.ht_size as f64
            )?;
        }
        Ok(())
    }
}
