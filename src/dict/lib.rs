use crate::dict::error::HashError;

pub(crate) const DICT_HT_INITIAL_SIZE: usize = 8;
pub(crate) const DICT_DEFAULT_LOAD_FACTOR: f64 = 0.75;
pub(crate) const DICT_STATS_VECTLEN: usize = 50;

/// Projected fill ratio if `used` entries were stored in `size` slots.
#[inline]
pub fn dict_ratio(used: usize, size: usize) -> f64 {
    used as f64 / size as f64
}

/// Smallest doubling of `size` that keeps `used` entries within `load_factor`.
pub fn next_size(size: usize, used: usize, load_factor: f64) -> Result<usize, HashError> {
    let mut new_size = size;
    loop {
        new_size = new_size
            .checked_mul(2)
            .ok_or(HashError::CapacityOverflow(new_size))?;
        if dict_ratio(used, new_size) <= load_factor {
            return Ok(new_size);
        }
    }
}

pub fn check_capacity(capacity: usize) -> Result<usize, HashError> {
    if capacity == 0 {
        return Err(HashError::InvalidCapacity(capacity));
    }
    Ok(capacity)
}

pub fn check_load_factor(load_factor: f64) -> Result<f64, HashError> {
    // NaN fails both comparisons
    if load_factor > 0.0 && load_factor <= 1.0 {
        Ok(load_factor)
    } else {
        Err(HashError::InvalidLoadFactor(load_factor))
    }
}
