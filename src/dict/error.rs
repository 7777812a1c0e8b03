use std::fmt::Debug;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HashError {
    #[error("[Dict]Index {index} Out Of Bound For Capacity {capacity}")]
    IndexOutOfBound { index: u64, capacity: usize },
    #[error("[Dict]Invalid Capacity: {0}, Must Be Positive")]
    InvalidCapacity(usize),
    #[error("[Dict]Invalid Load Factor: {0}, Must Be In (0, 1]")]
    InvalidLoadFactor(f64),
    #[error("[Dict]Capacity Overflow When Doubling {0}")]
    CapacityOverflow(usize),
}
