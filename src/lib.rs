pub mod config;
pub mod dict;

pub use config::DictConfig;
pub use dict::dict::{Dict, DictEntry};
pub use dict::error::HashError;
pub use dict::hash::HashFunction;
pub use dict::stats::DictStats;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
