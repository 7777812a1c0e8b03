pub mod dict;
pub mod error;
pub mod hash;
pub mod iter;
pub mod lib;
pub mod stats;
