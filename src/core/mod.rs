pub mod config;
pub mod duration;
pub mod filter;
pub mod period;
pub mod range;
