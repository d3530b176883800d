pub mod config;
pub mod filter;
pub mod hours;
pub mod init;
pub mod month;
pub mod range;
