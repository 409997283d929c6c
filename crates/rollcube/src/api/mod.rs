pub mod config;
pub mod floor;
pub mod level;
pub mod types;
