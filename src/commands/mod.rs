pub mod config;
pub mod trim;
