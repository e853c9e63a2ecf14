pub mod config;

pub use config::{IconConfig, LARGE_SIZE_WARN};
