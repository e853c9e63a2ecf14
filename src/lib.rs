pub mod core;
pub mod icon;
pub mod inspect;
pub mod logging;
pub mod rendering;

// Curated re-exports
pub use crate::core::config::IconConfig;
pub use crate::core::error::{IconError, IconResult};
pub use icon::{generate_all, generate_with, GenerationReport, IconGenerator};
pub use inspect::{inspect_icon, IconReport};
pub use rendering::{FontHandle, IconStyle};
