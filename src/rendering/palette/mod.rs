pub mod palette;

pub use palette::{IconStyle, ACCENT, ACCENT_DARK, GLYPH_WHITE};
