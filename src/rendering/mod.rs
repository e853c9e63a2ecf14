pub mod builtin_face;
pub mod font;
pub mod palette;
pub mod raster;

pub use font::{FontHandle, GlyphBounds};
pub use palette::IconStyle;
