//! Placeholder icon generator.
//!
//! Each icon is an accent-colored square with a centered glyph and a darker
//! frame. Rendering is deterministic: the same size, style and font always
//! produce the same pixels.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use image::{codecs::png::PngEncoder, RgbImage};
use tracing::{debug, info, warn};

use crate::core::config::IconConfig;
use crate::core::error::{IconError, IconResult};
use crate::rendering::{raster, FontHandle, IconStyle};

static BUILTIN: FontHandle = FontHandle::Builtin;

/// Smallest em, in pixels, worth asking a scalable face for. Below it the
/// glyph comes from the built-in face.
const MIN_SCALABLE_PX: f32 = 2.0;

pub const SUCCESS_LINE: &str = "All icons generated successfully!";
pub const PLACEHOLDER_NOTICE: &str =
    "These are placeholder icons. Replace them with professional designs before publishing.";

/// Style plus a resolved font, reused for every size of a run.
#[derive(Debug, Clone)]
pub struct IconGenerator {
    pub style: IconStyle,
    pub font: FontHandle,
}

impl IconGenerator {
    pub fn new(style: IconStyle, font: FontHandle) -> Self {
        Self { style, font }
    }

    /// Default style with the first loadable font from `font_paths`.
    pub fn from_font_paths<P: AsRef<Path>>(font_paths: &[P]) -> Self {
        Self::new(IconStyle::default(), FontHandle::load(font_paths))
    }

    /// Draw one icon in memory.
    pub fn render(&self, size: u32) -> IconResult<RgbImage> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }
        let style = &self.style;
        let mut img = RgbImage::from_pixel(size, size, style.background);

        let px = style.glyph_px(size);
        let measured = if px >= MIN_SCALABLE_PX { self.font.measure(style.glyph, px) } else { None };
        let (font, bounds) = match measured {
            Some(bounds) if bounds.width > 0 && bounds.height > 0 => (&self.font, Some(bounds)),
            _ => {
                if !self.font.is_builtin() {
                    warn!(
                        size,
                        px,
                        glyph = %style.glyph,
                        "no ink from {}; using built-in face",
                        self.font.describe()
                    );
                }
                (&BUILTIN, BUILTIN.measure(style.glyph, px))
            }
        };
        if let Some(bounds) = bounds {
            // Center the ink box, not the pen origin.
            let left = (size as i64 - bounds.width as i64).div_euclid(2);
            let top = (size as i64 - bounds.height as i64).div_euclid(2);
            let origin = (left - bounds.min_x as i64, top - bounds.min_y as i64);
            debug!(size, ?bounds, ?origin, "glyph placement");
            font.draw(&mut img, style.glyph, px, origin, style.glyph_color);
        }

        raster::draw_border(&mut img, style.border_thickness(size), style.border_color);
        Ok(img)
    }

    /// Render `size` and write it as PNG to `dest`, replacing any existing file.
    /// The parent directory must already exist.
    pub fn create_icon(&self, size: u32, dest: impl AsRef<Path>) -> IconResult<PathBuf> {
        let dest = dest.as_ref();
        let img = self.render(size)?;
        write_png(&img, dest)?;
        info!("wrote {} ({size}x{size})", dest.display());
        Ok(dest.to_path_buf())
    }
}

fn write_png(img: &RgbImage, dest: &Path) -> IconResult<()> {
    let file = File::create(dest).map_err(|e| IconError::io(dest, e))?;
    let mut writer = BufWriter::new(file);
    img.write_with_encoder(PngEncoder::new(&mut writer))
        .map_err(|source| IconError::Encode { path: dest.to_path_buf(), source })?;
    writer.flush().map_err(|e| IconError::io(dest, e))
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub written: Vec<(u32, PathBuf)>,
    pub font: String,
}

/// Generate every configured size into `config.out_dir()`, printing progress to `out`.
///
/// Stops at the first failure; files already written stay on disk.
pub fn generate_all(config: &IconConfig, out: &mut impl Write) -> IconResult<GenerationReport> {
    let generator = IconGenerator::from_font_paths(&config.font_paths);
    generate_with(&generator, config, out)
}

pub fn generate_with(
    generator: &IconGenerator,
    config: &IconConfig,
    out: &mut impl Write,
) -> IconResult<GenerationReport> {
    let out_dir = config.out_dir();
    let console = |e| IconError::io("<console>", e);
    let mut report = GenerationReport {
        written: Vec::with_capacity(config.sizes.len()),
        font: generator.font.describe(),
    };
    for &size in &config.sizes {
        let path = generator.create_icon(size, out_dir.join(config.file_name(size)))?;
        writeln!(out, "Created {}", path.display()).map_err(console)?;
        report.written.push((size, path));
    }
    writeln!(out).map_err(console)?;
    writeln!(out, "{SUCCESS_LINE}").map_err(console)?;
    writeln!(out, "{PLACEHOLDER_NOTICE}").map_err(console)?;
    Ok(report)
}
