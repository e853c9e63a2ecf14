//! Glyph source for icons: a scalable TrueType/OpenType face when one loads,
//! otherwise the fixed-size built-in bitmap face.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use ab_glyph::{Font, FontArc, FontVec, PxScale};
use image::{Rgb, RgbImage};
use tracing::{debug, info, warn};

use super::{builtin_face, raster};

/// Ink box of a glyph relative to its pen origin. `min_y` is negative for
/// scalable glyphs sitting above the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone)]
pub enum FontHandle {
    Scalable {
        path: PathBuf,
        name: Option<String>,
        font: FontArc,
    },
    Builtin,
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontHandle::Scalable { path, name, .. } => f
                .debug_struct("Scalable")
                .field("path", path)
                .field("name", name)
                .finish(),
            FontHandle::Builtin => f.write_str("Builtin"),
        }
    }
}

impl FontHandle {
    /// First candidate that reads and parses wins. Never fails: with no usable
    /// candidate the built-in face is returned.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Self {
        for candidate in candidates {
            let path = candidate.as_ref();
            let bytes = match fs::read(path) {
                Ok(b) => b,
                Err(e) => {
                    debug!("font {} unavailable: {e}", path.display());
                    continue;
                }
            };
            match Self::from_bytes(path, bytes) {
                Ok(handle) => {
                    info!("Using {}", handle.describe());
                    return handle;
                }
                Err(e) => debug!("font {} rejected: {e}", path.display()),
            }
        }
        warn!(
            "no scalable font among {} candidate(s); falling back to built-in {}x{} bitmap face",
            candidates.len(),
            builtin_face::CELL_W,
            builtin_face::CELL_H
        );
        FontHandle::Builtin
    }

    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<Self, ab_glyph::InvalidFont> {
        let name = face_name(&bytes);
        let font = FontVec::try_from_vec(bytes)?;
        Ok(FontHandle::Scalable { path: path.into(), name, font: FontArc::new(font) })
    }

    #[inline]
    pub fn is_builtin(&self) -> bool {
        matches!(self, FontHandle::Builtin)
    }

    pub fn describe(&self) -> String {
        match self {
            FontHandle::Scalable { path, name: Some(name), .. } => {
                format!("scalable font '{name}' ({})", path.display())
            }
            FontHandle::Scalable { path, name: None, .. } => format!("scalable font {}", path.display()),
            FontHandle::Builtin => format!(
                "built-in {}x{} bitmap face",
                builtin_face::CELL_W,
                builtin_face::CELL_H
            ),
        }
    }

    /// Ink box of `ch` at em size `px`. `None` when the glyph draws nothing.
    /// The built-in face ignores `px`.
    pub fn measure(&self, ch: char, px: f32) -> Option<GlyphBounds> {
        match self {
            FontHandle::Scalable { font, .. } => {
                let outlined = outline(font, ch, px)?;
                let b = outlined.px_bounds();
                Some(GlyphBounds {
                    min_x: b.min.x as i32,
                    min_y: b.min.y as i32,
                    width: (b.max.x - b.min.x) as u32,
                    height: (b.max.y - b.min.y) as u32,
                })
            }
            FontHandle::Builtin => builtin_face::measure(ch),
        }
    }

    /// Draw `ch` with its pen origin at `origin`, blending coverage over the
    /// existing pixels. Pixels outside the image are clipped.
    pub fn draw(&self, img: &mut RgbImage, ch: char, px: f32, origin: (i64, i64), color: Rgb<u8>) {
        match self {
            FontHandle::Scalable { font, .. } => {
                let Some(outlined) = outline(font, ch, px) else { return };
                let b = outlined.px_bounds();
                let left = origin.0 + b.min.x as i64;
                let top = origin.1 + b.min.y as i64;
                outlined.draw(|x, y, c| {
                    raster::blend_pixel(img, left + x as i64, top + y as i64, color, c);
                });
            }
            FontHandle::Builtin => builtin_face::for_each_cell(ch, |col, row| {
                raster::blend_pixel(img, origin.0 + col as i64, origin.1 + row as i64, color, 1.0);
            }),
        }
    }
}

fn outline(font: &FontArc, ch: char, px: f32) -> Option<ab_glyph::OutlinedGlyph> {
    let scale = em_scale(px, font.height_unscaled(), font.units_per_em());
    let glyph = font.glyph_id(ch).with_scale_and_position(scale, ab_glyph::point(0.0, 0.0));
    font.outline_glyph(glyph)
}

/// `PxScale` whose em square is `px` pixels tall.
///
/// ab_glyph scales by ascent-to-descent height, so the em has to be converted
/// through the face's own metrics.
fn em_scale(px: f32, height_unscaled: f32, units_per_em: Option<f32>) -> PxScale {
    match units_per_em {
        Some(upem) if upem > 0.0 && height_unscaled > 0.0 => PxScale::from(px * height_unscaled / upem),
        _ => PxScale::from(px),
    }
}

fn face_name(bytes: &[u8]) -> Option<String> {
    let face = ttf_parser::Face::parse(bytes, 0).ok()?;
    face.names()
        .into_iter()
        .filter(|n| n.is_unicode())
        .find(|n| n.name_id == ttf_parser::name_id::FULL_NAME)
        .and_then(|n| n.to_string())
}
