//! Read back a written icon and summarize what was drawn.

use std::path::Path;

use image::{Rgb, RgbImage};
use serde::Serialize;

use crate::core::error::{IconError, IconResult};
use crate::rendering::IconStyle;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InkBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl InkBounds {
    /// Offset of the ink box center from the image center, in pixels.
    pub fn center_offset(&self, width: u32, height: u32) -> (f32, f32) {
        let cx = (self.min_x + self.max_x) as f32 / 2.0;
        let cy = (self.min_y + self.max_y) as f32 / 2.0;
        (cx - (width as f32 - 1.0) / 2.0, cy - (height as f32 - 1.0) / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconReport {
    pub width: u32,
    pub height: u32,
    /// Top-left, top-right, bottom-left, bottom-right.
    pub corners: [[u8; 3]; 4],
    pub border_ok: bool,
    pub ink: Option<InkBounds>,
    pub center_offset: Option<(f32, f32)>,
    /// Pixels exactly equal to the glyph color.
    pub solid_glyph_pixels: u32,
}

impl IconReport {
    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

pub fn inspect_icon(path: impl AsRef<Path>, style: &IconStyle) -> IconResult<IconReport> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|source| IconError::Decode { path: path.to_path_buf(), source })?
        .to_rgb8();
    Ok(inspect_image(&img, style))
}

/// Glyph ink is any pixel inside the border band that differs from the background.
pub fn inspect_image(img: &RgbImage, style: &IconStyle) -> IconReport {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return IconReport {
            width: w,
            height: h,
            corners: [[0; 3]; 4],
            border_ok: false,
            ink: None,
            center_offset: None,
            solid_glyph_pixels: 0,
        };
    }
    let corner = |x: u32, y: u32| -> Rgb<u8> { *img.get_pixel(x, y) };
    let corners = [corner(0, 0), corner(w - 1, 0), corner(0, h - 1), corner(w - 1, h - 1)];
    let border_ok = corners.iter().all(|c| *c == style.border_color);

    let t = style.border_thickness(w.min(h));
    let mut ink: Option<InkBounds> = None;
    let mut solid = 0u32;
    for (x, y, p) in img.enumerate_pixels() {
        if *p == style.glyph_color {
            solid += 1;
        }
        let in_band = x < t || y < t || x + t >= w || y + t >= h;
        if in_band || *p == style.background {
            continue;
        }
        match &mut ink {
            Some(b) => {
                b.min_x = b.min_x.min(x);
                b.min_y = b.min_y.min(y);
                b.max_x = b.max_x.max(x);
                b.max_y = b.max_y.max(y);
            }
            None => ink = Some(InkBounds { min_x: x, min_y: y, max_x: x, max_y: y }),
        }
    }
    let center_offset = ink.as_ref().map(|b| b.center_offset(w, h));
    IconReport {
        width: w,
        height: h,
        corners: corners.map(|c| c.0),
        border_ok,
        ink,
        center_offset,
        solid_glyph_pixels: solid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconGenerator;
    use crate::rendering::FontHandle;

    #[test]
    fn report_for_builtin_icon() {
        let style = IconStyle::default();
        let img = IconGenerator::new(style.clone(), FontHandle::Builtin).render(32).unwrap();
        let r = inspect_image(&img, &style);
        assert!(r.is_square());
        assert!(r.border_ok);
        assert_eq!(r.ink, Some(InkBounds { min_x: 13, min_y: 12, max_x: 17, max_y: 18 }));
        let (dx, dy) = r.center_offset.unwrap();
        assert!(dx.abs() <= 1.0 && dy.abs() <= 1.0, "offset {dx},{dy}");
        // 'M' has 18 set cells.
        assert_eq!(r.solid_glyph_pixels, 18);
    }

    #[test]
    fn plain_background_has_no_ink() {
        let style = IconStyle::default();
        let mut img = RgbImage::from_pixel(8, 8, style.background);
        crate::rendering::raster::draw_border(&mut img, 1, style.border_color);
        let r = inspect_image(&img, &style);
        assert!(r.border_ok);
        assert!(r.ink.is_none());
        assert!(r.center_offset.is_none());
    }

    #[test]
    fn wrong_corner_color_flagged() {
        let style = IconStyle::default();
        let img = RgbImage::from_pixel(4, 4, style.background);
        assert!(!inspect_image(&img, &style).border_ok);
    }

    #[test]
    fn undecodable_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("icon16.png");
        std::fs::write(&p, b"not a png").unwrap();
        let err = inspect_icon(&p, &IconStyle::default()).unwrap_err();
        assert!(matches!(err, IconError::Decode { .. }), "{err}");
    }
}
