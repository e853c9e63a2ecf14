use image::{Rgb, RgbImage};

/// Blend `color` over the pixel at (x, y) with coverage `c` (0..1).
/// Out-of-bounds coordinates are ignored.
#[inline]
pub fn blend_pixel(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, c: f32) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let c = c.clamp(0.0, 1.0);
    if c <= 0.0 {
        return;
    }
    let px = img.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in px.0.iter_mut().zip(color.0) {
        let d = *dst as f32;
        *dst = (d + (src as f32 - d) * c).round().clamp(0.0, 255.0) as u8;
    }
}

/// Rectangle outline covering the outermost `thickness` rows and columns.
pub fn draw_border(img: &mut RgbImage, thickness: u32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    for (x, y, p) in img.enumerate_pixels_mut() {
        let is_border = x < thickness || y < thickness || x + thickness >= w || y + thickness >= h;
        if is_border {
            *p = color;
        }
    }
}
