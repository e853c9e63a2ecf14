use image::Rgb;

// #667eea
pub const ACCENT: Rgb<u8> = Rgb([102, 126, 234]);
pub const GLYPH_WHITE: Rgb<u8> = Rgb([255, 255, 255]);
// Darker accent for the frame.
pub const ACCENT_DARK: Rgb<u8> = Rgb([80, 95, 200]);

/// Fixed look of a placeholder icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub background: Rgb<u8>,
    pub glyph: char,
    pub glyph_color: Rgb<u8>,
    pub border_color: Rgb<u8>,
    /// Glyph em size as a fraction of the icon side.
    pub glyph_scale: f32,
    /// Border thickness is `max(1, size / border_divisor)`.
    pub border_divisor: u32,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: ACCENT,
            glyph: 'M',
            glyph_color: GLYPH_WHITE,
            border_color: ACCENT_DARK,
            glyph_scale: 0.6,
            border_divisor: 32,
        }
    }
}

impl IconStyle {
    #[inline]
    pub fn border_thickness(&self, size: u32) -> u32 {
        (size / self.border_divisor.max(1)).max(1)
    }

    /// Scalable glyph size in pixels, truncated like an integer font size.
    #[inline]
    pub fn glyph_px(&self, size: u32) -> f32 {
        (size as f32 * self.glyph_scale).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_thickness_per_size() {
        let style = IconStyle::default();
        assert_eq!(style.border_thickness(1), 1);
        assert_eq!(style.border_thickness(16), 1);
        assert_eq!(style.border_thickness(32), 1);
        assert_eq!(style.border_thickness(48), 1);
        assert_eq!(style.border_thickness(64), 2);
        assert_eq!(style.border_thickness(128), 4);
    }

    #[test]
    fn glyph_px_truncates() {
        let style = IconStyle::default();
        assert_eq!(style.glyph_px(16), 9.0);
        assert_eq!(style.glyph_px(48), 28.0);
        assert_eq!(style.glyph_px(128), 76.0);
    }
}
