//! Fixed-size 5x7 bitmap face used when no scalable font can be loaded.
//!
//! One cell maps to one raster pixel, so the glyph keeps the same pixel size
//! regardless of the icon it is drawn into.

use super::font::GlyphBounds;

pub const CELL_W: u32 = 5;
pub const CELL_H: u32 = 7;

/// Rows top to bottom, bit 4 = leftmost column.
type Rows = [u8; CELL_H as usize];

static QUESTION: Rows = [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100];

static LETTERS: [Rows; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

static DIGITS: [Rows; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

/// Bitmap rows for `ch`. Lowercase shares the uppercase cells; anything else is `?`.
pub fn rows_for(ch: char) -> &'static Rows {
    let ch = ch.to_ascii_uppercase();
    match ch {
        'A'..='Z' => &LETTERS[(ch as u8 - b'A') as usize],
        '0'..='9' => &DIGITS[(ch as u8 - b'0') as usize],
        _ => &QUESTION,
    }
}

#[inline]
fn is_set(rows: &Rows, col: u32, row: u32) -> bool {
    rows[row as usize] & (1 << (CELL_W - 1 - col)) != 0
}

/// Tight ink box of `ch` relative to the cell's top-left corner.
pub fn measure(ch: char) -> Option<GlyphBounds> {
    let rows = rows_for(ch);
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0u32, 0u32);
    for row in 0..CELL_H {
        for col in 0..CELL_W {
            if is_set(rows, col, row) {
                min_x = min_x.min(col);
                min_y = min_y.min(row);
                max_x = max_x.max(col);
                max_y = max_y.max(row);
            }
        }
    }
    if min_x == u32::MAX {
        return None;
    }
    Some(GlyphBounds {
        min_x: min_x as i32,
        min_y: min_y as i32,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Visit every set cell as `(col, row)` relative to the cell's top-left corner.
pub fn for_each_cell(ch: char, mut f: impl FnMut(u32, u32)) {
    let rows = rows_for(ch);
    for row in 0..CELL_H {
        for col in 0..CELL_W {
            if is_set(rows, col, row) {
                f(col, row);
            }
        }
    }
}
