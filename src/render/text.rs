//! Text rendering - scalable system fonts with a built-in fallback face.
//!
//! A [`Face`] is either a TrueType font loaded from one of a list of
//! candidate paths, or the built-in 5x7 bitmap face. Loading never fails:
//! when no candidate file can be read and parsed, the bitmap face is
//! substituted silently, so text always renders and runs never abort over
//! missing fonts.

use std::fs;

use rusttype::{point, Font, Scale};

use super::canvas::{Canvas, Colour};

/// Candidate paths for a regular-weight scalable font.
pub const REGULAR_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Candidate paths for a bold scalable font.
pub const BOLD_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

const BITMAP_WIDTH: i32 = 5;
const BITMAP_ADVANCE: i32 = 6;

/// A font face at a fixed pixel size.
pub enum Face {
    /// A scalable TrueType face.
    Scalable { font: Font<'static>, scale: Scale },

    /// The built-in 5x7 bitmap face. Ignores the requested size.
    Bitmap,
}

impl Face {
    /// Load the first candidate font file that parses, at the given pixel
    /// size. Falls back to the built-in bitmap face when none does.
    pub fn load(candidates: &[&str], size: f32) -> Self {
        for path in candidates {
            if let Ok(data) = fs::read(path) {
                if let Some(font) = Font::try_from_vec(data) {
                    return Self::Scalable {
                        font,
                        scale: Scale::uniform(size),
                    };
                }
            }
        }
        Self::Bitmap
    }

    /// Check whether this is the fallback face.
    pub fn is_bitmap(&self) -> bool {
        matches!(self, Self::Bitmap)
    }

    /// Width in pixels of the rendered text (ink extent).
    pub fn measure(&self, text: &str) -> u32 {
        match self {
            Self::Scalable { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                let mut min_x = i32::MAX;
                let mut max_x = i32::MIN;

                for glyph in font.layout(text, *scale, point(0.0, ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        min_x = min_x.min(bb.min.x);
                        max_x = max_x.max(bb.max.x);
                    }
                }

                if max_x < min_x {
                    0
                } else {
                    (max_x - min_x) as u32
                }
            }
            Self::Bitmap => {
                let n = text.chars().count() as i32;
                if n == 0 {
                    0
                } else {
                    (n * BITMAP_ADVANCE - 1) as u32
                }
            }
        }
    }

    /// Draw text with its top-left corner at (x, y).
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, colour: Colour) {
        match self {
            Self::Scalable { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                for glyph in font.layout(text, *scale, point(x as f32, y as f32 + ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, v| {
                            if v > 0.0 {
                                canvas.blend(
                                    bb.min.x + gx as i32,
                                    bb.min.y + gy as i32,
                                    colour,
                                    v,
                                );
                            }
                        });
                    }
                }
            }
            Self::Bitmap => {
                let mut cx = x;
                for ch in text.chars() {
                    if let Some(rows) = bitmap_glyph(ch) {
                        for (row, bits) in rows.iter().enumerate() {
                            for col in 0..BITMAP_WIDTH {
                                if bits & (0b10000 >> col) != 0 {
                                    canvas.put(cx + col, y + row as i32, colour);
                                }
                            }
                        }
                    }
                    cx += BITMAP_ADVANCE;
                }
            }
        }
    }
}

/// Load several faces as a group: if any candidate list fails to load,
/// every face in the group falls back to the bitmap face together, so
/// mixed scalable/bitmap text never appears in one image.
pub fn load_family(requests: &[(&[&str], f32)]) -> Vec<Face> {
    let faces: Vec<Face> = requests
        .iter()
        .map(|&(candidates, size)| Face::load(candidates, size))
        .collect();

    if faces.iter().any(Face::is_bitmap) {
        return requests.iter().map(|_| Face::Bitmap).collect();
    }

    faces
}

/// 5x7 glyph rows for the built-in face, one 5-bit row per byte with the
/// most significant bit on the left. Lowercase maps to uppercase; unknown
/// characters occupy a blank cell.
fn bitmap_glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => [0b00000; 7],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00110],
        '|' => [0b00100; 7],
        '•' => [0b00000, 0b01110, 0b11111, 0b11111, 0b11111, 0b01110, 0b00000],
        '→' => [0b00000, 0b00100, 0b00010, 0b11111, 0b00010, 0b00100, 0b00000],
        _ => return None,
    };
    Some(rows)
}
