//! Canvas raster buffer and colour type.

use image::{Rgb, RgbImage};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Linear interpolation from `self` towards `other`.
    ///
    /// `t` is clamped to `0.0..=1.0`; 0 returns `self`, 1 returns `other`.
    pub fn mix(self, other: Colour, t: f32) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Colour::rgb(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

/// A mutable raster buffer that draw commands are applied to.
///
/// Pixels are stored row-major. Writes outside the canvas bounds are
/// silently clipped, so primitives never need their own bounds checks.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Create a canvas filled with a background colour.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set a pixel, clipping writes outside the canvas.
    pub fn put(&mut self, x: i32, y: i32, colour: Colour) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.pixels[(y as u32 * self.width + x as u32) as usize] = colour;
        }
    }

    /// Blend a colour over a pixel with the given coverage (0..=1).
    ///
    /// Used by glyph rasterization for antialiased edges.
    pub fn blend(&mut self, x: i32, y: i32, colour: Colour, coverage: f32) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            let idx = (y as u32 * self.width + x as u32) as usize;
            self.pixels[idx] = self.pixels[idx].mix(colour, coverage);
        }
    }

    /// Fill a whole row with one colour.
    pub fn fill_row(&mut self, y: u32, colour: Colour) {
        if y < self.height {
            let start = (y * self.width) as usize;
            let end = start + self.width as usize;
            self.pixels[start..end].fill(colour);
        }
    }

    /// Get a reference to the pixel buffer (row-major).
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Convert to an RGB image buffer for output.
    pub fn to_image(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width, self.height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let c = self.pixels[(y * self.width + x) as usize];
            *pixel = Rgb([c.r, c.g, c.b]);
        }
        img
    }
}
