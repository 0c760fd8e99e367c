//! brand - Sprite Pipeline branding asset generator
//!
//! A library for drawing the plugin's static branding PNGs (the 128x128
//! editor icon and the 630x500 itch.io cover) from fixed sequences of
//! primitive drawing commands.

pub mod assets;
pub mod cli;
pub mod error;
pub mod render;

pub use assets::{cover, icon};
pub use error::{BrandError, Result};
pub use render::{
    draw_line, fill_ellipse, fill_polygon, fill_rect, write_png, Canvas, Colour, Face,
};
