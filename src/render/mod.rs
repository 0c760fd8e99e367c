//! Canvas, drawing primitives, text, and PNG output.

pub mod canvas;
pub mod png;
pub mod primitives;
pub mod text;

pub use canvas::{Canvas, Colour};
pub use png::write_png;
pub use primitives::{draw_line, fill_ellipse, fill_polygon, fill_rect};
pub use text::{load_family, Face, BOLD_FONTS, REGULAR_FONTS};
