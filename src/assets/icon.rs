//! Plugin icon generator (128x128).
//!
//! Draws the Godot plugin icon: the brain motif with its circuit lines, the
//! gold pipeline arrow, the sprite checkerboard, and a centred caption near
//! the bottom edge. Unlike the cover, the output directory is expected to
//! exist already (the plugin tree owns it).

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::render::{
    draw_line, fill_ellipse, fill_polygon, fill_rect, write_png, Canvas, Colour, Face,
    REGULAR_FONTS,
};

use super::palette;

pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 128;

/// Output location relative to the project root.
pub const RELATIVE_PATH: &str = "addons/sprite_pipeline/icon.png";

const CAPTION: &str = "AI → SPRITES";

/// Render the icon to a canvas.
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, palette::GODOT_BLUE);

    // Brain motif, top left: three lobes and two circuit lines.
    fill_ellipse(&mut canvas, 27, 32, 43, 48, Colour::WHITE);
    fill_ellipse(&mut canvas, 44, 29, 56, 41, palette::MIST);
    fill_ellipse(&mut canvas, 43, 43, 53, 53, palette::ICE);
    draw_line(&mut canvas, 35, 40, 47, 35, 2, Colour::WHITE);
    draw_line(&mut canvas, 45, 45, 48, 48, 2, Colour::WHITE);

    // Pipeline arrow.
    let arrow = [
        (60, 40),
        (75, 40),
        (75, 35),
        (85, 45),
        (75, 55),
        (75, 50),
        (60, 50),
    ];
    fill_polygon(&mut canvas, &arrow, palette::GOLD);

    // 3x3 sprite checkerboard, bottom right.
    let cells = [Colour::WHITE, palette::MIST];
    for row in 0..3 {
        for col in 0..3 {
            let x = 75 + col * 13;
            let y = 70 + row * 13;
            fill_rect(&mut canvas, x, y, x + 12, y + 12, cells[((row + col) % 2) as usize]);
        }
    }

    // Caption, measured and centred horizontally.
    let face = Face::load(REGULAR_FONTS, 11.0);
    let text_width = face.measure(CAPTION) as i32;
    let text_x = (WIDTH as i32 - text_width) / 2;
    face.draw(&mut canvas, text_x, 112, CAPTION, Colour::WHITE);

    canvas
}

/// Render the icon and write it to `<root>/addons/sprite_pipeline/icon.png`.
///
/// The parent directory is not created; writing fails if it is missing.
pub fn write(root: &Path) -> Result<PathBuf> {
    let path = root.join(RELATIVE_PATH);

    write_png(&render(), &path)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_render_dimensions() {
        let canvas = render();
        assert_eq!(canvas.size(), (WIDTH, HEIGHT));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render().pixels(), render().pixels());
    }

    #[test]
    fn test_background_colour() {
        let canvas = render();
        assert_eq!(canvas.get(0, 0), Some(palette::GODOT_BLUE));
        assert_eq!(canvas.get(WIDTH - 1, 0), Some(palette::GODOT_BLUE));
    }

    #[test]
    fn test_brain_motif() {
        let canvas = render();

        // Centre of the main lobe
        assert_eq!(canvas.get(35, 40), Some(Colour::WHITE));
        // Secondary lobes keep their tints
        assert_eq!(canvas.get(50, 32), Some(palette::MIST));
        assert_eq!(canvas.get(48, 51), Some(palette::ICE));
    }

    #[test]
    fn test_arrow_interior() {
        let canvas = render();
        assert_eq!(canvas.get(70, 44), Some(palette::GOLD));
        assert_eq!(canvas.get(70, 46), Some(palette::GOLD));
    }

    #[test]
    fn test_checkerboard_parity() {
        let canvas = render();

        assert_eq!(canvas.get(80, 75), Some(Colour::WHITE));
        assert_eq!(canvas.get(93, 75), Some(palette::MIST));
        assert_eq!(canvas.get(106, 75), Some(Colour::WHITE));
        assert_eq!(canvas.get(80, 88), Some(palette::MIST));
    }

    #[test]
    fn test_caption_band_has_ink() {
        let canvas = render();

        // Below the checkerboard only the caption draws over the background
        let ink = (110..HEIGHT)
            .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get(x, y) != Some(palette::GODOT_BLUE))
            .count();
        assert!(ink > 0);
    }

    #[test]
    fn test_write_requires_existing_directory() {
        let dir = tempdir().unwrap();

        // Parent directory missing: the write fails
        assert!(write(dir.path()).is_err());

        // With the plugin directory in place it succeeds
        fs::create_dir_all(dir.path().join("addons/sprite_pipeline")).unwrap();
        let path = write(dir.path()).unwrap();

        assert_eq!(path, dir.path().join(RELATIVE_PATH));

        let img = image::open(&path).unwrap();
        assert!(matches!(img, image::DynamicImage::ImageRgb8(_)));
        assert_eq!(img.to_rgb8().dimensions(), (WIDTH, HEIGHT));
    }

    #[test]
    fn test_write_twice_is_byte_identical() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("addons/sprite_pipeline")).unwrap();

        let path = write(dir.path()).unwrap();
        let first = fs::read(&path).unwrap();

        write(dir.path()).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }
}
