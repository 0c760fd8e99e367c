//! Store cover generator (630x500).
//!
//! Draws the itch.io cover: a vertical gradient backdrop, the plugin emblem
//! (brain, pipeline arrow, sprite checkerboard on a disc), the title and
//! feature text block, and a footer line. Every coordinate is hand-tuned
//! and fixed; the sequence is applied in order, later shapes occluding
//! earlier ones.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BrandError, Result};
use crate::render::{
    fill_ellipse, fill_polygon, fill_rect, load_family, write_png, Canvas, Colour, BOLD_FONTS,
    REGULAR_FONTS,
};

use super::palette;

pub const WIDTH: u32 = 630;
pub const HEIGHT: u32 = 500;

/// Output location relative to the project root.
pub const RELATIVE_PATH: &str = "docs/cover.png";

/// Emblem origin and diameter on the cover.
const EMBLEM_X: i32 = 80;
const EMBLEM_Y: i32 = 160;
const EMBLEM_SIZE: i32 = 180;

const TITLE: &str = "Sprite Pipeline";
const SUBTITLE: &str = "AI-Powered Sprite Generation";
const FOOTER: &str = "For Godot 4.2+ | MIT License";

const FEATURES: [&str; 4] = [
    "Generate sprites in Godot Editor",
    "Multiple art styles",
    "Batch processing",
    "Smart caching",
];

/// Render the cover to a canvas.
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, palette::SLATE);

    // Vertical gradient: red channel 43 -> 72 top to bottom, truncated.
    for y in 0..HEIGHT {
        let val = (43.0 + (72.0 - 43.0) * (y as f32 / HEIGHT as f32)) as u8;
        canvas.fill_row(y, Colour::rgb(val, 82, 120));
    }

    // White backing disc with the blue emblem disc on top.
    fill_ellipse(
        &mut canvas,
        EMBLEM_X - 10,
        EMBLEM_Y - 10,
        EMBLEM_X + EMBLEM_SIZE + 10,
        EMBLEM_Y + EMBLEM_SIZE + 10,
        Colour::WHITE,
    );
    fill_ellipse(
        &mut canvas,
        EMBLEM_X,
        EMBLEM_Y,
        EMBLEM_X + EMBLEM_SIZE,
        EMBLEM_Y + EMBLEM_SIZE,
        palette::GODOT_BLUE,
    );

    // Brain motif: three overlapping lobes.
    fill_ellipse(
        &mut canvas,
        EMBLEM_X + 30,
        EMBLEM_Y + 40,
        EMBLEM_X + 70,
        EMBLEM_Y + 80,
        Colour::WHITE,
    );
    fill_ellipse(
        &mut canvas,
        EMBLEM_X + 60,
        EMBLEM_Y + 30,
        EMBLEM_X + 90,
        EMBLEM_Y + 60,
        palette::MIST,
    );
    fill_ellipse(
        &mut canvas,
        EMBLEM_X + 55,
        EMBLEM_Y + 65,
        EMBLEM_X + 80,
        EMBLEM_Y + 90,
        palette::ICE,
    );

    // Pipeline arrow.
    let arrow = [
        (EMBLEM_X + 90, EMBLEM_Y + 60),
        (EMBLEM_X + 110, EMBLEM_Y + 60),
        (EMBLEM_X + 110, EMBLEM_Y + 50),
        (EMBLEM_X + 130, EMBLEM_Y + 70),
        (EMBLEM_X + 110, EMBLEM_Y + 90),
        (EMBLEM_X + 110, EMBLEM_Y + 80),
        (EMBLEM_X + 90, EMBLEM_Y + 80),
    ];
    fill_polygon(&mut canvas, &arrow, palette::GOLD);

    // 3x3 sprite checkerboard.
    let cells = [Colour::WHITE, palette::MIST];
    for row in 0..3 {
        for col in 0..3 {
            let x = EMBLEM_X + 110 + col * 20;
            let y = EMBLEM_Y + 100 + row * 20;
            fill_rect(&mut canvas, x, y, x + 18, y + 18, cells[((row + col) % 2) as usize]);
        }
    }

    // Text block. The three faces load as a group: one failure downgrades
    // them all to the built-in face, keeping the block uniform.
    let faces = load_family(&[
        (BOLD_FONTS, 56.0),
        (REGULAR_FONTS, 28.0),
        (REGULAR_FONTS, 20.0),
    ]);
    let (title_face, subtitle_face, feature_face) = (&faces[0], &faces[1], &faces[2]);

    title_face.draw(&mut canvas, 320, 100, TITLE, Colour::WHITE);
    subtitle_face.draw(&mut canvas, 320, 170, SUBTITLE, palette::MIST);

    let mut y = 240;
    for feature in FEATURES {
        feature_face.draw(&mut canvas, 320, y, &format!("• {}", feature), Colour::WHITE);
        y += 35;
    }

    feature_face.draw(&mut canvas, 320, 460, FOOTER, palette::HAZE);

    canvas
}

/// Render the cover and write it to `<root>/docs/cover.png`, creating the
/// output directory if needed.
pub fn write(root: &Path) -> Result<PathBuf> {
    let path = root.join(RELATIVE_PATH);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BrandError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    write_png(&render(), &path)?;

    Ok(path)
}
