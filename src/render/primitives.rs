//! Drawing primitives - filled ellipses, polygons, rectangles, and lines.
//!
//! All primitives mutate a [`Canvas`] in place and clip against its bounds.
//! Ellipses and rectangles take inclusive bounding boxes; polygons are
//! scanline-filled at pixel centres.

use super::canvas::{Canvas, Colour};

/// Fill an ellipse inscribed in the inclusive bounding box
/// `(x0, y0)..=(x1, y1)`.
pub fn fill_ellipse(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
    let rx = (x1 - x0) as f32 / 2.0;
    let ry = (y1 - y0) as f32 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = (x as f32 - cx) / rx;
            let dy = (y as f32 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                canvas.put(x, y, colour);
            }
        }
    }
}

/// Fill a polygon using even-odd scanline filling.
///
/// Scanlines are sampled at pixel centres (`y + 0.5`), so horizontal edges
/// contribute nothing and shared vertices are not double-counted.
pub fn fill_polygon(canvas: &mut Canvas, points: &[(i32, i32)], colour: Colour) {
    if points.len() < 3 {
        return;
    }

    let min_y = points.iter().map(|p| p.1).min().unwrap();
    let max_y = points.iter().map(|p| p.1).max().unwrap();

    for row in min_y..=max_y {
        let y = row as f32 + 0.5;

        let mut xs: Vec<f32> = Vec::new();
        for i in 0..points.len() {
            let (ax, ay) = points[i];
            let (bx, by) = points[(i + 1) % points.len()];
            let (ax, ay, bx, by) = (ax as f32, ay as f32, bx as f32, by as f32);

            if (ay <= y && by > y) || (by <= y && ay > y) {
                xs.push(ax + (y - ay) / (by - ay) * (bx - ax));
            }
        }

        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());

        for pair in xs.chunks_exact(2) {
            let start = pair[0].round() as i32;
            let end = pair[1].round() as i32;
            for col in start..end {
                canvas.put(col, row, colour);
            }
        }
    }
}

/// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)`.
pub fn fill_rect(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            canvas.put(x, y, colour);
        }
    }
}

/// Draw a straight line of the given stroke width.
///
/// Walks the segment with Bresenham's algorithm and stamps a
/// `width` x `width` square at each step.
pub fn draw_line(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: u32,
    colour: Colour,
) {
    let w = width.max(1) as i32;
    let half = w / 2;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        for oy in 0..w {
            for ox in 0..w {
                canvas.put(x + ox - half, y + oy - half, colour);
            }
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(canvas: &Canvas, colour: Colour) -> usize {
        canvas.pixels().iter().filter(|&&c| c == colour).count()
    }

    #[test]
    fn test_fill_ellipse_circle() {
        let mut canvas = Canvas::new(16, 16, Colour::BLACK);
        fill_ellipse(&mut canvas, 2, 2, 12, 12, Colour::WHITE);

        // Centre and axis extremes are inside
        assert_eq!(canvas.get(7, 7), Some(Colour::WHITE));
        assert_eq!(canvas.get(2, 7), Some(Colour::WHITE));
        assert_eq!(canvas.get(12, 7), Some(Colour::WHITE));
        assert_eq!(canvas.get(7, 2), Some(Colour::WHITE));

        // Bounding box corners are outside
        assert_eq!(canvas.get(2, 2), Some(Colour::BLACK));
        assert_eq!(canvas.get(12, 12), Some(Colour::BLACK));
    }

    #[test]
    fn test_fill_ellipse_symmetric() {
        let mut canvas = Canvas::new(20, 20, Colour::BLACK);
        fill_ellipse(&mut canvas, 3, 5, 15, 11, Colour::WHITE);

        for y in 5..=11u32 {
            for x in 3..=15u32 {
                let mirrored = canvas.get(18 - x, 16 - y);
                assert_eq!(canvas.get(x, y), mirrored, "asymmetry at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_ellipse_degenerate() {
        let mut canvas = Canvas::new(8, 8, Colour::BLACK);
        fill_ellipse(&mut canvas, 3, 3, 3, 6, Colour::WHITE);
        assert_eq!(count(&canvas, Colour::WHITE), 0);
    }

    #[test]
    fn test_fill_ellipse_clips() {
        let mut canvas = Canvas::new(8, 8, Colour::BLACK);
        fill_ellipse(&mut canvas, -4, -4, 4, 4, Colour::WHITE);
        assert_eq!(canvas.get(0, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_fill_polygon_square() {
        let mut canvas = Canvas::new(12, 12, Colour::BLACK);
        fill_polygon(&mut canvas, &[(2, 2), (8, 2), (8, 8), (2, 8)], Colour::WHITE);

        // Pixel-centre sampling fills 2..=7 in both axes
        assert_eq!(count(&canvas, Colour::WHITE), 36);
        assert_eq!(canvas.get(2, 2), Some(Colour::WHITE));
        assert_eq!(canvas.get(7, 7), Some(Colour::WHITE));
        assert_eq!(canvas.get(8, 8), Some(Colour::BLACK));
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut canvas = Canvas::new(16, 16, Colour::BLACK);
        fill_polygon(&mut canvas, &[(2, 12), (8, 2), (14, 12)], Colour::WHITE);

        assert_eq!(canvas.get(8, 8), Some(Colour::WHITE));
        assert_eq!(canvas.get(2, 2), Some(Colour::BLACK));
        assert_eq!(canvas.get(14, 2), Some(Colour::BLACK));
    }

    #[test]
    fn test_fill_polygon_too_few_points() {
        let mut canvas = Canvas::new(8, 8, Colour::BLACK);
        fill_polygon(&mut canvas, &[(0, 0), (7, 7)], Colour::WHITE);
        assert_eq!(count(&canvas, Colour::WHITE), 0);
    }

    #[test]
    fn test_fill_rect_inclusive() {
        let mut canvas = Canvas::new(8, 8, Colour::BLACK);
        fill_rect(&mut canvas, 1, 1, 3, 4, Colour::WHITE);

        // Inclusive corners: 3 x 4 pixels
        assert_eq!(count(&canvas, Colour::WHITE), 12);
        assert_eq!(canvas.get(1, 1), Some(Colour::WHITE));
        assert_eq!(canvas.get(3, 4), Some(Colour::WHITE));
        assert_eq!(canvas.get(4, 4), Some(Colour::BLACK));
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut canvas = Canvas::new(10, 10, Colour::BLACK);
        draw_line(&mut canvas, 1, 5, 8, 5, 1, Colour::WHITE);

        assert_eq!(count(&canvas, Colour::WHITE), 8);
        assert_eq!(canvas.get(1, 5), Some(Colour::WHITE));
        assert_eq!(canvas.get(8, 5), Some(Colour::WHITE));
        assert_eq!(canvas.get(0, 5), Some(Colour::BLACK));
    }

    #[test]
    fn test_draw_line_thick() {
        let mut canvas = Canvas::new(10, 10, Colour::BLACK);
        draw_line(&mut canvas, 2, 4, 7, 4, 2, Colour::WHITE);

        // Width-2 stroke covers two rows, biased up from the segment
        assert_eq!(canvas.get(4, 3), Some(Colour::WHITE));
        assert_eq!(canvas.get(4, 4), Some(Colour::WHITE));
        assert_eq!(canvas.get(4, 5), Some(Colour::BLACK));
    }

    #[test]
    fn test_draw_line_diagonal_endpoints() {
        let mut canvas = Canvas::new(10, 10, Colour::BLACK);
        draw_line(&mut canvas, 1, 1, 6, 4, 1, Colour::WHITE);

        assert_eq!(canvas.get(1, 1), Some(Colour::WHITE));
        assert_eq!(canvas.get(6, 4), Some(Colour::WHITE));
    }

    #[test]
    fn test_draw_line_zero_width_draws() {
        let mut canvas = Canvas::new(4, 4, Colour::BLACK);
        draw_line(&mut canvas, 0, 0, 3, 0, 0, Colour::WHITE);
        assert_eq!(count(&canvas, Colour::WHITE), 4);
    }
}
