#![forbid(unsafe_code)]

//! Drawing algorithms for the pixel buffer.
//!
//! Every operation is an extension method on [`PixelBuffer`] (the
//! [`Raster`] trait), takes its pen as a [`Brush`], and reduces to a
//! sequence of clipped [`PixelBuffer::write`] calls. Out-of-range
//! geometry is therefore always legal: pixels that fall off the grid
//! are dropped, never an error.
//!
//! Degenerate inputs have fixed policies:
//!
//! - zero-length line: exactly one pixel
//! - zero or negative circle radius: exactly the center pixel
//! - zero-area (collinear) triangle fill: nothing is written
//! - polygon with fewer than three sides: rejected with
//!   [`Error::TooFewSides`]

use std::f64::consts::TAU;
use std::mem;

use charpix_core::{Error, Point};
use unicode_width::UnicodeWidthChar;

use crate::buffer::PixelBuffer;
use crate::cell::Color;

/// Commonly used drawing glyphs.
pub mod glyphs {
    /// Full block, the default fill glyph.
    pub const SOLID_BLOCK: char = '\u{2588}';
    /// Dark shade block.
    pub const DARK_SHADE: char = '\u{2593}';
    /// Medium shade block.
    pub const MEDIUM_SHADE: char = '\u{2592}';
    /// Light shade block.
    pub const LIGHT_SHADE: char = '\u{2591}';
}

/// The pen used by every drawing operation: a glyph and its attribute.
///
/// Passed by value; the default is a solid block drawn white-on-black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// Glyph written into each touched cell.
    pub glyph: char,
    /// Attribute written into each touched cell.
    pub color: Color,
}

impl Brush {
    /// Create a brush.
    #[inline]
    pub const fn new(glyph: char, color: Color) -> Self {
        Self { glyph, color }
    }

    /// Replace the glyph.
    #[inline]
    pub const fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Replace the color.
    #[inline]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(glyphs::SOLID_BLOCK, Color::WHITE)
    }
}

/// Drawing operations on a [`PixelBuffer`].
pub trait Raster {
    /// Fill the closed rectangle spanned by the two corners.
    ///
    /// Corner order does not matter; coordinates are normalized
    /// internally, so reversed arguments fill the same rectangle.
    fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, brush: Brush);

    /// Draw the outermost ring of the buffer (all four edges).
    fn draw_border(&mut self, brush: Brush);

    /// Draw an 8-connected Bresenham line touching both endpoints.
    ///
    /// A zero-length line writes exactly one pixel. Swapping the
    /// endpoints yields the identical pixel set.
    fn draw_line(&mut self, a: Point, b: Point, brush: Brush);

    /// Draw a midpoint-algorithm circle outline.
    ///
    /// A radius of zero (or less) writes exactly the center pixel.
    fn draw_circle(&mut self, center: Point, radius: i32, brush: Brush);

    /// Draw a triangle outline: three lines connecting the vertices.
    fn draw_triangle(&mut self, a: Point, b: Point, c: Point, brush: Brush);

    /// Fill a triangle with one contiguous horizontal span per row.
    ///
    /// Every row between the lowest and highest vertex y receives a
    /// span; a zero-area (collinear) triangle writes nothing.
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, brush: Brush);

    /// Draw a regular polygon inscribed in a circle.
    ///
    /// `offset_deg` rotates the first vertex away from the +x axis.
    /// Emits exactly `sides` line segments closing back on the first
    /// vertex.
    ///
    /// # Errors
    ///
    /// [`Error::TooFewSides`] if `sides < 3`.
    fn draw_polygon(
        &mut self,
        center: Point,
        sides: u32,
        radius: i32,
        offset_deg: f64,
        brush: Brush,
    ) -> Result<(), Error>;

    /// Write a string one cell per character along +x.
    ///
    /// Zero-display-width characters are skipped without advancing.
    fn print_text(&mut self, x: i32, y: i32, text: &str, color: Color);

    /// Like [`print_text`](Self::print_text), but spaces are transparent:
    /// the underlying cell is left untouched while the cursor still
    /// advances, so text overlays existing artwork.
    fn print_text_transparent(&mut self, x: i32, y: i32, text: &str, color: Color);
}

impl Raster for PixelBuffer {
    fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, brush: Brush) {
        let (x_lo, x_hi) = ordered(x1, x2);
        let (y_lo, y_hi) = ordered(y1, y2);
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                self.write(x, y, brush.glyph, brush.color);
            }
        }
    }

    fn draw_border(&mut self, brush: Brush) {
        let right = i32::from(self.width()) - 1;
        let bottom = i32::from(self.height()) - 1;
        for x in 0..=right {
            self.write(x, 0, brush.glyph, brush.color);
            self.write(x, bottom, brush.glyph, brush.color);
        }
        for y in 0..=bottom {
            self.write(0, y, brush.glyph, brush.color);
            self.write(right, y, brush.glyph, brush.color);
        }
    }

    fn draw_line(&mut self, a: Point, b: Point, brush: Brush) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        if dy.abs() < dx.abs() {
            if a.x > b.x {
                line_low(self, b, a, brush);
            } else {
                line_low(self, a, b, brush);
            }
        } else if a.y > b.y {
            line_high(self, b, a, brush);
        } else {
            line_high(self, a, b, brush);
        }
    }

    fn draw_circle(&mut self, center: Point, radius: i32, brush: Brush) {
        if radius <= 0 {
            self.write(center.x, center.y, brush.glyph, brush.color);
            return;
        }
        let mut x = 0;
        let mut y = radius;
        let mut d = 3 - 2 * radius;
        plot_octants(self, center, x, y, brush);
        while y >= x {
            // decision uses the pre-step values, then advances the octant
            if d > 0 {
                d += 4 * (x - y) + 10;
                x += 1;
                y -= 1;
            } else {
                d += 4 * x + 6;
                x += 1;
            }
            plot_octants(self, center, x, y, brush);
        }
    }

    fn draw_triangle(&mut self, a: Point, b: Point, c: Point, brush: Brush) {
        self.draw_line(a, b, brush);
        self.draw_line(b, c, brush);
        self.draw_line(c, a, brush);
    }

    fn fill_triangle(&mut self, p1: Point, p2: Point, p3: Point, brush: Brush) {
        // stable three-way sort by y: strict-greater swaps keep the
        // input order of tied vertices
        let (mut a, mut b, mut c) = (p1, p2, p3);
        if a.y > b.y {
            mem::swap(&mut a, &mut b);
        }
        if a.y > c.y {
            mem::swap(&mut a, &mut c);
        }
        if b.y > c.y {
            mem::swap(&mut b, &mut c);
        }

        let area2 = i64::from(b.x - a.x) * i64::from(c.y - a.y)
            - i64::from(c.x - a.x) * i64::from(b.y - a.y);
        if area2 == 0 {
            return;
        }

        // the long edge a->c spans every row; the short edges cover the
        // upper and lower halves, split at b.y
        let mut long = EdgeWalker::new(a, c);
        if a.y < b.y {
            let mut upper = EdgeWalker::new(a, b);
            for y in a.y..b.y {
                let (l0, l1) = long.next_span();
                let (u0, u1) = upper.next_span();
                fill_row(self, l0.min(u0), l1.max(u1), y, brush);
            }
        }
        // flat top (a.y == b.y) lands here directly
        let mut lower = EdgeWalker::new(b, c);
        for y in b.y..=c.y {
            let (l0, l1) = long.next_span();
            let (e0, e1) = lower.next_span();
            fill_row(self, l0.min(e0), l1.max(e1), y, brush);
        }
    }

    fn draw_polygon(
        &mut self,
        center: Point,
        sides: u32,
        radius: i32,
        offset_deg: f64,
        brush: Brush,
    ) -> Result<(), Error> {
        if sides < 3 {
            return Err(Error::TooFewSides { sides });
        }

        let step = TAU / f64::from(sides);
        let offset = offset_deg.to_radians();
        let vertices: Vec<Point> = (0..sides)
            .map(|i| {
                let angle = offset + step * f64::from(i);
                Point::new(
                    (angle.cos() * f64::from(radius)).round() as i32 + center.x,
                    (angle.sin() * f64::from(radius)).round() as i32 + center.y,
                )
            })
            .collect();

        for i in 0..vertices.len() {
            let next = vertices[(i + 1) % vertices.len()];
            self.draw_line(vertices[i], next, brush);
        }
        Ok(())
    }

    fn print_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let mut cx = x;
        for ch in text.chars() {
            if UnicodeWidthChar::width(ch).unwrap_or(0) == 0 {
                continue;
            }
            self.write(cx, y, ch, color);
            cx += 1;
        }
    }

    fn print_text_transparent(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let mut cx = x;
        for ch in text.chars() {
            if UnicodeWidthChar::width(ch).unwrap_or(0) == 0 {
                continue;
            }
            if ch != ' ' {
                self.write(cx, y, ch, color);
            }
            cx += 1;
        }
    }
}

#[inline]
const fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}

fn fill_row(buf: &mut PixelBuffer, x0: i32, x1: i32, y: i32, brush: Brush) {
    for x in x0..=x1 {
        buf.write(x, y, brush.glyph, brush.color);
    }
}

/// Low-slope variant: walks x in unit steps, `a.x <= b.x`.
fn line_low(buf: &mut PixelBuffer, a: Point, b: Point, brush: Brush) {
    let dx = b.x - a.x;
    let mut dy = b.y - a.y;
    let mut yi = 1;
    if dy < 0 {
        yi = -1;
        dy = -dy;
    }
    let mut d = 2 * dy - dx;
    let mut y = a.y;
    for x in a.x..=b.x {
        buf.write(x, y, brush.glyph, brush.color);
        if d > 0 {
            y += yi;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }
}

/// High-slope variant: walks y in unit steps, `a.y <= b.y`.
fn line_high(buf: &mut PixelBuffer, a: Point, b: Point, brush: Brush) {
    let mut dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut xi = 1;
    if dx < 0 {
        xi = -1;
        dx = -dx;
    }
    let mut d = 2 * dx - dy;
    let mut x = a.x;
    for y in a.y..=b.y {
        buf.write(x, y, brush.glyph, brush.color);
        if d > 0 {
            x += xi;
            d += 2 * (dx - dy);
        } else {
            d += 2 * dx;
        }
    }
}

/// Mirror one computed octant point into all eight reflections.
fn plot_octants(buf: &mut PixelBuffer, c: Point, x: i32, y: i32, brush: Brush) {
    buf.write(c.x - x, c.y - y, brush.glyph, brush.color);
    buf.write(c.x - y, c.y - x, brush.glyph, brush.color);
    buf.write(c.x + y, c.y - x, brush.glyph, brush.color);
    buf.write(c.x + x, c.y - y, brush.glyph, brush.color);
    buf.write(c.x - x, c.y + y, brush.glyph, brush.color);
    buf.write(c.x - y, c.y + x, brush.glyph, brush.color);
    buf.write(c.x + y, c.y + x, brush.glyph, brush.color);
    buf.write(c.x + x, c.y + y, brush.glyph, brush.color);
}

/// Walks one triangle edge a scanline at a time.
///
/// Carries the same error-accumulator state as the line variants and
/// reports the x-extent the edge covers on the current row, leaving the
/// walker positioned on the next row. Requires `start.y <= end.y`; the
/// caller drives it for exactly `end.y - start.y + 1` rows.
struct EdgeWalker {
    x: i32,
    y: i32,
    end: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    d: i32,
    steep: bool,
}

impl EdgeWalker {
    fn new(start: Point, end: Point) -> Self {
        debug_assert!(start.y <= end.y);
        let dx = (end.x - start.x).abs();
        let dy = end.y - start.y;
        let sx = if end.x >= start.x { 1 } else { -1 };
        let steep = dy >= dx;
        let d = if steep { 2 * dx - dy } else { 2 * dy - dx };
        Self {
            x: start.x,
            y: start.y,
            end,
            dx,
            dy,
            sx,
            d,
            steep,
        }
    }

    /// X-extent covered on the current row; advances to the next row.
    fn next_span(&mut self) -> (i32, i32) {
        let row_start = self.x;
        if self.y >= self.end.y {
            // final row runs out to the endpoint
            let span = ordered(row_start, self.end.x);
            self.x = self.end.x;
            self.y += 1;
            return span;
        }
        if self.steep {
            // at most one x-step per row
            if self.d > 0 {
                self.x += self.sx;
                self.d += 2 * (self.dx - self.dy);
            } else {
                self.d += 2 * self.dx;
            }
            self.y += 1;
            return (row_start, row_start);
        }
        // shallow: consume x-steps until the error term drops a row
        let mut row_end = self.x;
        loop {
            if self.x == self.end.x {
                break;
            }
            let descend = self.d > 0;
            self.d += if descend {
                2 * (self.dy - self.dx)
            } else {
                2 * self.dy
            };
            row_end = self.x;
            self.x += self.sx;
            if descend {
                break;
            }
        }
        self.y += 1;
        ordered(row_start, row_end)
    }
}

#[cfg(test)]
mod tests {
    use super::{Brush, Raster, glyphs};
    use crate::buffer::PixelBuffer;
    use crate::cell::Color;
    use charpix_core::{Error, Point};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Coordinates of every non-blank cell, row-major.
    fn lit(buf: &PixelBuffer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..i32::from(buf.height()) {
            for x in 0..i32::from(buf.width()) {
                if buf.cell_at(x, y).unwrap() != buf.blank() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn brush() -> Brush {
        Brush::default()
    }

    // --- Brush defaults ---

    #[test]
    fn default_brush_is_solid_white_block() {
        let b = Brush::default();
        assert_eq!(b.glyph, glyphs::SOLID_BLOCK);
        assert_eq!(b.color, Color::WHITE);
    }

    // --- Rectangle fill ---

    #[test]
    fn fill_rect_covers_the_closed_rectangle() {
        let mut buf = PixelBuffer::new(8, 8);
        buf.fill_rect(1, 2, 3, 4, brush());
        let cells = lit(&buf);
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&(1, 2)));
        assert!(cells.contains(&(3, 4)));
        assert!(!cells.contains(&(4, 4)));
    }

    #[test]
    fn fill_rect_normalizes_reversed_corners() {
        let mut forward = PixelBuffer::new(8, 8);
        let mut reversed = PixelBuffer::new(8, 8);
        forward.fill_rect(1, 2, 5, 6, brush());
        reversed.fill_rect(5, 6, 1, 2, brush());
        assert_eq!(lit(&forward), lit(&reversed));
    }

    #[test]
    fn fill_rect_clips_outside_the_grid() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(-10, -10, 10, 10, brush());
        assert_eq!(lit(&buf).len(), 16);
    }

    // --- Border ---

    #[test]
    fn border_is_the_outermost_ring() {
        let mut buf = PixelBuffer::new(6, 4);
        buf.draw_border(brush());
        let cells = lit(&buf);
        // 2 * 6 + 2 * (4 - 2) = 16 ring cells
        assert_eq!(cells.len(), 16);
        for (x, y) in cells {
            assert!(x == 0 || x == 5 || y == 0 || y == 3, "({x},{y}) not on ring");
        }
        assert!(buf.cell_at(2, 2).unwrap() == buf.blank());
    }

    // --- Line ---

    #[test]
    fn zero_length_line_writes_one_pixel() {
        let mut buf = PixelBuffer::new(5, 5);
        buf.draw_line(p(2, 2), p(2, 2), brush());
        assert_eq!(lit(&buf), vec![(2, 2)]);
    }

    #[test]
    fn line_touches_both_endpoints() {
        let mut buf = PixelBuffer::new(20, 20);
        buf.draw_line(p(1, 17), p(15, 3), brush());
        let cells = lit(&buf);
        assert!(cells.contains(&(1, 17)));
        assert!(cells.contains(&(15, 3)));
    }

    #[test]
    fn line_is_8_connected() {
        for (a, b) in [(p(2, 5), p(27, 14)), (p(4, 25), p(9, 2)), (p(25, 3), p(1, 20))] {
            let mut buf = PixelBuffer::new(30, 30);
            buf.draw_line(a, b, brush());
            let cells = lit(&buf);
            assert!(cells.len() > 1);
            for &(x, y) in &cells {
                let has_neighbor = cells.iter().any(|&(nx, ny)| {
                    (nx, ny) != (x, y) && (nx - x).abs() <= 1 && (ny - y).abs() <= 1
                });
                assert!(has_neighbor, "isolated pixel ({x},{y}) on {a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn line_is_symmetric_under_endpoint_swap() {
        for (a, b) in [
            (p(0, 0), p(9, 4)),
            (p(3, 8), p(7, 1)),
            (p(0, 9), p(9, 0)),
            (p(4, 0), p(4, 9)),
            (p(0, 4), p(9, 4)),
        ] {
            let mut fwd = PixelBuffer::new(10, 10);
            let mut rev = PixelBuffer::new(10, 10);
            fwd.draw_line(a, b, brush());
            rev.draw_line(b, a, brush());
            assert_eq!(lit(&fwd), lit(&rev), "asymmetric for {a:?} -> {b:?}");
        }
    }

    #[test]
    fn horizontal_and_vertical_lines_are_exact() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.draw_line(p(2, 3), p(7, 3), brush());
        assert_eq!(
            lit(&buf),
            (2..=7).map(|x| (x, 3)).collect::<Vec<_>>()
        );

        let mut buf = PixelBuffer::new(10, 10);
        buf.draw_line(p(4, 1), p(4, 6), brush());
        assert_eq!(
            lit(&buf),
            (1..=6).map(|y| (4, y)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn off_grid_line_endpoints_clip_without_panic() {
        let mut buf = PixelBuffer::new(8, 8);
        buf.draw_line(p(-20, -5), p(30, 12), brush());
        // whatever survived is inside the grid by construction
        assert!(!lit(&buf).is_empty());
    }

    // --- Circle ---

    #[test]
    fn circle_has_eightfold_symmetry() {
        let mut buf = PixelBuffer::new(25, 25);
        let c = p(12, 12);
        buf.draw_circle(c, 5, brush());
        let cells = lit(&buf);
        for &(x, y) in &cells {
            let (rx, ry) = (x - c.x, y - c.y);
            for (mx, my) in [
                (rx, ry),
                (-rx, ry),
                (rx, -ry),
                (-rx, -ry),
                (ry, rx),
                (-ry, rx),
                (ry, -rx),
                (-ry, -rx),
            ] {
                assert!(
                    cells.contains(&(c.x + mx, c.y + my)),
                    "missing mirror of ({rx},{ry})"
                );
            }
        }
    }

    #[test]
    fn circle_radius_extremes_touch_the_axes() {
        let mut buf = PixelBuffer::new(25, 25);
        buf.draw_circle(p(12, 12), 5, brush());
        let cells = lit(&buf);
        for probe in [(12, 7), (12, 17), (7, 12), (17, 12)] {
            assert!(cells.contains(&probe), "missing {probe:?}");
        }
    }

    #[test]
    fn zero_radius_circle_is_a_single_point() {
        for r in [0, -3] {
            let mut buf = PixelBuffer::new(9, 9);
            buf.draw_circle(p(4, 4), r, brush());
            assert_eq!(lit(&buf), vec![(4, 4)], "radius {r}");
        }
    }

    // --- Triangle outline ---

    #[test]
    fn triangle_outline_contains_all_vertices() {
        let mut buf = PixelBuffer::new(20, 20);
        buf.draw_triangle(p(2, 2), p(16, 5), p(8, 17), brush());
        let cells = lit(&buf);
        for v in [(2, 2), (16, 5), (8, 17)] {
            assert!(cells.contains(&v), "missing vertex {v:?}");
        }
    }

    // --- Triangle fill ---

    /// Lit cells grouped by row, asserting each row is one contiguous span.
    fn row_spans(buf: &PixelBuffer) -> Vec<(i32, i32, i32)> {
        let mut spans = Vec::new();
        for y in 0..i32::from(buf.height()) {
            let xs: Vec<i32> = (0..i32::from(buf.width()))
                .filter(|&x| buf.cell_at(x, y).unwrap() != buf.blank())
                .collect();
            if xs.is_empty() {
                continue;
            }
            let (lo, hi) = (xs[0], xs[xs.len() - 1]);
            assert_eq!(
                xs.len() as i32,
                hi - lo + 1,
                "row {y} is not contiguous: {xs:?}"
            );
            spans.push((y, lo, hi));
        }
        spans
    }

    #[test]
    fn right_triangle_fill_covers_every_row() {
        let mut buf = PixelBuffer::new(16, 16);
        buf.fill_triangle(p(0, 0), p(10, 0), p(0, 10), brush());
        let spans = row_spans(&buf);
        assert_eq!(spans.len(), 11, "a row was skipped: {spans:?}");
        for (i, &(y, lo, _hi)) in spans.iter().enumerate() {
            assert_eq!(y, i as i32);
            assert_eq!(lo, 0, "row {y} detached from the left edge");
        }
        // cell count tracks the analytic area (50) plus boundary
        let total: i32 = spans.iter().map(|&(_, lo, hi)| hi - lo + 1).sum();
        assert!((50..=72).contains(&total), "count {total} out of range");
    }

    #[test]
    fn fill_covers_the_vertices() {
        let mut buf = PixelBuffer::new(24, 24);
        let (a, b, c) = (p(3, 2), p(20, 9), p(7, 21));
        buf.fill_triangle(a, b, c, brush());
        let cells = lit(&buf);
        for v in [(3, 2), (20, 9), (7, 21)] {
            assert!(cells.contains(&v), "missing vertex {v:?}");
        }
    }

    #[test]
    fn fill_spans_every_row_between_min_and_max_y() {
        let mut buf = PixelBuffer::new(32, 32);
        buf.fill_triangle(p(5, 3), p(28, 12), p(11, 27), brush());
        let spans = row_spans(&buf);
        let rows: Vec<i32> = spans.iter().map(|&(y, ..)| y).collect();
        assert_eq!(rows, (3..=27).collect::<Vec<_>>());
    }

    #[test]
    fn flat_top_triangle_fills() {
        let mut buf = PixelBuffer::new(16, 16);
        buf.fill_triangle(p(2, 3), p(12, 3), p(7, 11), brush());
        let spans = row_spans(&buf);
        let rows: Vec<i32> = spans.iter().map(|&(y, ..)| y).collect();
        assert_eq!(rows, (3..=11).collect::<Vec<_>>());
        // top row spans the flat edge
        assert_eq!(spans[0], (3, 2, 12));
    }

    #[test]
    fn flat_bottom_triangle_fills() {
        let mut buf = PixelBuffer::new(16, 16);
        buf.fill_triangle(p(7, 2), p(2, 10), p(12, 10), brush());
        let spans = row_spans(&buf);
        assert_eq!(spans[0], (2, 7, 7));
        assert_eq!(*spans.last().unwrap(), (10, 2, 12));
    }

    #[test]
    fn collinear_triangle_fill_writes_nothing() {
        let mut buf = PixelBuffer::new(16, 16);
        buf.fill_triangle(p(1, 1), p(5, 5), p(9, 9), brush());
        assert!(lit(&buf).is_empty());

        let mut buf = PixelBuffer::new(16, 16);
        buf.fill_triangle(p(2, 4), p(2, 4), p(2, 4), brush());
        assert!(lit(&buf).is_empty());
    }

    #[test]
    fn vertex_order_does_not_change_the_fill() {
        let (a, b, c) = (p(2, 1), p(13, 6), p(5, 12));
        let mut reference = PixelBuffer::new(16, 16);
        reference.fill_triangle(a, b, c, brush());
        let expected = lit(&reference);

        for (x, y, z) in [(a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            let mut buf = PixelBuffer::new(16, 16);
            buf.fill_triangle(x, y, z, brush());
            assert_eq!(lit(&buf), expected, "order {x:?},{y:?},{z:?} differs");
        }
    }

    // --- Polygon ---

    #[test]
    fn polygon_rejects_fewer_than_three_sides() {
        let mut buf = PixelBuffer::new(10, 10);
        for sides in [0, 1, 2] {
            assert_eq!(
                buf.draw_polygon(p(5, 5), sides, 3, 0.0, brush()),
                Err(Error::TooFewSides { sides })
            );
        }
        assert!(lit(&buf).is_empty());
    }

    #[test]
    fn polygon_matches_explicit_line_loop() {
        let sides = 5;
        let radius = 7.0;
        let mut poly = PixelBuffer::new(24, 24);
        poly.draw_polygon(p(11, 11), sides, 7, 0.0, brush()).unwrap();

        let mut lines = PixelBuffer::new(24, 24);
        let verts: Vec<Point> = (0..sides)
            .map(|i| {
                let angle = std::f64::consts::TAU / f64::from(sides) * f64::from(i);
                p(
                    (angle.cos() * radius).round() as i32 + 11,
                    (angle.sin() * radius).round() as i32 + 11,
                )
            })
            .collect();
        for i in 0..verts.len() {
            lines.draw_line(verts[i], verts[(i + 1) % verts.len()], brush());
        }
        assert_eq!(lit(&poly), lit(&lines));
    }

    #[test]
    fn polygon_offset_rotates_the_vertices() {
        let mut flat = PixelBuffer::new(24, 24);
        let mut rotated = PixelBuffer::new(24, 24);
        flat.draw_polygon(p(11, 11), 4, 8, 0.0, brush()).unwrap();
        rotated.draw_polygon(p(11, 11), 4, 8, 45.0, brush()).unwrap();
        assert_ne!(lit(&flat), lit(&rotated));
        // 0-degree square has a vertex on the +x axis
        assert!(lit(&flat).contains(&(19, 11)));
    }

    // --- Text ---

    #[test]
    fn print_text_advances_one_cell_per_char() {
        let mut buf = PixelBuffer::new(12, 3);
        buf.print_text(2, 1, "score", Color::WHITE);
        assert_eq!(buf.read(2, 1), Ok('s'));
        assert_eq!(buf.read(6, 1), Ok('e'));
        assert_eq!(buf.read(7, 1), Ok(' '));
    }

    #[test]
    fn print_text_clips_at_the_edge() {
        let mut buf = PixelBuffer::new(5, 1);
        buf.print_text(3, 0, "abcdef", Color::WHITE);
        assert_eq!(buf.read(3, 0), Ok('a'));
        assert_eq!(buf.read(4, 0), Ok('b'));
        // the rest fell off the grid silently
    }

    #[test]
    fn print_text_skips_zero_width_chars_without_advancing() {
        let mut buf = PixelBuffer::new(10, 1);
        // U+0301 combining acute has zero display width
        buf.print_text(0, 0, "a\u{301}b", Color::WHITE);
        assert_eq!(buf.read(0, 0), Ok('a'));
        assert_eq!(buf.read(1, 0), Ok('b'));
    }

    #[test]
    fn transparent_text_preserves_cells_under_spaces() {
        let mut buf = PixelBuffer::new(10, 1);
        buf.fill_all('#', Color::GREEN);
        buf.print_text_transparent(0, 0, "a b", Color::WHITE);
        assert_eq!(buf.read(0, 0), Ok('a'));
        assert_eq!(buf.read(1, 0), Ok('#'));
        assert_eq!(buf.read(2, 0), Ok('b'));
    }

    #[test]
    fn opaque_text_overwrites_cells_under_spaces() {
        let mut buf = PixelBuffer::new(10, 1);
        buf.fill_all('#', Color::GREEN);
        buf.print_text(0, 0, "a b", Color::WHITE);
        assert_eq!(buf.read(1, 0), Ok(' '));
    }
}
