use image::{Rgba, RgbaImage};

/// A filled region in canvas pixel space.
///
/// Boxes are inclusive on both ends: `Rect { x0: 2, x1: 4, .. }` covers
/// columns 2, 3 and 4. Coordinates are signed so shapes hanging off the
/// top/left edge clip instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { x0: i64, y0: i64, x1: i64, y1: i64 },
    RoundedRect { x0: i64, y0: i64, x1: i64, y1: i64, radius: i64 },
    Ellipse { x0: i64, y0: i64, x1: i64, y1: i64 },
}

impl Shape {
    /// Inclusive box from a top-left corner and an extent.
    pub fn rect(x: i64, y: i64, w: i64, h: i64) -> Self {
        Shape::Rect { x0: x, y0: y, x1: x + w, y1: y + h }
    }

    pub fn rounded_rect(x: i64, y: i64, w: i64, h: i64, radius: i64) -> Self {
        Shape::RoundedRect { x0: x, y0: y, x1: x + w, y1: y + h, radius }
    }

    pub fn circle(cx: i64, cy: i64, r: i64) -> Self {
        Shape::Ellipse { x0: cx - r, y0: cy - r, x1: cx + r, y1: cy + r }
    }

    /// Collapse the shape into the region it actually covers.
    ///
    /// When the corner diameter spans the whole width (or height) the two
    /// opposite corners join; when both join, the result is the inscribed
    /// ellipse. A zero diameter is a plain rectangle.
    pub fn resolve(self) -> Region {
        let (x0, y0, x1, y1, radius) = match self {
            Shape::Rect { x0, y0, x1, y1 } => return Region::Rect { x0, y0, x1, y1 },
            Shape::Ellipse { x0, y0, x1, y1 } => return Region::Ellipse { x0, y0, x1, y1 },
            Shape::RoundedRect { x0, y0, x1, y1, radius } => (x0, y0, x1, y1, radius),
        };

        let mut d = radius * 2;
        let full_x = d >= x1 - x0 - 1;
        if full_x {
            d = x1 - x0;
        }
        let full_y = d >= y1 - y0 - 1;
        if full_y {
            d = y1 - y0;
        }

        if full_x && full_y {
            Region::Ellipse { x0, y0, x1, y1 }
        } else if d <= 0 {
            Region::Rect { x0, y0, x1, y1 }
        } else {
            Region::Rounded { x0, y0, x1, y1, corner_diameter: d }
        }
    }
}

/// A resolved shape, ready for per-pixel coverage tests.
///
/// Curved edges are measured against the inclusive extent, so the first
/// and last row and column of the box are reached just like a `Rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    Rect { x0: i64, y0: i64, x1: i64, y1: i64 },
    Rounded { x0: i64, y0: i64, x1: i64, y1: i64, corner_diameter: i64 },
    Ellipse { x0: i64, y0: i64, x1: i64, y1: i64 },
}

impl Region {
    fn bounds(&self) -> (i64, i64, i64, i64) {
        match *self {
            Region::Rect { x0, y0, x1, y1 }
            | Region::Rounded { x0, y0, x1, y1, .. }
            | Region::Ellipse { x0, y0, x1, y1 } => (x0, y0, x1, y1),
        }
    }

    /// Whether pixel `(x, y)` is covered.
    fn contains(&self, x: i64, y: i64) -> bool {
        let (x0, y0, x1, y1) = self.bounds();
        if x < x0 || x > x1 || y < y0 || y > y1 {
            return false;
        }

        match *self {
            Region::Rect { .. } => true,
            Region::Rounded { corner_diameter: d, .. } => {
                let inset = d as f64 / 2.0;
                let r = (d + 1) as f64 / 2.0;
                let fx = x as f64;
                let fy = y as f64;
                // Nearest point on the inner box traced by the corner centres.
                let cx = fx.clamp(x0 as f64 + inset, x1 as f64 - inset);
                let cy = fy.clamp(y0 as f64 + inset, y1 as f64 - inset);
                let dx = fx - cx;
                let dy = fy - cy;
                dx * dx + dy * dy <= r * r
            }
            Region::Ellipse { .. } => {
                let a = (x1 - x0 + 1) as f64 / 2.0;
                let b = (y1 - y0 + 1) as f64 / 2.0;
                let nx = (x as f64 - (x0 + x1) as f64 / 2.0) / a;
                let ny = (y as f64 - (y0 + y1) as f64 / 2.0) / b;
                nx * nx + ny * ny <= 1.0
            }
        }
    }
}

/// Paint `shape` onto `canvas` with an opaque `color`, clipped to the canvas.
pub fn fill_shape(canvas: &mut RgbaImage, shape: Shape, color: Rgba<u8>) {
    let region = shape.resolve();
    let (x0, y0, x1, y1) = region.bounds();
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);

    for y in y0.max(0)..=y1.min(h - 1) {
        for x in x0.max(0)..=x1.min(w - 1) {
            if region.contains(x, y) {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Linear interpolation of one channel at row `y` of `rows`, floored.
fn lerp_channel(start: u8, end: u8, y: u32, rows: u32) -> u8 {
    let delta = (end as i64 - start as i64) * y as i64;
    (start as i64 + delta.div_euclid(rows as i64)) as u8
}

/// Colour of row `y` in a top-to-bottom gradient across `rows` rows.
pub fn gradient_row(start: Rgba<u8>, end: Rgba<u8>, y: u32, rows: u32) -> Rgba<u8> {
    Rgba([
        lerp_channel(start[0], end[0], y, rows),
        lerp_channel(start[1], end[1], y, rows),
        lerp_channel(start[2], end[2], y, rows),
        255,
    ])
}

/// Fill every row with its gradient colour at full opacity.
pub fn fill_vertical_gradient(canvas: &mut RgbaImage, start: Rgba<u8>, end: Rgba<u8>) {
    let rows = canvas.height();
    for y in 0..rows {
        let color = gradient_row(start, end, y, rows);
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, color);
        }
    }
}
