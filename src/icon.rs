use crate::raster::{fill_shape, fill_vertical_gradient, Shape};
use image::{Rgba, RgbaImage};

/// Gradient start (top row).
pub const BLUE: Rgba<u8> = Rgba([66, 133, 244, 255]);
/// Gradient end (bottom row).
pub const PURPLE: Rgba<u8> = Rgba([108, 99, 255, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const GOLD: Rgba<u8> = Rgba([255, 215, 0, 255]);

/// Smallest icon that still gets the gold "AI" indicator.
pub const ACCENT_MIN_SIZE: u32 = 32;

/// Top-left corner and extent of one microphone part, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Part {
    /// A part of width `w` centred horizontally on a `size`-wide canvas.
    fn centred(size: i64, w: i64, y: i64, h: i64) -> Self {
        Self { x: (size - w) / 2, y, w, h }
    }

    fn bottom(&self) -> i64 {
        self.y + self.h
    }
}

/// Every dimension of the microphone, derived from the icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicLayout {
    pub capsule: Part,
    pub stand: Part,
    pub base: Part,
    /// Centre and radius of the indicator; `None` below `ACCENT_MIN_SIZE`.
    pub accent: Option<(i64, i64, i64)>,
}

impl MicLayout {
    pub fn for_size(size: u32) -> Self {
        let s = size as i64;

        let capsule = Part::centred(s, s / 4, s / 4, s / 3);
        let stand = Part::centred(s, s / 32, capsule.bottom(), s / 6);
        let base = Part::centred(s, s / 4, stand.bottom(), s / 20);

        let accent = (size >= ACCENT_MIN_SIZE).then(|| {
            let cx = capsule.x + capsule.w + s / 20;
            let cy = capsule.y - s / 20;
            (cx, cy, s / 12)
        });

        Self { capsule, stand, base, accent }
    }
}

/// Generate an RGBA icon at the given `size` (16, 32, 48 or 128 for the
/// extension manifest).
///
/// Draws a white microphone over a blue-to-purple vertical gradient, with a
/// gold indicator dot at the capsule's upper right on 32px and up.
pub fn create_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    fill_vertical_gradient(&mut img, BLUE, PURPLE);

    let layout = MicLayout::for_size(size);
    log::debug!("icon{size}: {layout:?}");

    let MicLayout { capsule, stand, base, accent } = layout;

    // Fully rounded ends: radius is half the capsule width.
    let capsule = Shape::rounded_rect(capsule.x, capsule.y, capsule.w, capsule.h, capsule.w / 2);
    let stand = Shape::rect(stand.x, stand.y, stand.w, stand.h);
    let base = Shape::rounded_rect(base.x, base.y, base.w, base.h, base.h / 2);

    for shape in [capsule, stand, base] {
        fill_shape(&mut img, shape, WHITE);
    }

    if let Some((cx, cy, r)) = accent {
        fill_shape(&mut img, Shape::circle(cx, cy, r), GOLD);
    }

    img
}
