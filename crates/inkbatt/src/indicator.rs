//! Battery glyph renderer
//!
//! Draws a vertical battery outline with a fill column proportional to the
//! charge level. The glyph is composed per pixel from a prioritized set of
//! region predicates over glyph-local coordinates; the first matching
//! predicate wins, which is what keeps the borders on top of the fill at
//! the boundary rows.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use mxcfb::Rect;

/// Glyph bounding box, fixed on screen.
const WIDTH: u32 = 100;
const HEIGHT: u32 = 300;
const OFFSET_X: u32 = 300;
const OFFSET_Y: u32 = 300;

/// Positive-pole button atop the body.
const BUTTON_HEIGHT: u32 = 20;
const BUTTON_WIDTH: u32 = 40;
const BORDER_WIDTH: u32 = 5;

const DARK: Rgb565 = Rgb565::BLACK;
pub const BACKGROUND: Rgb565 = Rgb565::WHITE;
/// Mid-gray fill for the charged portion, raw cell 0x8410.
const FILL: Rgb565 = Rgb565::new(16, 32, 16);

/// Write `color` into every cell of `rect` exactly once.
pub fn fill_rect<D>(target: &mut D, color: Rgb565, rect: Rect) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::new(rect.left as i32, rect.top as i32),
        Size::new(rect.width, rect.height),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(target)
}

/// Render the battery glyph for `level` percent and return the damage
/// rect to hand to the refresh request.
///
/// Levels above 100 are treated as a full battery.
pub fn draw_battery<D>(target: &mut D, level: u8) -> Result<Rect, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let threshold = fill_threshold_row(level);
    let pixels = (0..HEIGHT).flat_map(move |y| {
        (0..WIDTH).map(move |x| {
            Pixel(
                Point::new((OFFSET_X + x) as i32, (OFFSET_Y + y) as i32),
                color_at(x, y, threshold),
            )
        })
    });
    target.draw_iter(pixels)?;
    Ok(Rect {
        top: OFFSET_Y,
        left: OFFSET_X,
        width: WIDTH,
        height: HEIGHT,
    })
}

/// First glyph row of the charged portion. Rows strictly below it render
/// in the fill color.
fn fill_threshold_row(level: u8) -> u32 {
    let level = u32::from(level.min(100));
    (100 - level) * (HEIGHT - BUTTON_HEIGHT - 2 * BORDER_WIDTH) / 100 + BUTTON_HEIGHT + BORDER_WIDTH
}

/// Color of the glyph-local pixel `(x, y)`. Predicate order matters: the
/// button and borders always win over the fill.
fn color_at(x: u32, y: u32, threshold: u32) -> Rgb565 {
    if y <= BUTTON_HEIGHT && x > (WIDTH - BUTTON_WIDTH) / 2 && x < (WIDTH + BUTTON_WIDTH) / 2 {
        DARK
    } else if y >= BUTTON_HEIGHT && y < BUTTON_HEIGHT + BORDER_WIDTH {
        DARK
    } else if y >= BUTTON_HEIGHT && (x < BORDER_WIDTH || x > WIDTH - BORDER_WIDTH) {
        DARK
    } else if y >= HEIGHT - BORDER_WIDTH {
        DARK
    } else if y > threshold {
        FILL
    } else {
        BACKGROUND
    }
}
