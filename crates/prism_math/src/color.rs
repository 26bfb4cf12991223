//! Colors are plain `Vec3`s holding linear RGB channels, nominally in `[0, 1]`.

use crate::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Convert an 8-bit style channel value (0-255) to the `[0, 1]` range.
///
/// Anything that is not strictly positive (including NaN) maps to 0.
/// Values above 255 are passed through unclamped.
#[inline]
pub fn color_ratio(channel: f64) -> f64 {
    if channel > 0.0 {
        channel / 255.0
    } else {
        0.0
    }
}

/// Convert a color to 8-bit display channels.
///
/// Each channel becomes `round(min(255, c * 255))`. Only the upper bound is
/// clamped explicitly; the float to `u8` cast saturates, so negative or NaN
/// channels end up as 0.
pub fn to_display_color(color: Color) -> [u8; 3] {
    [
        display_channel(color.x),
        display_channel(color.y),
        display_channel(color.z),
    ]
}

#[inline]
fn display_channel(c: f64) -> u8 {
    (c * 255.0).min(255.0).round() as u8
}
