use harris_core::{Argb32, Buffer};

use crate::error::HarrisResult;
use crate::ops::{combine, map};

/// Rec.709 luma weights, as used for sRGB content.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Converts a color buffer to a single-channel luminance buffer.
pub fn to_luminance(src: &Buffer<Argb32>) -> HarrisResult<Buffer<f32>> {
    map(src, |pixel| {
        pixel.red_float() * LUMA_R + pixel.green_float() * LUMA_G + pixel.blue_float() * LUMA_B
    })
}

/// Renders a single-channel buffer as an opaque grayscale color buffer.
pub fn to_display(src: &Buffer<f32>) -> HarrisResult<Buffer<Argb32>> {
    map(src, |value| Argb32::from_unit_floats(1.0, value, value, value))
}

/// Paints every marked pixel of a binary corner map solid red on top of the
/// source color buffer, passing unmarked pixels through.
pub fn highlight_corners(
    image: &Buffer<Argb32>,
    corners: &Buffer<f32>,
) -> HarrisResult<Buffer<Argb32>> {
    combine(image, corners, |pixel, corner| {
        if corner > 0.0 {
            Argb32::from_channels(255, 255, 0, 0)
        } else {
            pixel
        }
    })
}
