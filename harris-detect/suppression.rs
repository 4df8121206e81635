use harris_core::Buffer;

use crate::error::HarrisResult;
use crate::ops::{map_windowed, reduce};

/// Global maximum of a response buffer.
///
/// Seeded at zero, so an all-negative response map yields zero and the
/// derived threshold never goes negative.
pub fn max_response(response: &Buffer<f32>) -> f32 {
    reduce(response, 0.0f32, f32::max, f32::max)
}

/// Zeroes every response that is not the strict maximum of its window,
/// marking the survivors with 1.0.
///
/// A center below `threshold` is zeroed without inspecting its window.
/// Neighbors of equal value do not suppress each other, so a plateau of
/// tied maxima survives as multiple adjacent marked pixels. Survivors emit
/// 1.0 only for strictly positive responses; a blank image therefore stays
/// all-zero even though its threshold is 0.
pub fn non_max_suppression(
    response: &Buffer<f32>,
    window_size: usize,
    threshold: f32,
) -> HarrisResult<Buffer<f32>> {
    map_windowed(
        response,
        window_size,
        move |center| if center < threshold { 0.0f32 } else { center },
        |acc, neighbor| if neighbor > acc { 0.0 } else { acc },
        |acc| if acc > 0.0 { 1.0 } else { 0.0 },
    )
}
