use crate::error::{HarrisError, HarrisResult};
use crate::filter::FilterKernel;

/// Weights of the first-difference kernels, in correlation orientation.
const DIFF_WEIGHTS: [f32; 3] = [1.0, 0.0, -1.0];

/// 3x1 horizontal first-difference kernel.
///
/// Applied to an already-smoothed buffer; smoothing and differentiation are
/// two separate filter passes, not one combined Sobel kernel, which affects
/// values near the boundary (two reflection passes instead of one).
pub fn diff_x_kernel() -> FilterKernel {
    FilterKernel::from_const(3, 1, &DIFF_WEIGHTS)
}

/// 1x3 vertical first-difference kernel.
pub fn diff_y_kernel() -> FilterKernel {
    FilterKernel::from_const(1, 3, &DIFF_WEIGHTS)
}

/// Creates a normalized gaussian kernel with the given odd size.
///
/// Sigma is derived from the size as `(size - 1) / 4`, which places roughly
/// 95% of the gaussian's mass inside the window (68-95-99.7 rule). The
/// weights are divided by their sum so the kernel preserves the DC level of
/// whatever it filters. A size of 1 degenerates to the identity kernel.
pub fn gaussian_kernel(size: usize) -> HarrisResult<FilterKernel> {
    if size == 0 || size % 2 == 0 {
        return Err(HarrisError::InvalidKernelSize {
            width: size,
            height: size,
        });
    }
    if size == 1 {
        return FilterKernel::new(1, 1, vec![1.0]);
    }

    let sigma = (size as f32 - 1.0) / 4.0;
    let offset = (size / 2) as i32;

    let mut values = Vec::with_capacity(size * size);
    let mut sum = 0.0f32;
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let x_f = (x - offset) as f32;
            let y_f = (y - offset) as f32;
            let value = (-(x_f * x_f + y_f * y_f) / (2.0 * sigma * sigma)).exp();
            sum += value;
            values.push(value);
        }
    }

    for value in values.iter_mut() {
        *value /= sum;
    }

    FilterKernel::new(size, size, values)
}
