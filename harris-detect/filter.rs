use harris_core::{Buffer, reflect};
use rayon::prelude::*;

use crate::error::{HarrisError, HarrisResult};

/// 2d cross-correlation kernel used by [`filter_2d`].
///
/// Width and height are both positive and odd, which guarantees a
/// well-defined center cell and a symmetric window.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterKernel {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl FilterKernel {
    /// Creates a kernel from raster-scan weights. Fails if either dimension
    /// is even or zero, or if the weight count is not `width * height`.
    pub fn new(width: usize, height: usize, values: Vec<f32>) -> HarrisResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(HarrisError::InvalidKernelSize { width, height });
        }
        if values.len() != width * height {
            return Err(HarrisError::InvalidKernelData {
                expected_len: width * height,
                actual_len: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data: values,
        })
    }

    /// Construction path for compile-time constant kernels whose shape is
    /// already known to be valid.
    pub(crate) fn from_const(width: usize, height: usize, values: &[f32]) -> Self {
        debug_assert!(width % 2 == 1 && height % 2 == 1 && values.len() == width * height);
        Self {
            width,
            height,
            data: values.to_vec(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The weights of row `y`.
    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// All weights in raster-scan order.
    pub fn weights(&self) -> &[f32] {
        &self.data
    }
}

/// Runs a 2d cross-correlation filter over a buffer.
///
/// The output has the same dimensions as the input; pixels beyond the edge
/// are read from the mirror reflection of the edge rows and columns. The
/// kernel is not flipped (correlation, not convolution), which is exact for
/// the symmetric and explicitly-oriented kernels this pipeline uses.
///
/// Each output row is computed independently from a pure read of the source,
/// so rows are distributed across worker threads with no synchronization.
pub fn filter_2d(src: &Buffer<f32>, kernel: &FilterKernel) -> HarrisResult<Buffer<f32>> {
    let max_x = src.width() as i32 - 1;
    let max_y = src.height() as i32 - 1;
    let x_offset = (kernel.width() / 2) as i32;
    let y_offset = (kernel.height() / 2) as i32;

    let mut dest = Buffer::new(src.width(), src.height())?;
    dest.par_rows_mut().enumerate().for_each(|(dest_y, dest_row)| {
        for (dest_x, out) in dest_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for kernel_y in 0..kernel.height() {
                let src_y = reflect(dest_y as i32 + kernel_y as i32 - y_offset, 0, max_y);
                let src_row = src.row(src_y as usize);
                let kernel_row = kernel.row(kernel_y);
                for (kernel_x, &weight) in kernel_row.iter().enumerate() {
                    let src_x = reflect(dest_x as i32 + kernel_x as i32 - x_offset, 0, max_x);
                    acc += src_row[src_x as usize] * weight;
                }
            }
            *out = acc;
        }
    });

    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_kernel_rejects_even_dimensions() {
        assert!(matches!(
            FilterKernel::new(2, 3, vec![0.0; 6]),
            Err(HarrisError::InvalidKernelSize { width: 2, height: 3 })
        ));
        assert!(matches!(
            FilterKernel::new(3, 4, vec![0.0; 12]),
            Err(HarrisError::InvalidKernelSize { .. })
        ));
    }

    #[test]
    fn test_kernel_rejects_zero_dimensions() {
        assert!(matches!(
            FilterKernel::new(0, 1, vec![]),
            Err(HarrisError::InvalidKernelSize { .. })
        ));
    }

    #[test]
    fn test_kernel_rejects_wrong_weight_count() {
        assert!(matches!(
            FilterKernel::new(3, 3, vec![0.0; 8]),
            Err(HarrisError::InvalidKernelData { expected_len: 9, actual_len: 8 })
        ));
    }

    #[test]
    fn test_kernel_row_access() {
        let kernel = FilterKernel::new(3, 3, (0..9).map(|v| v as f32).collect()).unwrap();
        assert_eq!(kernel.row(0), &[0.0, 1.0, 2.0]);
        assert_eq!(kernel.row(2), &[6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_identity_kernel_copies_buffer() {
        let src = Buffer::from_vec(3, 3, (0..9).map(|v| v as f32).collect()).unwrap();
        let kernel = FilterKernel::new(1, 1, vec![1.0]).unwrap();
        let dest = filter_2d(&src, &kernel).unwrap();
        assert_eq!(dest, src);
    }

    #[test]
    fn test_filter_interior_weighted_sum() {
        let src = Buffer::from_vec(3, 3, (0..9).map(|v| v as f32).collect()).unwrap();
        // box kernel sums the full 3x3 neighborhood
        let kernel = FilterKernel::new(3, 3, vec![1.0; 9]).unwrap();
        let dest = filter_2d(&src, &kernel).unwrap();
        assert_eq!(dest.get(1, 1), 36.0);
    }

    #[test]
    fn test_filter_reflects_at_corner() {
        let src = Buffer::from_vec(3, 3, (0..9).map(|v| v as f32).collect()).unwrap();
        let kernel = FilterKernel::new(3, 3, vec![1.0; 9]).unwrap();
        let dest = filter_2d(&src, &kernel).unwrap();
        // window at (0, 0) visits rows [1, 0, 1] and columns [1, 0, 1]
        let expected = (4.0 + 3.0 + 4.0) + (1.0 + 0.0 + 1.0) + (4.0 + 3.0 + 4.0);
        assert_eq!(dest.get(0, 0), expected);
    }

    #[test]
    fn test_correlation_orientation_is_not_flipped() {
        // an asymmetric 3x1 kernel must read left-minus-right, not flipped
        let src = Buffer::from_vec(3, 1, vec![5.0f32, 7.0, 11.0]).unwrap();
        let kernel = FilterKernel::new(3, 1, vec![1.0, 0.0, -1.0]).unwrap();
        let dest = filter_2d(&src, &kernel).unwrap();
        assert_eq!(dest.get(1, 0), 5.0 - 11.0);
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let src = Buffer::<f32>::new(7, 4).unwrap();
        let kernel = FilterKernel::new(3, 3, vec![1.0; 9]).unwrap();
        let dest = filter_2d(&src, &kernel).unwrap();
        assert_eq!(dest.width(), 7);
        assert_eq!(dest.height(), 4);
    }

    proptest! {
        #[test]
        fn prop_normalized_kernel_preserves_constant(
            width in 3usize..12,
            height in 3usize..12,
            value in -10.0f32..10.0,
            half in 0usize..2,
        ) {
            // DC-gain invariant: a unit-sum kernel reproduces a constant buffer
            let size = 2 * half + 1;
            let weight = 1.0 / (size * size) as f32;
            let kernel = FilterKernel::new(size, size, vec![weight; size * size]).unwrap();
            let src = Buffer::from_vec(width, height, vec![value; width * height]).unwrap();
            let dest = filter_2d(&src, &kernel).unwrap();
            for row in dest.rows() {
                for &pixel in row {
                    prop_assert!((pixel - value).abs() < 1e-4);
                }
            }
        }
    }
}
