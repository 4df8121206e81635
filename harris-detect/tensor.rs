use harris_core::{Buffer, StructureTensor};

use crate::error::HarrisResult;
use crate::ops::{combine_windowed, map};

/// Accumulates the windowed structure tensor for every pixel of a
/// derivative pair.
///
/// Each output tensor sums `Ix^2`, `Iy^2` and `Ix*Iy` over the odd
/// `structure_size` window centered on the pixel, reflecting coordinates at
/// the image edges. Every output pixel is computed independently from a
/// read-only window, so the accumulation is row-parallel.
pub fn structure_tensor_image(
    i_x: &Buffer<f32>,
    i_y: &Buffer<f32>,
    structure_size: usize,
) -> HarrisResult<Buffer<StructureTensor>> {
    combine_windowed(
        i_x,
        i_y,
        structure_size,
        |_, _| StructureTensor::default(),
        |s, gx, gy| StructureTensor::new(s.xx + gx * gx, s.yy + gy * gy, s.xy + gx * gy),
        |s| s,
    )
}

/// Scores every structure tensor with the Harris corner response
/// `det(S) - k * trace(S)^2`.
pub fn harris_response(tensors: &Buffer<StructureTensor>, k: f32) -> HarrisResult<Buffer<f32>> {
    map(tensors, move |s| s.det() - k * s.trace() * s.trace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_image_has_zero_tensors() {
        let i_x = Buffer::from_vec(4, 4, vec![0.0f32; 16]).unwrap();
        let i_y = Buffer::from_vec(4, 4, vec![0.0f32; 16]).unwrap();
        let tensors = structure_tensor_image(&i_x, &i_y, 3).unwrap();
        assert!(
            tensors
                .rows()
                .flatten()
                .all(|s| *s == StructureTensor::default())
        );
    }

    #[test]
    fn test_tensor_sums_derivative_products() {
        let i_x = Buffer::from_vec(3, 3, vec![2.0f32; 9]).unwrap();
        let i_y = Buffer::from_vec(3, 3, vec![3.0f32; 9]).unwrap();
        let tensors = structure_tensor_image(&i_x, &i_y, 3).unwrap();
        // 9 window pixels, each contributing 4, 9 and 6
        let tensor = tensors.get(1, 1);
        assert_eq!(tensor.xx, 36.0);
        assert_eq!(tensor.yy, 81.0);
        assert_eq!(tensor.xy, 54.0);
    }

    #[test]
    fn test_tensor_is_symmetric_in_xy() {
        let i_x = Buffer::from_vec(3, 1, vec![1.0f32, -2.0, 3.0]).unwrap();
        let i_y = Buffer::from_vec(3, 1, vec![4.0f32, 5.0, -6.0]).unwrap();
        let forward = structure_tensor_image(&i_x, &i_y, 1).unwrap();
        let swapped = structure_tensor_image(&i_y, &i_x, 1).unwrap();
        for (a, b) in forward.rows().flatten().zip(swapped.rows().flatten()) {
            assert_eq!(a.xx, b.yy);
            assert_eq!(a.yy, b.xx);
            assert_eq!(a.xy, b.xy);
        }
    }

    #[test]
    fn test_response_of_known_tensor() {
        let tensors = Buffer::from_vec(1, 1, vec![StructureTensor::new(2.0, 3.0, 1.0)]).unwrap();
        let response = harris_response(&tensors, 0.04).unwrap();
        // det = 5, trace = 5
        assert_eq!(response.get(0, 0), 5.0 - 0.04 * 25.0);
    }

    #[test]
    fn test_response_negative_on_edges() {
        // an edge has one dominant gradient direction: det ~ 0, trace large
        let tensors = Buffer::from_vec(1, 1, vec![StructureTensor::new(10.0, 0.0, 0.0)]).unwrap();
        let response = harris_response(&tensors, 0.04).unwrap();
        assert!(response.get(0, 0) < 0.0);
    }
}
