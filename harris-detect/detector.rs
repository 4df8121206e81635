use harris_core::{Buffer, HarrisConfig};

use crate::error::{HarrisError, HarrisResult};
use crate::filter::{FilterKernel, filter_2d};
use crate::kernels::{diff_x_kernel, diff_y_kernel, gaussian_kernel};
use crate::suppression::{max_response, non_max_suppression};
use crate::tensor::{harris_response, structure_tensor_image};

/// Backend interface: detect corners in a luminance buffer.
///
/// The returned buffer has the same dimensions as the input and contains
/// only 0.0 and 1.0, with 1.0 marking a detected corner. Alternate backends
/// (reference or accelerated implementations) adapt to this one operation.
pub trait CornerDetector {
    fn find_corners(&self, luminance: &Buffer<f32>) -> HarrisResult<Buffer<f32>>;
}

pub(crate) fn validate_config(cfg: &HarrisConfig) -> HarrisResult<()> {
    if cfg.smoothing_size == 0 || cfg.smoothing_size % 2 == 0 {
        return Err(HarrisError::InvalidSmoothingSize(cfg.smoothing_size));
    }
    if cfg.structure_size == 0 || cfg.structure_size % 2 == 0 {
        return Err(HarrisError::InvalidStructureSize(cfg.structure_size));
    }
    if cfg.suppression_size == 0 || cfg.suppression_size % 2 == 0 {
        return Err(HarrisError::InvalidSuppressionSize(cfg.suppression_size));
    }
    if cfg.harris_k <= 0.0 || cfg.harris_k.is_nan() {
        return Err(HarrisError::InvalidHarrisK(cfg.harris_k));
    }
    if !(0.0..=1.0).contains(&cfg.threshold_ratio) {
        return Err(HarrisError::InvalidThresholdRatio(cfg.threshold_ratio));
    }
    Ok(())
}

/// Harris corner detector.
///
/// Every pipeline parameter is validated when the detector is constructed,
/// so a detection call can only fail on mismatched buffer dimensions inside
/// the engine, never on configuration.
pub struct HarrisDetector {
    cfg: HarrisConfig,
    smoothing_kernel: FilterKernel,
}

impl HarrisDetector {
    /// Creates a new Harris detector with validation.
    pub fn new(cfg: HarrisConfig) -> HarrisResult<Self> {
        validate_config(&cfg)?;
        let smoothing_kernel = gaussian_kernel(cfg.smoothing_size)?;
        Ok(Self {
            cfg,
            smoothing_kernel,
        })
    }

    /// Get detector configuration
    pub fn config(&self) -> &HarrisConfig {
        &self.cfg
    }

    /// Runs the detection pipeline on a luminance buffer.
    ///
    /// The pipeline is linear: gaussian smoothing, horizontal and vertical
    /// first differences, windowed structure tensor accumulation, Harris
    /// response scoring, then non-maximal suppression against a threshold of
    /// `threshold_ratio` times the global maximum response. Each invocation
    /// processes one full image independently and owns every intermediate
    /// buffer; repeated runs on the same input are bit-identical.
    pub fn find_corners(&self, luminance: &Buffer<f32>) -> HarrisResult<Buffer<f32>> {
        let smoothed = filter_2d(luminance, &self.smoothing_kernel)?;
        let i_x = filter_2d(&smoothed, &diff_x_kernel())?;
        let i_y = filter_2d(&smoothed, &diff_y_kernel())?;
        let tensors = structure_tensor_image(&i_x, &i_y, self.cfg.structure_size)?;
        let response = harris_response(&tensors, self.cfg.harris_k)?;
        let threshold = max_response(&response) * self.cfg.threshold_ratio;
        non_max_suppression(&response, self.cfg.suppression_size, threshold)
    }
}

impl CornerDetector for HarrisDetector {
    fn find_corners(&self, luminance: &Buffer<f32>) -> HarrisResult<Buffer<f32>> {
        HarrisDetector::find_corners(self, luminance)
    }
}
