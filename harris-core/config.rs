#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable parameters for the Harris corner detection pipeline.
///
/// Every size is a full window width and must be a positive odd number so
/// the window has a well-defined center. Validation happens when a detector
/// is constructed, before any pixel processing begins.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HarrisConfig {
    /// Gaussian smoothing window size (odd, > 0).
    pub smoothing_size: usize,
    /// Structure tensor accumulation window size (odd, > 0).
    pub structure_size: usize,
    /// Non-maximal suppression window size (odd, > 0).
    pub suppression_size: usize,
    /// Harris response sensitivity constant (> 0).
    pub harris_k: f32,
    /// Fraction of the global maximum response used as the detection
    /// threshold (0 to 1). Detection sensitivity is therefore
    /// self-calibrating per image.
    pub threshold_ratio: f32,
    /// Worker threads for the row-parallel stages.
    pub n_threads: usize,
}

impl Default for HarrisConfig {
    fn default() -> Self {
        Self {
            smoothing_size: 5,
            structure_size: 5,
            suppression_size: 9,
            harris_k: 0.04,
            threshold_ratio: 0.5,
            n_threads: num_cpus::get().max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = HarrisConfig::default();
        assert_eq!(cfg.smoothing_size, 5);
        assert_eq!(cfg.structure_size, 5);
        assert_eq!(cfg.suppression_size, 9);
        assert_eq!(cfg.harris_k, 0.04);
        assert_eq!(cfg.threshold_ratio, 0.5);
        assert!(cfg.n_threads >= 1);
    }
}
