use harris_core::BufferError;

#[derive(Debug, Clone, PartialEq)]
pub enum HarrisError {
    Buffer(BufferError),
    BufferSizeMismatch { width1: usize, height1: usize, width2: usize, height2: usize },
    InvalidWindowSize(usize),
    InvalidKernelSize { width: usize, height: usize },
    InvalidKernelData { expected_len: usize, actual_len: usize },
    InvalidSmoothingSize(usize),
    InvalidStructureSize(usize),
    InvalidSuppressionSize(usize),
    InvalidHarrisK(f32),
    InvalidThresholdRatio(f32),
}

impl std::fmt::Display for HarrisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarrisError::Buffer(e) => write!(f, "Buffer error: {}", e),
            HarrisError::BufferSizeMismatch { width1, height1, width2, height2 } => {
                write!(f, "Buffer size mismatch: {}x{} vs {}x{}", width1, height1, width2, height2)
            }
            HarrisError::InvalidWindowSize(size) => {
                write!(f, "Invalid window size: {} (must be a positive odd number)", size)
            }
            HarrisError::InvalidKernelSize { width, height } => {
                write!(f, "Invalid kernel dimensions: {}x{} (both must be positive odd numbers)", width, height)
            }
            HarrisError::InvalidKernelData { expected_len, actual_len } => {
                write!(f, "Kernel weight count mismatch: expected {}, got {}", expected_len, actual_len)
            }
            HarrisError::InvalidSmoothingSize(size) => {
                write!(f, "Invalid smoothing size: {} (must be a positive odd number)", size)
            }
            HarrisError::InvalidStructureSize(size) => {
                write!(f, "Invalid structure size: {} (must be a positive odd number)", size)
            }
            HarrisError::InvalidSuppressionSize(size) => {
                write!(f, "Invalid suppression size: {} (must be a positive odd number)", size)
            }
            HarrisError::InvalidHarrisK(k) => {
                write!(f, "Invalid harris_k: {} (must be positive)", k)
            }
            HarrisError::InvalidThresholdRatio(ratio) => {
                write!(f, "Invalid threshold ratio: {} (must be between 0 and 1)", ratio)
            }
        }
    }
}

impl std::error::Error for HarrisError {}

impl From<BufferError> for HarrisError {
    fn from(err: BufferError) -> Self {
        HarrisError::Buffer(err)
    }
}

pub type HarrisResult<T> = Result<T, HarrisError>;
