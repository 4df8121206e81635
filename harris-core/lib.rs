pub mod buffer;
pub mod config;
pub mod geometry;
pub mod pixel;

pub use buffer::{Buffer, BufferError, BufferResult};
pub use config::HarrisConfig;
pub use geometry::{Point, Range, reflect};
pub use pixel::{Argb32, Pixel, StructureTensor};

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}
