use harris_core::{Argb32, Buffer, HarrisConfig, init_thread_pool};
use harris_detect::{HarrisDetector, HarrisError, to_luminance};

pub use harris_core::{self, Argb32 as HarrisArgb32, Buffer as HarrisBuffer, HarrisConfig as Config};
pub use harris_detect::{self, highlight_corners};

#[derive(Debug)]
pub enum CliError {
    Harris(HarrisError),
    Image(image::ImageError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Harris(e) => write!(f, "Harris error: {}", e),
            CliError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<HarrisError> for CliError {
    fn from(err: HarrisError) -> Self {
        CliError::Harris(err)
    }
}

impl From<image::ImageError> for CliError {
    fn from(err: image::ImageError) -> Self {
        CliError::Image(err)
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// High-level Harris corner detection facade that wires the configured
/// thread pool to a validated detector.
pub struct Harris {
    detector: HarrisDetector,
}

impl Harris {
    /// Create a new detector facade with the given configuration
    pub fn new(cfg: HarrisConfig) -> CliResult<Self> {
        // The global pool can only be built once per process; later
        // constructions fall back to the existing pool.
        let _ = init_thread_pool(cfg.n_threads);
        let detector = HarrisDetector::new(cfg)?;
        Ok(Self { detector })
    }

    /// Detect corners in a luminance buffer
    pub fn find_corners(&self, luminance: &Buffer<f32>) -> CliResult<Buffer<f32>> {
        Ok(self.detector.find_corners(luminance)?)
    }

    /// Convert a color buffer to luminance and detect corners in one step
    pub fn find_corners_argb(&self, image: &Buffer<Argb32>) -> CliResult<Buffer<f32>> {
        let luminance = to_luminance(image)?;
        self.find_corners(&luminance)
    }

    /// Collect the coordinates of every marked pixel of a binary corner map
    pub fn corner_points(corners: &Buffer<f32>) -> Vec<(usize, usize)> {
        let mut points = Vec::new();
        for (y, row) in corners.rows().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value > 0.0 {
                    points.push((x, y));
                }
            }
        }
        points
    }

    /// Get detector configuration
    pub fn config(&self) -> &HarrisConfig {
        self.detector.config()
    }
}

/// Pack a decoded RGBA image into an ARGB color buffer
pub fn buffer_from_rgba(img: &image::RgbaImage) -> CliResult<Buffer<Argb32>> {
    let (width, height) = img.dimensions();
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;
        pixels.push(Argb32::from_channels(a, r, g, b));
    }
    let buffer = Buffer::from_vec(width as usize, height as usize, pixels)
        .map_err(HarrisError::from)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_square_corner_image(size: usize, edge: usize) -> Buffer<f32> {
        let mut pixels = vec![0.0f32; size * size];
        for y in 0..=edge {
            for x in 0..=edge {
                pixels[y * size + x] = 1.0;
            }
        }
        Buffer::from_vec(size, size, pixels).unwrap()
    }

    #[test]
    fn test_facade_end_to_end() {
        let harris = Harris::new(HarrisConfig::default()).unwrap();
        let img = create_square_corner_image(32, 15);
        let corners = harris.find_corners(&img).unwrap();
        let points = Harris::corner_points(&corners);
        assert!(!points.is_empty());
        for &(x, y) in &points {
            assert!((15..=16).contains(&x) && (15..=16).contains(&y));
        }
    }

    #[test]
    fn test_facade_rejects_invalid_config() {
        let cfg = HarrisConfig {
            suppression_size: 8,
            ..HarrisConfig::default()
        };
        assert!(matches!(
            Harris::new(cfg),
            Err(CliError::Harris(HarrisError::InvalidSuppressionSize(8)))
        ));
    }

    #[test]
    fn test_facade_repeated_construction() {
        // the global thread pool survives; construction must keep working
        for _ in 0..3 {
            assert!(Harris::new(HarrisConfig::default()).is_ok());
        }
    }

    #[test]
    fn test_find_corners_argb_matches_luminance_path() {
        let harris = Harris::new(HarrisConfig::default()).unwrap();
        let gray = create_square_corner_image(24, 11);
        let color = harris_detect::to_display(&gray).unwrap();
        let via_color = harris.find_corners_argb(&color).unwrap();
        assert_eq!(via_color.width(), 24);
        assert!(via_color.rows().flatten().all(|&v| v == 0.0 || v == 1.0));
    }

    #[test]
    fn test_buffer_from_rgba_packs_channels() {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([0x11, 0x22, 0x33, 0x44]));
        img.put_pixel(1, 0, image::Rgba([0, 0, 0, 255]));
        let buffer = buffer_from_rgba(&img).unwrap();
        assert_eq!(buffer.get(0, 0).data, 0x44112233);
        assert_eq!(buffer.get(1, 0).data, 0xff000000);
    }

    #[test]
    fn test_corner_points_coordinates() {
        let corners = Buffer::from_vec(3, 2, vec![0.0f32, 1.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(Harris::corner_points(&corners), vec![(1, 0), (2, 1)]);
    }
}
