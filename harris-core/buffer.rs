use rayon::prelude::*;

use crate::pixel::Pixel;

#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    InvalidDimensions { width: usize, height: usize },
    InvalidStride { stride: usize, min: usize },
    MisalignedStride { stride: usize, pixel_size: usize },
    InvalidDataLength { expected: usize, actual: usize },
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::InvalidDimensions { width, height } => {
                write!(f, "Invalid buffer dimensions: {}x{} (must be > 0)", width, height)
            }
            BufferError::InvalidStride { stride, min } => {
                write!(f, "Stride {} is not large enough to fit a row ({} bytes minimum)", stride, min)
            }
            BufferError::MisalignedStride { stride, pixel_size } => {
                write!(f, "Stride {} is not a multiple of the pixel size {}", stride, pixel_size)
            }
            BufferError::InvalidDataLength { expected, actual } => {
                write!(f, "Buffer data length mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for BufferError {}

pub type BufferResult<T> = Result<T, BufferError>;

/// A rectangular, row-major pixel buffer with an explicit row stride.
///
/// `stride` is measured in bytes and may exceed the minimum `width *
/// P::BYTES`, e.g. for frames whose rows carry alignment padding. Padding
/// elements are zero and never read by any operator. Rows are independently
/// addressable, which is what the row-parallel operators rely on.
///
/// Buffers move by value between pipeline stages; no stage mutates its
/// input. `Clone` is a deep copy of the pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer<P: Pixel> {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<P>,
}

impl<P: Pixel> Buffer<P> {
    /// Creates a zero-filled buffer with a tight stride.
    pub fn new(width: usize, height: usize) -> BufferResult<Self> {
        Self::validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            stride: width * P::BYTES,
            data: vec![P::default(); width * height],
        })
    }

    /// Creates a buffer that takes ownership of exactly `width * height`
    /// pixels, with a tight stride.
    pub fn from_vec(width: usize, height: usize, data: Vec<P>) -> BufferResult<Self> {
        Self::validate_dimensions(width, height)?;
        if data.len() != width * height {
            return Err(BufferError::InvalidDataLength {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride: width * P::BYTES,
            data,
        })
    }

    /// Decodes a buffer from little-endian pixel bytes with an explicit byte
    /// stride, as handed over by an external decoder. The supplied stride is
    /// preserved; the byte slice must hold at least `stride * height` bytes.
    pub fn from_bytes(bytes: &[u8], width: usize, height: usize, stride: usize) -> BufferResult<Self> {
        Self::validate_dimensions(width, height)?;
        if stride % P::BYTES != 0 {
            return Err(BufferError::MisalignedStride {
                stride,
                pixel_size: P::BYTES,
            });
        }
        if stride < width * P::BYTES {
            return Err(BufferError::InvalidStride {
                stride,
                min: width * P::BYTES,
            });
        }
        if bytes.len() < stride * height {
            return Err(BufferError::InvalidDataLength {
                expected: stride * height,
                actual: bytes.len(),
            });
        }

        let row_elems = stride / P::BYTES;
        let mut data = vec![P::default(); row_elems * height];
        for y in 0..height {
            let row_bytes = &bytes[y * stride..];
            for x in 0..width {
                data[y * row_elems + x] = P::from_le_bytes(&row_bytes[x * P::BYTES..(x + 1) * P::BYTES]);
            }
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    fn validate_dimensions(width: usize, height: usize) -> BufferResult<()> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    #[inline]
    fn row_elems(&self) -> usize {
        self.stride / P::BYTES
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> P {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of range for {}x{} buffer",
            self.width,
            self.height
        );
        self.data[y * self.row_elems() + x]
    }

    /// The pixels of row `y`, exactly `width` long.
    pub fn row(&self, y: usize) -> &[P] {
        let start = y * self.row_elems();
        &self.data[start..start + self.width]
    }

    /// Sequential iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
        let width = self.width;
        self.data.chunks_exact(self.row_elems()).map(move |row| &row[..width])
    }

    /// Parallel iterator over rows.
    pub fn par_rows(&self) -> impl IndexedParallelIterator<Item = &[P]> + '_ {
        let width = self.width;
        self.data
            .par_chunks_exact(self.row_elems())
            .map(move |row| &row[..width])
    }

    /// Parallel iterator over mutable rows. Each row is a private output
    /// slice, so no two worker tasks ever share memory.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [P]> + '_ {
        let width = self.width;
        let row_elems = self.stride / P::BYTES;
        self.data
            .par_chunks_exact_mut(row_elems)
            .map(move |row| &mut row[..width])
    }
}
