/// Identifies a single pixel coordinate.
///
/// Coordinates are signed so window arithmetic can step beyond the buffer
/// edges before [`reflect`] folds them back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An inclusive rectangular window of pixels from (x1, y1) to (x2, y2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Range {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The window of odd `size` centered on a pixel.
    pub fn centered(center: Point, size: i32) -> Self {
        let half = size / 2;
        Self::new(center.x - half, center.y - half, center.x + half, center.y + half)
    }
}

/// Maps an out-of-range value back into `[min, max]` by mirror reflection
/// about the nearest edge. In-range values pass through unchanged.
///
/// This is the sole out-of-bounds policy for every windowed operation; there
/// is no zero-pad or clip mode.
///
/// # Panics
///
/// Panics if a single reflection cannot bring the value back into range.
/// Every window used by the pipeline has a radius no larger than the buffer
/// dimension, so such a request is a caller logic defect rather than a
/// recoverable condition.
pub fn reflect(value: i32, min: i32, max: i32) -> i32 {
    if value > max {
        let reflected = max + max - value;
        if reflected < min {
            panic!("value {value} is too large to be reflected into [{min}, {max}]");
        }
        return reflected;
    }

    if value < min {
        let reflected = min + min - value;
        if reflected > max {
            panic!("value {value} is too small to be reflected into [{min}, {max}]");
        }
        return reflected;
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reflect_in_range_is_identity() {
        for value in 0..=9 {
            assert_eq!(reflect(value, 0, 9), value);
        }
    }

    #[test]
    fn test_reflect_beyond_max() {
        assert_eq!(reflect(10, 0, 9), 8);
        assert_eq!(reflect(12, 0, 9), 6);
    }

    #[test]
    fn test_reflect_below_min() {
        assert_eq!(reflect(-1, 0, 9), 1);
        assert_eq!(reflect(-3, 0, 9), 3);
    }

    #[test]
    fn test_reflect_nonzero_min() {
        assert_eq!(reflect(1, 2, 5), 3);
        assert_eq!(reflect(7, 2, 5), 3);
    }

    #[test]
    #[should_panic(expected = "too large to be reflected")]
    fn test_reflect_unsatisfiable_above() {
        reflect(100, 0, 9);
    }

    #[test]
    #[should_panic(expected = "too small to be reflected")]
    fn test_reflect_unsatisfiable_below() {
        reflect(-100, 0, 9);
    }

    #[test]
    fn test_range_centered() {
        let range = Range::centered(Point::new(10, 20), 5);
        assert_eq!(range, Range::new(8, 18, 12, 22));
    }

    #[test]
    fn test_range_centered_size_one() {
        let range = Range::centered(Point::new(3, 4), 1);
        assert_eq!(range, Range::new(3, 4, 3, 4));
    }

    #[test]
    fn test_point_fields() {
        let point = Point::new(-2, 7);
        assert_eq!(point.x, -2);
        assert_eq!(point.y, 7);
    }

    proptest! {
        #[test]
        fn prop_reflect_idempotent_in_range(value in 0i32..1000, max in 0i32..1000) {
            prop_assume!(value <= max);
            prop_assert_eq!(reflect(value, 0, max), value);
        }

        #[test]
        fn prop_reflect_lands_in_range(value in -100i32..200, max in 100i32..200) {
            let reflected = reflect(value, 0, max);
            prop_assert!(reflected >= 0 && reflected <= max);
        }
    }
}
