//! The windowed operator library.
//!
//! Every operator here iterates output rows independently and writes only
//! its private row slice, so the whole library is safe for unrestricted
//! row-level parallelism. Per-pixel functions are pure and allocation-free;
//! out-of-range window coordinates are resolved by mirror reflection.

use harris_core::{Buffer, Pixel, Point, Range, reflect};
use rayon::prelude::*;

use crate::error::{HarrisError, HarrisResult};

fn check_same_size<P1: Pixel, P2: Pixel>(src1: &Buffer<P1>, src2: &Buffer<P2>) -> HarrisResult<()> {
    if src1.width() != src2.width() || src1.height() != src2.height() {
        return Err(HarrisError::BufferSizeMismatch {
            width1: src1.width(),
            height1: src1.height(),
            width2: src2.width(),
            height2: src2.height(),
        });
    }
    Ok(())
}

fn check_window(window_size: usize) -> HarrisResult<()> {
    if window_size == 0 || window_size % 2 == 0 {
        return Err(HarrisError::InvalidWindowSize(window_size));
    }
    Ok(())
}

/// Maps every pixel of `src` through `f`, producing a same-sized buffer of a
/// possibly different element type.
pub fn map<P, Q, F>(src: &Buffer<P>, f: F) -> HarrisResult<Buffer<Q>>
where
    P: Pixel,
    Q: Pixel,
    F: Fn(P) -> Q + Send + Sync,
{
    let mut dest = Buffer::new(src.width(), src.height())?;
    src.par_rows()
        .zip(dest.par_rows_mut())
        .for_each(|(src_row, dest_row)| {
            for (out, &pixel) in dest_row.iter_mut().zip(src_row) {
                *out = f(pixel);
            }
        });
    Ok(dest)
}

/// Maps corresponding pixels of two equally-sized buffers through `f`.
pub fn combine<P1, P2, Q, F>(src1: &Buffer<P1>, src2: &Buffer<P2>, f: F) -> HarrisResult<Buffer<Q>>
where
    P1: Pixel,
    P2: Pixel,
    Q: Pixel,
    F: Fn(P1, P2) -> Q + Send + Sync,
{
    check_same_size(src1, src2)?;
    let mut dest = Buffer::new(src1.width(), src1.height())?;
    src1.par_rows()
        .zip(src2.par_rows())
        .zip(dest.par_rows_mut())
        .for_each(|((row1, row2), dest_row)| {
            for ((out, &a), &b) in dest_row.iter_mut().zip(row1).zip(row2) {
                *out = f(a, b);
            }
        });
    Ok(dest)
}

/// Folds every pixel of `src` into a single accumulator.
///
/// Rows fold sequentially; per-row partials are joined in unspecified order,
/// so `fold` and `join` must tolerate any visitation order (a global
/// maximum qualifies).
pub fn reduce<P, A, F, J>(src: &Buffer<P>, init: A, fold: F, join: J) -> A
where
    P: Pixel,
    A: Clone + Send + Sync,
    F: Fn(A, P) -> A + Send + Sync,
    J: Fn(A, A) -> A + Send + Sync,
{
    src.par_rows()
        .map(|row| row.iter().fold(init.clone(), |acc, &pixel| fold(acc, pixel)))
        .reduce(|| init.clone(), join)
}

/// Sequentially folds every pixel of an inclusive window into `init`,
/// reflecting out-of-range coordinates back into the buffer.
///
/// This is the building block every per-pixel windowed computation runs in
/// its inner loop; the caller provides the row-level parallelism.
pub fn reduce_range<P, A, F>(src: &Buffer<P>, range: Range, init: A, fold: F) -> A
where
    P: Pixel,
    F: Fn(A, P) -> A,
{
    let max_x = src.width() as i32 - 1;
    let max_y = src.height() as i32 - 1;
    let mut acc = init;
    for y in range.y1..=range.y2 {
        let row = src.row(reflect(y, 0, max_y) as usize);
        for x in range.x1..=range.x2 {
            acc = fold(acc, row[reflect(x, 0, max_x) as usize]);
        }
    }
    acc
}

/// Two-source form of [`reduce_range`], folding corresponding pixels of two
/// equally-sized buffers.
pub fn reduce_range2<P1, P2, A, F>(
    src1: &Buffer<P1>,
    src2: &Buffer<P2>,
    range: Range,
    init: A,
    fold: F,
) -> A
where
    P1: Pixel,
    P2: Pixel,
    F: Fn(A, P1, P2) -> A,
{
    let max_x = src1.width() as i32 - 1;
    let max_y = src1.height() as i32 - 1;
    let mut acc = init;
    for y in range.y1..=range.y2 {
        let safe_y = reflect(y, 0, max_y) as usize;
        let row1 = src1.row(safe_y);
        let row2 = src2.row(safe_y);
        for x in range.x1..=range.x2 {
            let safe_x = reflect(x, 0, max_x) as usize;
            acc = fold(acc, row1[safe_x], row2[safe_x]);
        }
    }
    acc
}

/// For each output pixel: seed an accumulator from the center pixel, fold
/// the odd window around it (reflected at the edges), then finalize the
/// accumulator into the output value.
pub fn map_windowed<P, Q, A, S, F, G>(
    src: &Buffer<P>,
    window_size: usize,
    seed: S,
    fold: F,
    finish: G,
) -> HarrisResult<Buffer<Q>>
where
    P: Pixel,
    Q: Pixel,
    S: Fn(P) -> A + Send + Sync,
    F: Fn(A, P) -> A + Send + Sync,
    G: Fn(A) -> Q + Send + Sync,
{
    check_window(window_size)?;
    let size = window_size as i32;
    let mut dest = Buffer::new(src.width(), src.height())?;
    dest.par_rows_mut().enumerate().for_each(|(y, dest_row)| {
        let src_row = src.row(y);
        for (x, out) in dest_row.iter_mut().enumerate() {
            let acc = seed(src_row[x]);
            let center = Point::new(x as i32, y as i32);
            let acc = reduce_range(src, Range::centered(center, size), acc, &fold);
            *out = finish(acc);
        }
    });
    Ok(dest)
}

/// Two-source form of [`map_windowed`]: for each output pixel, folds the
/// window around the corresponding pixel pair of two equally-sized buffers.
pub fn combine_windowed<P1, P2, Q, A, S, F, G>(
    src1: &Buffer<P1>,
    src2: &Buffer<P2>,
    window_size: usize,
    seed: S,
    fold: F,
    finish: G,
) -> HarrisResult<Buffer<Q>>
where
    P1: Pixel,
    P2: Pixel,
    Q: Pixel,
    S: Fn(P1, P2) -> A + Send + Sync,
    F: Fn(A, P1, P2) -> A + Send + Sync,
    G: Fn(A) -> Q + Send + Sync,
{
    check_same_size(src1, src2)?;
    check_window(window_size)?;
    let size = window_size as i32;
    let mut dest = Buffer::new(src1.width(), src1.height())?;
    dest.par_rows_mut().enumerate().for_each(|(y, dest_row)| {
        let row1 = src1.row(y);
        let row2 = src2.row(y);
        for (x, out) in dest_row.iter_mut().enumerate() {
            let acc = seed(row1[x], row2[x]);
            let center = Point::new(x as i32, y as i32);
            let acc = reduce_range2(src1, src2, Range::centered(center, size), acc, &fold);
            *out = finish(acc);
        }
    });
    Ok(dest)
}
