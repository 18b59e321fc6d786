// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape, stride and index arithmetic.
//!
//! Shapes, indices and strides are plain slices of [`Ix`]. All strides
//! produced here are row-major (C order): the last axis varies fastest.

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::Ix;

/// Compute the size of the shape (number of elements).
///
/// The shape must have at least one axis; use [`size_of_shape_checked`] to
/// validate a shape coming from a caller.
#[inline]
pub fn size_of_shape(shape: &[Ix]) -> Ix {
    debug_assert!(!shape.is_empty(), "size_of_shape: empty shape");
    shape.iter().product()
}

/// Compute the size of the shape while validating it.
///
/// **Errors** with `InvalidShape` if the shape is empty or has an axis of
/// length zero, and with `DimensionTooLarge` if the product overflows
/// `usize`.
pub fn size_of_shape_checked(shape: &[Ix]) -> Result<Ix, ShapeError> {
    if shape.is_empty() || shape.contains(&0) {
        return Err(from_kind(ErrorKind::InvalidShape));
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &n| acc.checked_mul(n))
        .ok_or_else(|| from_kind(ErrorKind::DimensionTooLarge))
}

/// Compute the row-major strides of `shape`.
///
/// Shape (a, b, c) => strides (b * c, c, 1)
pub fn default_strides(shape: &[Ix]) -> Vec<Ix> {
    let mut strides = vec![1; shape.len()];
    let mut cum_prod = 1;
    for (s, &n) in strides.iter_mut().rev().zip(shape.iter().rev()) {
        *s = cum_prod;
        cum_prod *= n;
    }
    strides
}

/// Convert the coordinate `index` into a linear offset using `strides`.
///
/// No bounds checking is done; the caller guarantees `index[i] < shape[i]`.
#[inline]
pub fn sub2ind(strides: &[Ix], index: &[Ix]) -> Ix {
    debug_assert_eq!(strides.len(), index.len());
    strides.iter().zip(index).map(|(&s, &i)| s * i).sum()
}

/// Convert the linear offset `k` into a coordinate, written into `index`.
///
/// The axes are peeled off most-significant first. For row-major strides of
/// a shape this is the inverse of [`sub2ind`] on `[0, size)`.
///
/// ```
/// use ndcell::dimension::{default_strides, ind2sub, sub2ind};
///
/// let strides = default_strides(&[2, 3, 4]);
/// let mut index = [0; 3];
/// assert_eq!(ind2sub(&strides, 17, &mut index), &[1, 1, 1]);
/// assert_eq!(sub2ind(&strides, &index), 17);
/// ```
pub fn ind2sub<'a>(strides: &[Ix], mut k: Ix, index: &'a mut [Ix]) -> &'a [Ix] {
    debug_assert_eq!(strides.len(), index.len());
    for (ix, &s) in index.iter_mut().zip(strides) {
        *ix = k / s;
        k -= s * *ix;
    }
    index
}

/// Write the coordinate of the last element of `shape` into `end`.
pub fn last_index(shape: &[Ix], end: &mut [Ix]) {
    assert_eq!(shape.len(), end.len(), "last_index: rank mismatch");
    for (e, &n) in end.iter_mut().zip(shape) {
        *e = n - 1;
    }
}

/// Advance `index` to the next coordinate of `shape` in row-major order.
///
/// Return `false` (leaving `index` at all zeros) when it wraps past the
/// last element.
#[inline]
pub fn next_index(shape: &[Ix], index: &mut [Ix]) -> bool {
    for (&n, ix) in shape.iter().zip(index.iter_mut()).rev() {
        *ix += 1;
        if *ix == n {
            *ix = 0;
        } else {
            return true;
        }
    }
    false
}

/// Check that the region `shape` placed at `start` fits inside
/// `parent_shape`, with the region's axes aligned to the parent's trailing
/// axes.
pub(crate) fn can_view(parent_shape: &[Ix], start: &[Ix], shape: &[Ix]) -> Result<(), ShapeError> {
    size_of_shape_checked(shape)?;
    let ndim = parent_shape.len();
    if start.len() != ndim || shape.len() > ndim {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    if start.iter().zip(parent_shape).any(|(&i, &n)| i >= n) {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    let lead = ndim - shape.len();
    for ((&i, &n), &m) in start[lead..].iter().zip(&parent_shape[lead..]).zip(shape) {
        if i + m > n {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
    }
    Ok(())
}

/// Return `true` if `strides` are the row-major strides of `shape`, where
/// axes of length 1 may have any stride.
pub(crate) fn is_standard_strides(shape: &[Ix], strides: &[Ix]) -> bool {
    let defaults = default_strides(shape);
    if strides == &defaults[..] {
        return true;
    }
    shape
        .iter()
        .zip(strides.iter().zip(&defaults))
        .all(|(&n, (&s, &ds))| n == 1 || s == ds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_are_row_major() {
        assert_eq!(default_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(default_strides(&[5]), vec![1]);
        assert_eq!(default_strides(&[3, 1, 2]), vec![2, 2, 1]);
    }

    #[test]
    fn size_checked() {
        assert_eq!(size_of_shape_checked(&[2, 3]), Ok(6));
        assert_eq!(size_of_shape_checked(&[]).unwrap_err().kind(), ErrorKind::InvalidShape);
        assert_eq!(size_of_shape_checked(&[2, 0]).unwrap_err().kind(), ErrorKind::InvalidShape);
        assert_eq!(
            size_of_shape_checked(&[usize::MAX, 2]).unwrap_err().kind(),
            ErrorKind::DimensionTooLarge
        );
    }

    #[test]
    fn ind2sub_inverts_sub2ind() {
        let shape = [3, 1, 4];
        let strides = default_strides(&shape);
        let mut index = [0; 3];
        for k in 0..size_of_shape(&shape) {
            ind2sub(&strides, k, &mut index);
            assert_eq!(sub2ind(&strides, &index), k);
        }
    }

    #[test]
    fn next_index_walks_row_major() {
        let shape = [2, 3];
        let mut index = [0, 0];
        let mut seen = vec![index.to_vec()];
        while next_index(&shape, &mut index) {
            seen.push(index.to_vec());
        }
        assert_eq!(
            seen,
            vec![vec![0, 0], vec![0, 1], vec![0, 2], vec![1, 0], vec![1, 1], vec![1, 2]]
        );
        assert_eq!(index, [0, 0]);
    }

    #[test]
    fn last_index_of_shape() {
        let mut end = [0; 3];
        last_index(&[2, 5, 1], &mut end);
        assert_eq!(end, [1, 4, 0]);
    }

    #[test]
    fn view_region_checks() {
        assert!(can_view(&[2, 2], &[1, 0], &[1, 2]).is_ok());
        assert!(can_view(&[4, 4], &[1, 1], &[2, 2]).is_ok());
        assert!(can_view(&[4, 4], &[2, 0], &[4]).is_ok());
        assert_eq!(can_view(&[2, 2], &[1, 1], &[1, 2]).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(can_view(&[2, 2], &[2, 0], &[1]).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(can_view(&[2, 2], &[0], &[1]).unwrap_err().kind(), ErrorKind::IncompatibleShapes);
        assert_eq!(can_view(&[2, 2], &[0, 0], &[1, 1, 1]).unwrap_err().kind(), ErrorKind::IncompatibleShapes);
        assert_eq!(can_view(&[2, 2], &[0, 0], &[0, 1]).unwrap_err().kind(), ErrorKind::InvalidShape);
    }

    #[test]
    fn standard_strides_ignore_unit_axes() {
        assert!(is_standard_strides(&[2, 3], &[3, 1]));
        assert!(is_standard_strides(&[1, 2], &[4, 1]));
        assert!(!is_standard_strides(&[2, 2], &[4, 1]));
        assert!(!is_standard_strides(&[2, 1], &[4, 1]));
        assert!(is_standard_strides(&[2, 1], &[1, 7]));
    }
}
