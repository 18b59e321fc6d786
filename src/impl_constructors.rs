// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndcell
//!

use std::rc::Rc;

use num_traits::{Float, NumCast, One, Zero};

use crate::dimension;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::iterators::{Iter, NdIter};
use crate::{Array, Ix, MathCell};

macro_rules! size_checked_unwrap {
    ($shape:expr) => {
        match dimension::size_of_shape_checked($shape) {
            Ok(sz) => sz,
            Err(e) => panic!("ndcell: invalid shape {:?}: {}", $shape, e),
        }
    };
}

/// Constructor methods for n-dimensional arrays.
impl<A> Array<A> {
    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Panics** if the shape is empty, has an axis of length zero, or if
    /// the number of elements would overflow usize.
    ///
    /// ```
    /// use ndcell::Array;
    ///
    /// let a = Array::from_elem(&[2, 2, 2], 1.);
    ///
    /// assert_eq!(a.to_vec(), vec![1.; 8]);
    /// assert_eq!(a.strides(), &[4, 2, 1]);
    /// ```
    pub fn from_elem(shape: &[Ix], elem: A) -> Array<A>
    where
        A: Copy,
    {
        let size = size_checked_unwrap!(shape);
        let v = (0..size).map(|_| MathCell::new(elem)).collect();
        Self::from_buffer(shape, v)
    }

    /// Create an array with zeros, shape `shape`.
    ///
    /// **Panics** if the shape is empty, has an axis of length zero, or if
    /// the number of elements would overflow usize.
    pub fn zeros(shape: &[Ix]) -> Array<A>
    where
        A: Copy + Zero,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with ones, shape `shape`.
    ///
    /// The ones are written through the array's default iterator.
    ///
    /// **Panics** if the shape is empty, has an axis of length zero, or if
    /// the number of elements would overflow usize.
    pub fn ones(shape: &[Ix]) -> Array<A>
    where
        A: Copy + Zero + One,
    {
        let mut res = Self::zeros(shape);
        let it = res.take();
        while !it.done() {
            it.at().set(A::one());
            it.advance();
        }
        res
    }

    /// Create an array of zeros with the same shape as `a`.
    pub fn zeros_like<B>(a: &Array<B>) -> Array<A>
    where
        A: Copy + Zero,
    {
        Self::zeros(a.shape())
    }

    /// Create an array with shape `shape`, filled in row-major order with
    /// the elements of `values`.
    ///
    /// Only the first `size` elements are used. If `values` is shorter,
    /// the remaining elements are zero.
    ///
    /// **Panics** if the shape is empty, has an axis of length zero, or if
    /// the number of elements would overflow usize.
    ///
    /// ```
    /// use ndcell::Array;
    ///
    /// let a = Array::new(&[2, 2], &[1, 2, 3]);
    /// assert_eq!(a.to_vec(), vec![1, 2, 3, 0]);
    /// ```
    pub fn new(shape: &[Ix], values: &[A]) -> Array<A>
    where
        A: Copy + Zero,
    {
        let res = Self::zeros(shape);
        for (cell, &v) in res.data().iter().zip(values) {
            cell.set(v);
        }
        res
    }

    /// Create an array from a vector (no copying of elements needed).
    ///
    /// **Errors** if `shape` is invalid or does not correspond to the number
    /// of elements in `v`.
    pub fn from_shape_vec(shape: &[Ix], v: Vec<A>) -> Result<Array<A>, ShapeError> {
        if dimension::size_of_shape_checked(shape)? != v.len() {
            return Err(from_kind(ErrorKind::IncompatibleShapes));
        }
        Ok(Self::from_buffer(shape, v.into_iter().map(MathCell::new).collect()))
    }

    /// Create a 1 × *m* array of values spaced by `step`, starting at
    /// `start` and excluding `stop`.
    ///
    /// Element *i* is `start + i * step`. *m* is `ceil((stop - start) / step)`,
    /// less any trailing elements that rounding puts at or past `stop`.
    ///
    /// The step has no default; pass `1.` for unit spacing.
    ///
    /// **Panics** if `step` is zero, if an argument is not finite, or if
    /// the range is empty.
    ///
    /// ```
    /// use ndcell::Array;
    ///
    /// let a = Array::arange(0., 5., 2.);
    /// assert_eq!(a.shape(), &[1, 3]);
    /// assert_eq!(a.to_vec(), vec![0., 2., 4.]);
    ///
    /// let b = Array::arange(0., 3., 1.);
    /// assert_eq!(b.to_vec(), vec![0., 1., 2.]);
    /// ```
    pub fn arange(start: A, stop: A, step: A) -> Array<A>
    where
        A: Float,
    {
        assert!(
            start.is_finite() && stop.is_finite() && step.is_finite(),
            "ndcell: arange bounds must be finite"
        );
        assert!(!step.is_zero(), "ndcell: arange step must be non-zero");
        let at = |i: usize| start + step * <A as NumCast>::from(i).unwrap_or_else(A::nan);
        let past_stop = |x: A| if step > A::zero() { x >= stop } else { x <= stop };
        let mut m = ((stop - start) / step).ceil().to_usize().unwrap_or(0);
        while m > 0 && past_stop(at(m - 1)) {
            m -= 1;
        }
        let res = Self::zeros(&[1, m]);
        for (i, cell) in res.data().iter().enumerate() {
            cell.set(at(i));
        }
        res
    }

    /// Assemble an array over a freshly allocated buffer laid out row-major
    /// for `shape`, and bind its default iterator.
    pub(crate) fn from_buffer(shape: &[Ix], data: Rc<[MathCell<A>]>) -> Array<A> {
        debug_assert_eq!(dimension::size_of_shape_checked(shape), Ok(data.len()));
        tracing::trace!(shape = ?shape, size = data.len(), "allocated array");
        let strides = dimension::default_strides(shape);
        let it = Iter::from_parts(Rc::clone(&data), 0, shape, &strides);
        Array {
            size: data.len(),
            data,
            offset: 0,
            shape: shape.to_vec(),
            strides,
            it: Some(it),
        }
    }
}
