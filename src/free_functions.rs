// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::Array;

/// Create a one-dimensional array with elements from `xs`.
///
/// **Panics** if `xs` is empty.
pub fn arr1<A: Copy>(xs: &[A]) -> Array<A> {
    Array::from(xs.to_vec())
}

/// Return `true` if `a` and `b` have the same number of axes and the same
/// length along every axis.
///
/// ```
/// use ndcell::{is_shape_same, Array};
///
/// let a = Array::<f64>::zeros(&[2, 3]);
/// assert!(is_shape_same(&a, &Array::<i32>::ones(&[2, 3])));
/// assert!(!is_shape_same(&a, &Array::<f64>::zeros(&[3, 2])));
/// ```
pub fn is_shape_same<A, B>(a: &Array<A>, b: &Array<B>) -> bool {
    a.ndim() == b.ndim() && a.shape() == b.shape()
}
