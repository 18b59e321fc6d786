// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element-wise routines over [`NdIter`] operands.
//!
//! Routines here only use `len`, `data` and `ind` of their operands, so
//! they behave the same for freshly allocated arrays and for views that
//! alias another array's buffer.

use std::ops::Mul;

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::iterators::{Iter, NdIter};

/// Compute `y = a * x` element by element, in traversal order.
///
/// `x` and `y` may be the same positions of the same buffer (for example
/// `scale(a, &it, &it)`), in which case `x` is scaled in place. Operands
/// that only partially overlap are written in traversal order, so an
/// element written through `y` is read again through `x` if `x` visits it
/// later.
///
/// **Errors** with `IncompatibleShapes` if the operands visit a different
/// number of positions.
///
/// ```
/// use ndcell::{arr1, scale, Array};
///
/// let x = arr1(&[1., 2., 3.]);
/// let y = Array::zeros_like(&x);
/// scale(2., &x.iter(), &y.iter()).unwrap();
/// assert_eq!(y, arr1(&[2., 4., 6.]));
/// assert_eq!(x, arr1(&[1., 2., 3.]));
/// ```
pub fn scale<A, X, Y>(a: A, x: &X, y: &Y) -> Result<(), ShapeError>
where
    A: Copy + Mul<Output = A>,
    X: NdIter<A> + ?Sized,
    Y: NdIter<A> + ?Sized,
{
    if x.len() != y.len() {
        tracing::debug!(x_len = x.len(), y_len = y.len(), "scale: operand lengths differ");
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }

    let xd = x.data();
    if Iter::<A>::same_positions(x, y) {
        for &k in x.ind() {
            xd[k].set(a * xd[k].get());
        }
        return Ok(());
    }

    let yd = y.data();
    for (&xi, &yi) in x.ind().iter().zip(y.ind()) {
        yd[yi].set(a * xd[xi].get());
    }
    Ok(())
}
