// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndcell"]
#![doc(html_root_url = "https://docs.rs/ndcell/0.1/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::len_without_is_empty)]

//! The `ndcell` crate provides a dense *n*-dimensional array, [`Array`],
//! laid out in row-major order over a flat buffer.
//!
//! - Shape, strides and the linear-index arithmetic connecting them live in
//!   [`dimension`].
//! - Arrays share their buffer: [`Array::view`] and [`Array::reshape`] never
//!   copy, and a write through any handle is visible through every other
//!   handle of the same buffer.
//! - Traversal goes through the [`NdIter`] capability trait, which exposes
//!   both a precomputed list of linear offsets and a stepwise cursor.
//!   Element-wise routines such as [`scale`] are written only against it.
//!
//! ```
//! use ndcell::{scale, Array};
//!
//! let a = Array::new(&[2, 2], &[1., 2., 3., 4.]);
//! let row = a.view(&[1, 0], &[1, 2]).unwrap();
//! assert_eq!(row.to_vec(), vec![3., 4.]);
//!
//! // Scaling the view in place writes through to `a`.
//! let it = row.iter();
//! scale(10., &it, &it).unwrap();
//! assert_eq!(a.to_vec(), vec![1., 2., 30., 40.]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default, forwarded to `num-traits`.
//! - `serde`: `Serialize` and `Deserialize` for [`Array`].
//! - `approx`: `AbsDiffEq`, `RelativeEq` and `UlpsEq` for [`Array`].
//!
//! ## Threading
//!
//! Handles share one buffer of [`MathCell`]s without synchronization, so
//! [`Array`] and [`Iter`] are neither `Send` nor `Sync`.

use std::rc::Rc;

pub use crate::dimension::{
    default_strides, ind2sub, last_index, next_index, size_of_shape, size_of_shape_checked, sub2ind,
};
pub use crate::elementwise::scale;
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::free_functions::{arr1, is_shape_same};
pub use crate::iterators::{Elements, Iter, NdIter};
pub use crate::math_cell::MathCell;

#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod arrayformat;
mod arraytraits;
pub mod dimension;
mod elementwise;
mod error;
mod free_functions;
mod impl_constructors;
mod impl_methods;
mod iterators;
mod math_cell;
pub mod prelude;

/// Array index type
pub type Ix = usize;

/// A dense *n*-dimensional array over a shared, reference counted buffer.
///
/// The array is described by
///
/// - the buffer, a slice of [`MathCell<A>`] shared by every handle derived
///   from the same allocation,
/// - the offset of element `[0, .., 0]` in the buffer,
/// - the shape, with at least one axis and every axis of length at least 1,
/// - the strides, row-major for the shape unless the array is a view, in
///   which case they are the trailing strides of the array it was taken
///   from.
///
/// Arrays created by a constructor or by [`.reshape()`](Array::reshape) carry
/// a bound default iterator, reached through [`.take()`](Array::take). Views
/// don't; one is bound on the first call to `.take()`.
///
/// `Clone` produces another handle to the same buffer. Use
/// [`.to_owned()`](Array::to_owned) for an independent copy.
pub struct Array<A> {
    data: Rc<[MathCell<A>]>,
    offset: usize,
    shape: Vec<Ix>,
    strides: Vec<Ix>,
    size: usize,
    it: Option<Iter<A>>,
}

impl<A> Clone for Array<A> {
    fn clone(&self) -> Self {
        Array {
            data: Rc::clone(&self.data),
            offset: self.offset,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            size: self.size,
            it: self.it.clone(),
        }
    }
}
