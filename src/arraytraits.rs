// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::iter::FromIterator;

use crate::Array;

/// Return `true` if the array shapes and all elements of `self` and
/// `other` are equal. Return `false` otherwise.
///
/// Elements are compared in row-major order, so a view compares equal to
/// an owned array holding the same values.
impl<A, B> PartialEq<Array<B>> for Array<A>
where
    A: Copy + PartialEq<B>,
    B: Copy,
{
    fn eq(&self, other: &Array<B>) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.iter()
            .elements()
            .zip(other.iter().elements())
            .all(|(a, b)| a.get() == b.get())
    }
}

impl<A> Eq for Array<A> where A: Copy + Eq {}

/// Create a one-dimensional array from a vector.
///
/// **Panics** if the vector is empty.
impl<A> From<Vec<A>> for Array<A> {
    fn from(v: Vec<A>) -> Self {
        let shape = [v.len()];
        match Array::from_shape_vec(&shape, v) {
            Ok(a) => a,
            Err(e) => panic!("ndcell: cannot build an array of shape {:?}: {}", shape, e),
        }
    }
}

/// Create a one-dimensional array from an iterable.
///
/// **Panics** if the iterable is empty.
impl<A> FromIterator<A> for Array<A> {
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Array::from(iterable.into_iter().collect::<Vec<_>>())
    }
}
