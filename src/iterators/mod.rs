// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::iter::FusedIterator;
use std::rc::Rc;
use std::slice;

use crate::dimension;
use crate::{Array, Ix, MathCell};

/// Traversal of an array's elements in row-major coordinate order.
///
/// Element-wise routines are written against this trait only, so they work
/// the same whether an operand owns its buffer or is a view into another
/// array's buffer.
///
/// Two access styles are offered and they always agree:
///
/// - bulk: [`.ind()`](NdIter::ind) lists the offsets into
///   [`.data()`](NdIter::data) in traversal order;
/// - stepwise: [`.at()`](NdIter::at), [`.advance()`](NdIter::advance) and
///   [`.done()`](NdIter::done) walk the same offsets one at a time.
///
/// Both visit exactly [`.len()`](NdIter::len) positions, each once.
///
/// ```
/// use ndcell::{Array, NdIter};
///
/// let mut a = Array::<f64>::zeros(&[2, 3]);
/// let it = a.take();
/// while !it.done() {
///     it.at().set(7.);
///     it.advance();
/// }
/// assert!(a.to_vec().iter().all(|&x| x == 7.));
/// ```
pub trait NdIter<A> {
    /// Number of positions the iterator visits.
    fn len(&self) -> usize;

    /// Return `true` if there are no positions to visit.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The flat buffer the offsets of [`.ind()`](NdIter::ind) point into.
    fn data(&self) -> &[MathCell<A>];

    /// Linear offsets into [`.data()`](NdIter::data), in traversal order.
    fn ind(&self) -> &[Ix];

    /// The element under the cursor.
    ///
    /// **Panics** if the cursor is done.
    fn at(&self) -> &MathCell<A>;

    /// Move the cursor to the next position.
    fn advance(&mut self);

    /// Return `true` once the cursor has moved past the last position.
    fn done(&self) -> bool;

    /// Move the cursor back to the first position.
    fn reset(&mut self);
}

/// A cursor over an array, bound to the array's shape and strides at the
/// time it was created.
///
/// The visited offsets are computed once, up front; the iterator keeps the
/// buffer alive independently of the array it came from.
pub struct Iter<A> {
    data: Rc<[MathCell<A>]>,
    offset: usize,
    ind: Rc<[Ix]>,
    pos: usize,
}

impl<A> Iter<A> {
    /// Create an iterator over `array`.
    pub fn new(array: &Array<A>) -> Self {
        Self::from_parts(Rc::clone(&array.data), array.offset, &array.shape, &array.strides)
    }

    pub(crate) fn from_parts(data: Rc<[MathCell<A>]>, offset: usize, shape: &[Ix], strides: &[Ix]) -> Self {
        let size = dimension::size_of_shape(shape);
        let mut ind = Vec::with_capacity(size);
        let mut index = vec![0; shape.len()];
        loop {
            ind.push(dimension::sub2ind(strides, &index));
            if !dimension::next_index(shape, &mut index) {
                break;
            }
        }
        debug_assert_eq!(ind.len(), size);
        debug_assert!(ind.iter().all(|&k| offset + k < data.len()));
        Iter {
            data,
            offset,
            ind: ind.into(),
            pos: 0,
        }
    }

    /// Return an iterator over the cells, in traversal order.
    ///
    /// It is independent of the cursor position.
    pub fn elements(&self) -> Elements<'_, A> {
        Elements {
            data: NdIter::data(self),
            ind: self.ind.iter(),
        }
    }

    /// Return `true` if both iterators walk the same positions of the same
    /// buffer.
    pub(crate) fn same_positions<X, Y>(x: &X, y: &Y) -> bool
    where
        X: NdIter<A> + ?Sized,
        Y: NdIter<A> + ?Sized,
    {
        let (xd, yd) = (x.data(), y.data());
        let (xi, yi) = (x.ind(), y.ind());
        xd.as_ptr() == yd.as_ptr()
            && xd.len() == yd.len()
            && (xi.as_ptr() == yi.as_ptr() && xi.len() == yi.len() || xi == yi)
    }
}

impl<A> NdIter<A> for Iter<A> {
    #[inline]
    fn len(&self) -> usize {
        self.ind.len()
    }

    #[inline]
    fn data(&self) -> &[MathCell<A>] {
        &self.data[self.offset..]
    }

    #[inline]
    fn ind(&self) -> &[Ix] {
        &self.ind
    }

    #[inline]
    fn at(&self) -> &MathCell<A> {
        &self.data[self.offset + self.ind[self.pos]]
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.ind.len() {
            self.pos += 1;
        }
    }

    #[inline]
    fn done(&self) -> bool {
        self.pos >= self.ind.len()
    }

    #[inline]
    fn reset(&mut self) {
        self.pos = 0;
    }
}

impl<A> Clone for Iter<A> {
    fn clone(&self) -> Self {
        Iter {
            data: Rc::clone(&self.data),
            offset: self.offset,
            ind: Rc::clone(&self.ind),
            pos: self.pos,
        }
    }
}

/// An iterator over the cells visited by an [`Iter`].
///
/// Iterator element type is `&'a MathCell<A>`.
pub struct Elements<'a, A> {
    data: &'a [MathCell<A>],
    ind: slice::Iter<'a, Ix>,
}

impl<'a, A> Iterator for Elements<'a, A> {
    type Item = &'a MathCell<A>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.ind.next().map(|&k| &self.data[k])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ind.size_hint()
    }
}

impl<'a, A> DoubleEndedIterator for Elements<'a, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ind.next_back().map(|&k| &self.data[k])
    }
}

impl<'a, A> ExactSizeIterator for Elements<'a, A> {}

impl<'a, A> FusedIterator for Elements<'a, A> {}
