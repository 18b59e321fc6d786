// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::rc::Rc;

use crate::dimension;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::iterators::{Iter, NdIter};
use crate::{Array, Ix, MathCell};

impl<A> Array<A> {
    /// Return the total number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Return the number of dimensions (axes) in the array.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Return the shape of the array as a slice.
    #[inline]
    pub fn shape(&self) -> &[Ix] {
        &self.shape
    }

    /// Return the strides of the array as a slice.
    #[inline]
    pub fn strides(&self) -> &[Ix] {
        &self.strides
    }

    /// Return the array's buffer, starting at element `[0, .., 0]`.
    ///
    /// For a view this is the tail of the buffer it shares with its parent,
    /// which may extend past the view's last element; locate elements with
    /// [`sub2ind`](crate::sub2ind) and [`.strides()`](Array::strides), or
    /// with an iterator's [`.ind()`](NdIter::ind).
    #[inline]
    pub fn data(&self) -> &[MathCell<A>] {
        &self.data[self.offset..]
    }

    /// Return a reference to the element at `index`, or `None` if the index
    /// is out of bounds.
    ///
    /// ```
    /// use ndcell::Array;
    ///
    /// let a = Array::new(&[2, 3], &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(a.get(&[1, 0]).map(|x| x.get()), Some(4));
    /// assert!(a.get(&[2, 0]).is_none());
    /// ```
    pub fn get(&self, index: &[Ix]) -> Option<&MathCell<A>> {
        if index.len() != self.ndim() || index.iter().zip(&self.shape).any(|(&i, &n)| i >= n) {
            return None;
        }
        Some(&self.data()[dimension::sub2ind(&self.strides, index)])
    }

    /// Return `true` if both arrays are handles to the same buffer.
    pub fn shares_buffer<B>(&self, other: &Array<B>) -> bool {
        Rc::as_ptr(&self.data) as *const () == Rc::as_ptr(&other.data) as *const ()
    }

    /// Return `true` if the array's elements are contiguous and in
    /// row-major order.
    ///
    /// Arrays built by a constructor or by `.reshape()` always are; a view
    /// is when it spans whole rows of its parent.
    pub fn is_standard_layout(&self) -> bool {
        dimension::is_standard_strides(&self.shape, &self.strides)
    }

    /// Return a view of the region of shape `shape` whose first element is
    /// at coordinate `start`.
    ///
    /// The view shares the buffer: changes made through it are visible in
    /// `self` and the other way around. Its axes are aligned with the
    /// trailing axes of `self`, and its strides are the trailing
    /// `shape.len()` strides of `self`. `start` gives a coordinate for
    /// every axis of `self`; leading axes not covered by `shape` are held
    /// fixed at that coordinate.
    ///
    /// The view has no bound iterator; create one with
    /// [`.iter()`](Array::iter) or [`.take()`](Array::take).
    ///
    /// **Errors** if `shape` is invalid (`InvalidShape`), if `start` does
    /// not have one coordinate per axis or `shape` has more axes than
    /// `self` (`IncompatibleShapes`), or if the region does not fit inside
    /// `self` (`OutOfBounds`).
    ///
    /// ```
    /// use ndcell::Array;
    ///
    /// let a = Array::new(&[2, 2], &[1, 2, 3, 4]);
    /// let v = a.view(&[1, 0], &[1, 2]).unwrap();
    /// assert_eq!(v.to_vec(), vec![3, 4]);
    ///
    /// v.data()[0].set(30);
    /// assert_eq!(a.to_vec(), vec![1, 2, 30, 4]);
    /// ```
    pub fn view(&self, start: &[Ix], shape: &[Ix]) -> Result<Array<A>, ShapeError> {
        if let Err(e) = dimension::can_view(&self.shape, start, shape) {
            tracing::debug!(kind = ?e.kind(), parent = ?self.shape, ?start, ?shape, "view rejected");
            return Err(e);
        }
        let offset = self.offset + dimension::sub2ind(&self.strides, start);
        let strides = self.strides[self.ndim() - shape.len()..].to_vec();
        tracing::debug!(?start, ?shape, ?strides, offset, "derived view");
        Ok(Array {
            data: Rc::clone(&self.data),
            offset,
            shape: shape.to_vec(),
            strides,
            size: dimension::size_of_shape(shape),
            it: None,
        })
    }

    /// Return a new handle to the same elements with shape `shape`.
    ///
    /// The elements are not copied and keep their row-major order; the new
    /// array has row-major strides for `shape` and its own bound iterator.
    /// `self`, and any view taken from it, is left unchanged.
    ///
    /// **Errors** if `shape` is invalid (`InvalidShape`), if the number of
    /// elements differs (`IncompatibleShapes`), or if the elements of
    /// `self` are not contiguous in row-major order (`IncompatibleLayout`).
    ///
    /// ```
    /// use ndcell::Array;
    ///
    /// let a = Array::new(&[2, 3], &[1, 2, 3, 4, 5, 6]);
    /// let b = a.reshape(&[3, 2]).unwrap();
    /// assert_eq!(b.strides(), &[2, 1]);
    /// assert_eq!(b.to_vec(), a.to_vec());
    /// assert!(a.reshape(&[4, 2]).is_err());
    /// ```
    pub fn reshape(&self, shape: &[Ix]) -> Result<Array<A>, ShapeError> {
        let size = dimension::size_of_shape_checked(shape)
            .and_then(|size| {
                if size != self.size {
                    Err(from_kind(ErrorKind::IncompatibleShapes))
                } else if !self.is_standard_layout() {
                    Err(from_kind(ErrorKind::IncompatibleLayout))
                } else {
                    Ok(size)
                }
            })
            .map_err(|e| {
                tracing::debug!(kind = ?e.kind(), from = ?self.shape, to = ?shape, "reshape rejected");
                e
            })?;
        let strides = dimension::default_strides(shape);
        let it = Iter::from_parts(Rc::clone(&self.data), self.offset, shape, &strides);
        tracing::debug!(from = ?self.shape, to = ?shape, "reshaped array");
        Ok(Array {
            data: Rc::clone(&self.data),
            offset: self.offset,
            shape: shape.to_vec(),
            strides,
            size,
            it: Some(it),
        })
    }

    /// Return a new iterator over the array.
    pub fn iter(&self) -> Iter<A> {
        Iter::new(self)
    }

    /// Return the array's default iterator, rewound to the first element.
    ///
    /// A view has none until the first call, which binds one.
    pub fn take(&mut self) -> &mut Iter<A> {
        let it = match self.it.take() {
            Some(it) => it,
            None => Iter::new(self),
        };
        let it = self.it.insert(it);
        it.reset();
        it
    }
}

impl<A> Array<A>
where
    A: Copy,
{
    /// Return the elements in row-major order, as a vector.
    pub fn to_vec(&self) -> Vec<A> {
        self.iter().elements().map(|x| x.get()).collect()
    }

    /// Return an array with the same shape and elements, over a new buffer.
    pub fn to_owned(&self) -> Array<A> {
        let data = self.iter().elements().map(|x| MathCell::new(x.get())).collect();
        Array::from_buffer(&self.shape, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_binds_iterator_for_views() {
        let a = Array::new(&[2, 2], &[1, 2, 3, 4]);
        let mut v = a.view(&[0, 1], &[2, 1]).unwrap();
        assert!(v.it.is_none());
        let it = v.take();
        assert_eq!(it.len(), 2);
        assert_eq!(it.at().get(), 2);
        it.advance();
        assert_eq!(it.at().get(), 4);
        assert!(v.it.is_some());
        assert_eq!(v.take().at().get(), 2);
    }

    #[test]
    fn view_of_view_composes_offsets() {
        let a = Array::new(&[3, 4], &(0..12).collect::<Vec<i32>>());
        let v = a.view(&[1, 1], &[2, 3]).unwrap();
        let w = v.view(&[1, 1], &[2]).unwrap();
        assert_eq!(w.to_vec(), vec![10, 11]);
        assert!(w.shares_buffer(&a));
    }

    #[test]
    fn to_owned_breaks_sharing() {
        let a = Array::new(&[2, 2], &[1, 2, 3, 4]);
        let v = a.view(&[0, 1], &[2, 1]).unwrap();
        let o = v.to_owned();
        assert!(!o.shares_buffer(&a));
        assert!(o.is_standard_layout());
        o.data()[0].set(0);
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4]);
    }
}
