// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error related to array shape or layout.
#[derive(Clone, Debug)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to array shape or layout.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// incompatible shapes
    IncompatibleShapes,
    /// incompatible layout: not contiguous
    IncompatibleLayout,
    /// dimension too large (shape)
    DimensionTooLarge,
    /// index or region out of bounds
    OutOfBounds,
    /// empty shape or an axis of length zero
    InvalidShape,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError { repr: k }
}

impl PartialEq for ShapeError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Eq for ShapeError {}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::IncompatibleShapes => "incompatible shapes",
            ErrorKind::IncompatibleLayout => "incompatible layout (not contiguous)",
            ErrorKind::DimensionTooLarge => "dimension too large",
            ErrorKind::OutOfBounds => "index or region out of bounds",
            ErrorKind::InvalidShape => "shape must be non-empty with every axis of length at least 1",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind(), description)
    }
}
