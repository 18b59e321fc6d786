// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndcell prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use ndcell::prelude::*;
//!
//! let a = Array::<f64>::ones(&[2, 2]);
//! assert!(a.iter().elements().all(|x| x.get() == 1.));
//! ```

#[doc(no_inline)]
pub use crate::{Array, Iter, MathCell, NdIter};

#[doc(no_inline)]
pub use crate::{arr1, is_shape_same, scale};

#[doc(no_inline)]
pub use crate::{ErrorKind, Ix, ShapeError};
