// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::dimension;
use crate::Array;

fn format_array<A, F>(array: &Array<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    A: Copy,
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let ndim = array.ndim();
    let shape = array.shape();
    let mut index = vec![0; ndim];
    let mut last_index = index.clone();
    for _ in 0..ndim {
        f.write_str("[")?;
    }
    // Walk the coordinates alongside the elements and take the index
    // wraparounds as cues for when to add []'s and how many to add.
    for (k, elt) in array.iter().elements().enumerate() {
        if k > 0 {
            last_index.copy_from_slice(&index);
            dimension::next_index(shape, &mut index);
            let axis = index
                .iter()
                .zip(&last_index)
                .position(|(a, b)| a != b)
                .unwrap_or(ndim - 1);
            if axis < ndim - 1 {
                // New row; # of ['s needed
                let n = ndim - axis - 1;
                for _ in 0..n {
                    f.write_str("]")?;
                }
                f.write_str(",\n")?;
                for _ in 0..ndim - n {
                    f.write_str(" ")?;
                }
                for _ in 0..n {
                    f.write_str("[")?;
                }
            } else {
                f.write_str(", ")?;
            }
        }
        format(&elt.get(), f)?;
    }
    for _ in 0..ndim {
        f.write_str("]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A> fmt::Display for Array<A>
where
    A: Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <A as fmt::Display>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A> fmt::Debug for Array<A>
where
    A: Copy + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Add extra information for Debug
        format_array(self, f, <A as fmt::Debug>::fmt)?;
        write!(
            f,
            " shape={:?}, strides={:?}, layout={}",
            self.shape(),
            self.strides(),
            if self.is_standard_layout() { "C" } else { "strided" }
        )
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A> fmt::LowerExp for Array<A>
where
    A: Copy + fmt::LowerExp,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <A as fmt::LowerExp>::fmt)
    }
}
