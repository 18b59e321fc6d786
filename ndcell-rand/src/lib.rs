// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructors for randomized arrays: `rand` integration for `ndcell`.
//!
//! The random source is always explicit in the `_using` methods, so a
//! seeded generator gives reproducible arrays. The other methods draw from
//! [`rand::rng()`], a thread-local generator seeded from the operating
//! system's secure entropy source; their results differ from run to run.
//!
//! ```
//! use ndcell::Array;
//! use ndcell_rand::rand::{rngs::SmallRng, SeedableRng};
//! use ndcell_rand::RandomExt;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let a = Array::<f64>::rand_using(&[2, 5], &mut rng);
//! assert!(a.to_vec().iter().all(|&x| (0. ..1.).contains(&x)));
//! ```

use crate::rand::distr::{Distribution, StandardUniform};
use crate::rand::Rng;
use ndcell::{Array, Ix};
use num_traits::{One, Zero};

/// [`rand`](https://docs.rs/rand/0.9), re-exported for convenience and to
/// avoid version conflicts.
pub mod rand {
    pub use rand::*;
}

/// [`rand-distr`](https://docs.rs/rand_distr/0.5), re-exported for
/// convenience and to avoid version conflicts.
pub mod rand_distr {
    pub use rand_distr::*;
}

/// Constructors for n-dimensional arrays with random elements.
///
/// This trait extends ndcell's `Array` and can not be implemented
/// for other types.
///
/// **Panics**, like the `Array` constructors, if the shape is empty or has
/// an axis of length zero.
pub trait RandomExt<A>
where
    A: Copy + Zero,
{
    /// Create an array with shape `shape` with elements drawn from
    /// `distribution` using the default thread-local rng.
    ///
    /// ```
    /// use ndcell::Array;
    /// use ndcell_rand::rand_distr::Uniform;
    /// use ndcell_rand::RandomExt;
    ///
    /// let a = Array::random(&[2, 5], Uniform::new(0., 10.).unwrap());
    /// println!("{:8.4}", a);
    /// // Output:
    /// // [[  8.6900,   6.9824,   3.8922,   6.5861,   2.4890],
    /// //  [  0.0914,   5.5186,   5.8135,   5.2361,   3.1879]]
    /// ```
    fn random<IdS>(shape: &[Ix], distribution: IdS) -> Array<A>
    where
        IdS: Distribution<A>;

    /// Create an array with shape `shape` with elements drawn from
    /// `distribution`, using a specific Rng `rng`.
    fn random_using<IdS, R>(shape: &[Ix], distribution: IdS, rng: &mut R) -> Array<A>
    where
        IdS: Distribution<A>,
        R: Rng + ?Sized;

    /// Create an array with elements uniformly distributed in `[0, 1)`,
    /// using the default thread-local rng.
    fn rand(shape: &[Ix]) -> Array<A>
    where
        StandardUniform: Distribution<A>;

    /// Create an array with elements uniformly distributed in `[0, 1)`,
    /// using a specific Rng `rng`.
    fn rand_using<R>(shape: &[Ix], rng: &mut R) -> Array<A>
    where
        StandardUniform: Distribution<A>,
        R: Rng + ?Sized;

    /// Create an array of zeros and ones, each element being one with
    /// probability 0.5, using the default thread-local rng.
    fn rand_bool(shape: &[Ix]) -> Array<A>
    where
        A: One;

    /// Create an array of zeros and ones, each element being one with
    /// probability 0.5, using a specific Rng `rng`.
    fn rand_bool_using<R>(shape: &[Ix], rng: &mut R) -> Array<A>
    where
        A: One,
        R: Rng + ?Sized;
}

impl<A> RandomExt<A> for Array<A>
where
    A: Copy + Zero,
{
    fn random<IdS>(shape: &[Ix], dist: IdS) -> Array<A>
    where
        IdS: Distribution<A>,
    {
        Self::random_using(shape, dist, &mut crate::rand::rng())
    }

    fn random_using<IdS, R>(shape: &[Ix], dist: IdS, rng: &mut R) -> Array<A>
    where
        IdS: Distribution<A>,
        R: Rng + ?Sized,
    {
        let res = Array::zeros(shape);
        for elt in res.data() {
            elt.set(dist.sample(rng));
        }
        res
    }

    fn rand(shape: &[Ix]) -> Array<A>
    where
        StandardUniform: Distribution<A>,
    {
        Self::random(shape, StandardUniform)
    }

    fn rand_using<R>(shape: &[Ix], rng: &mut R) -> Array<A>
    where
        StandardUniform: Distribution<A>,
        R: Rng + ?Sized,
    {
        Self::random_using(shape, StandardUniform, rng)
    }

    fn rand_bool(shape: &[Ix]) -> Array<A>
    where
        A: One,
    {
        Self::rand_bool_using(shape, &mut crate::rand::rng())
    }

    fn rand_bool_using<R>(shape: &[Ix], rng: &mut R) -> Array<A>
    where
        A: One,
        R: Rng + ?Sized,
    {
        let res = Array::zeros(shape);
        for elt in res.data() {
            elt.set(if rng.random_bool(0.5) { A::one() } else { A::zero() });
        }
        res
    }
}
