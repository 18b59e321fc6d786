use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Array;

/// Return `true` if the shapes agree and `f` holds for every pair of
/// elements in row-major order.
fn all_pairs<A, B, F>(a: &Array<A>, b: &Array<B>, mut f: F) -> bool
where
    A: Copy,
    B: Copy,
    F: FnMut(&A, &B) -> bool,
{
    if a.shape() != b.shape() {
        return false;
    }
    a.iter()
        .elements()
        .zip(b.iter().elements())
        .all(|(x, y)| f(&x.get(), &y.get()))
}

/// **Requires crate feature `"approx"`.**
impl<A, B> AbsDiffEq<Array<B>> for Array<A>
where
    A: Copy + AbsDiffEq<B>,
    A::Epsilon: Clone,
    B: Copy,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool {
        all_pairs(self, other, |a, b| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B> RelativeEq<Array<B>> for Array<A>
where
    A: Copy + RelativeEq<B>,
    A::Epsilon: Clone,
    B: Copy,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        all_pairs(self, other, |a, b| {
            A::relative_eq(a, b, epsilon.clone(), max_relative.clone())
        })
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B> UlpsEq<Array<B>> for Array<A>
where
    A: Copy + UlpsEq<B>,
    A::Epsilon: Clone,
    B: Copy,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        all_pairs(self, other, |a, b| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}
