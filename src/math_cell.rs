use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

use std::ops::{Add, Deref, DerefMut, Div, Mul, Sub};

/// A transparent wrapper of [`Cell<T>`](std::cell::Cell) which is identical in every way, except
/// it will implement arithmetic operators as well.
///
/// Array buffers are made of `MathCell`s, which is what lets a view, its
/// parent and any number of iterators read and write the same elements
/// through shared references. The `MathCell` derefs to `Cell`, so all the
/// cell's methods are available.
#[repr(transparent)]
#[derive(Default)]
pub struct MathCell<T>(Cell<T>);

impl<T> MathCell<T> {
    /// Create a new cell with the given value
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        MathCell(Cell::new(value))
    }

    /// Return the inner value
    pub fn into_inner(self) -> T {
        Cell::into_inner(self.0)
    }

    /// Swap value with another cell
    pub fn swap(&self, other: &Self) {
        Cell::swap(&self.0, &other.0)
    }
}

impl<T> MathCell<T>
where
    T: Copy,
{
    /// Replace the value with `f` applied to it.
    #[inline]
    pub fn update_with<F>(&self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        self.set(f(self.get()));
    }
}

impl<T> Deref for MathCell<T> {
    type Target = Cell<T>;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for MathCell<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Clone for MathCell<T>
where
    T: Copy,
{
    fn clone(&self) -> Self {
        MathCell::new(self.get())
    }
}

impl<T> PartialEq for MathCell<T>
where
    T: Copy + PartialEq,
{
    fn eq(&self, rhs: &Self) -> bool {
        self.get() == rhs.get()
    }
}

impl<T> Eq for MathCell<T> where T: Copy + Eq {}

impl<T> PartialOrd for MathCell<T>
where
    T: Copy + PartialOrd,
{
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        self.get().partial_cmp(&rhs.get())
    }
}

impl<T> fmt::Debug for MathCell<T>
where
    T: Copy + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

macro_rules! impl_math_cell_op {
    ($trt:ident, $op:tt, $mth:ident) => {
    impl<A, B> $trt<B> for &MathCell<A>
        where A: Copy + $trt<B>
    {
        type Output = <A as $trt<B>>::Output;
        fn $mth(self, other: B) -> Self::Output {
            self.get() $op other
        }
    }
    };
}

impl_math_cell_op!(Add, +, add);
impl_math_cell_op!(Sub, -, sub);
impl_math_cell_op!(Mul, *, mul);
impl_math_cell_op!(Div, /, div);
