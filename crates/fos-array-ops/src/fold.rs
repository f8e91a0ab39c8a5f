//! Folds
//!
//! Sequential left and right folds over an index range, with early exit.

use std::iter::Sum;

use fos_array::CowArray;

/// Continue/stop signal returned by an interruptible fold step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<B> {
    /// Keep folding with this accumulator
    Continue(B),
    /// Stop and return this accumulator
    Done(B),
}

impl<B> Step<B> {
    /// Accumulator carried by either variant
    pub fn into_inner(self) -> B {
        match self {
            Step::Continue(acc) | Step::Done(acc) => acc,
        }
    }
}

/// Fold operations
pub trait Fold<T> {
    /// Fold `[start, stop)` in ascending order; `stop` is clamped to the length
    fn foldl_range<B, F>(&self, init: B, start: usize, stop: usize, f: F) -> B
    where
        F: FnMut(B, &T) -> Step<B>;

    /// Fold `[start, stop)` in descending order; `stop` is clamped to the length
    fn foldr_range<B, F>(&self, init: B, start: usize, stop: usize, f: F) -> B
    where
        F: FnMut(&T, B) -> Step<B>;

    /// Fold every element, ascending
    fn foldl<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B;

    /// Fold every element, descending
    fn foldr<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(&T, B) -> B;

    /// Ascending fold whose step may fail; the first error is returned
    /// and the accumulator built so far is dropped.
    fn try_foldl<B, E, F>(&self, init: B, f: F) -> Result<B, E>
    where
        F: FnMut(B, &T) -> Result<B, E>;

    /// Visit every element, ascending
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T);

    /// Sum of all elements
    fn sum(&self) -> T
    where
        T: Clone + Sum<T>;
}

impl<T> Fold<T> for CowArray<T> {
    fn foldl_range<B, F>(&self, init: B, start: usize, stop: usize, mut f: F) -> B
    where
        F: FnMut(B, &T) -> Step<B>,
    {
        let stop = stop.min(self.len());
        let mut acc = init;
        for i in start..stop {
            match f(acc, &self[i]) {
                Step::Continue(next) => acc = next,
                Step::Done(last) => return last,
            }
        }
        acc
    }

    fn foldr_range<B, F>(&self, init: B, start: usize, stop: usize, mut f: F) -> B
    where
        F: FnMut(&T, B) -> Step<B>,
    {
        let stop = stop.min(self.len());
        let mut acc = init;
        for i in (start..stop).rev() {
            match f(&self[i], acc) {
                Step::Continue(next) => acc = next,
                Step::Done(last) => return last,
            }
        }
        acc
    }

    fn foldl<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.foldl_range(init, 0, self.len(), |acc, x| Step::Continue(f(acc, x)))
    }

    fn foldr<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        self.foldr_range(init, 0, self.len(), |x, acc| Step::Continue(f(x, acc)))
    }

    fn try_foldl<B, E, F>(&self, init: B, mut f: F) -> Result<B, E>
    where
        F: FnMut(B, &T) -> Result<B, E>,
    {
        let mut acc = init;
        for i in 0..self.len() {
            acc = f(acc, &self[i])?;
        }
        Ok(acc)
    }

    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.foldl((), |(), x| f(x))
    }

    fn sum(&self) -> T
    where
        T: Clone + Sum<T>,
    {
        (0..self.len()).map(|i| self[i].clone()).sum()
    }
}
