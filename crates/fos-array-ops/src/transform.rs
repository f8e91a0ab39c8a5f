//! Transformations
//!
//! Element-wise rebuilds (map, filter, zip) and in-place reordering.
//! Rebuilt arrays carry the growth policy of their source.

use fos_array::{ArrayError, CowArray, Result};

use crate::fold::Fold;

/// Transformation operations
pub trait Transform<T> {
    /// Apply `f` to every element, ascending
    fn map<U, F>(&self, f: F) -> CowArray<U>
    where
        U: Clone,
        F: FnMut(&T) -> U;

    /// Apply `f` to every element along with its index
    fn map_idx<U, F>(&self, f: F) -> CowArray<U>
    where
        U: Clone,
        F: FnMut(usize, &T) -> U;

    /// Map with a fallible function; the first error aborts the map
    fn try_map<U, E, F>(&self, f: F) -> std::result::Result<CowArray<U>, E>
    where
        U: Clone,
        F: FnMut(&T) -> std::result::Result<U, E>;

    /// Keep elements matching `p`, in order
    fn filter<P>(&self, p: P) -> CowArray<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Keep the `Some` results of `f`, in order
    fn filter_map<U, F>(&self, f: F) -> CowArray<U>
    where
        U: Clone,
        F: FnMut(&T) -> Option<U>;

    /// Split into `(matching, non_matching)`, both in order
    fn partition<P>(&self, p: P) -> (CowArray<T>, CowArray<T>)
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Reverse in place by swapping from both ends toward the middle
    fn reverse(&mut self)
    where
        T: Clone;

    /// Combine pairwise up to the shorter length
    fn zip_with<U, V, F>(&self, other: &CowArray<U>, f: F) -> CowArray<V>
    where
        V: Clone,
        F: FnMut(&T, &U) -> V;

    /// Pair up elements up to the shorter length
    fn zip<U>(&self, other: &CowArray<U>) -> CowArray<(T, U)>
    where
        T: Clone,
        U: Clone;

    /// Append every element of `other`
    fn append(&mut self, other: &CowArray<T>)
    where
        T: Clone;

    /// Map each element to an array and concatenate the results
    fn concat_map<U, F>(&self, f: F) -> CowArray<U>
    where
        U: Clone,
        F: FnMut(&T) -> CowArray<U>;

    /// Longest prefix whose elements all match `p`
    fn take_while<P>(&self, p: P) -> CowArray<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Pop trailing elements while they match `p`
    fn pop_while<P>(&mut self, p: P)
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Split into `[0, index)` and `[index, len)`
    fn split_at(&self, index: usize) -> Result<(CowArray<T>, CowArray<T>)>
    where
        T: Clone;
}

impl<T> Transform<T> for CowArray<T> {
    fn map<U, F>(&self, mut f: F) -> CowArray<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        let out = CowArray::with_config(self.len(), self.config());
        self.foldl(out, |mut out, x| {
            out.push(f(x));
            out
        })
    }

    fn map_idx<U, F>(&self, mut f: F) -> CowArray<U>
    where
        U: Clone,
        F: FnMut(usize, &T) -> U,
    {
        let mut out = CowArray::with_config(self.len(), self.config());
        for i in 0..self.len() {
            out.push(f(i, &self[i]));
        }
        out
    }

    fn try_map<U, E, F>(&self, mut f: F) -> std::result::Result<CowArray<U>, E>
    where
        U: Clone,
        F: FnMut(&T) -> std::result::Result<U, E>,
    {
        let out = CowArray::with_config(self.len(), self.config());
        self.try_foldl(out, |mut out, x| {
            out.push(f(x)?);
            Ok(out)
        })
    }

    fn filter<P>(&self, mut p: P) -> CowArray<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.filter_map(|x| p(x).then(|| x.clone()))
    }

    fn filter_map<U, F>(&self, mut f: F) -> CowArray<U>
    where
        U: Clone,
        F: FnMut(&T) -> Option<U>,
    {
        let out = CowArray::with_config(0, self.config());
        self.foldl(out, |mut out, x| {
            if let Some(y) = f(x) {
                out.push(y);
            }
            out
        })
    }

    fn partition<P>(&self, mut p: P) -> (CowArray<T>, CowArray<T>)
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let config = self.config();
        let init = (
            CowArray::with_config(0, config),
            CowArray::with_config(0, config),
        );
        self.foldl(init, |(mut yes, mut no), x| {
            if p(x) {
                yes.push(x.clone());
            } else {
                no.push(x.clone());
            }
            (yes, no)
        })
    }

    fn reverse(&mut self)
    where
        T: Clone,
    {
        let len = self.len();
        let swapped = (0..len / 2).try_for_each(|i| self.swap(i, len - 1 - i));
        debug_assert!(swapped.is_ok(), "reverse swaps stay below len");
    }

    fn zip_with<U, V, F>(&self, other: &CowArray<U>, mut f: F) -> CowArray<V>
    where
        V: Clone,
        F: FnMut(&T, &U) -> V,
    {
        let len = self.len().min(other.len());
        let mut out = CowArray::with_config(len, self.config());
        for i in 0..len {
            out.push(f(&self[i], &other[i]));
        }
        out
    }

    fn zip<U>(&self, other: &CowArray<U>) -> CowArray<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        self.zip_with(other, |a, b| (a.clone(), b.clone()))
    }

    fn append(&mut self, other: &CowArray<T>)
    where
        T: Clone,
    {
        self.reserve(other.len());
        for i in 0..other.len() {
            self.push(other[i].clone());
        }
    }

    fn concat_map<U, F>(&self, mut f: F) -> CowArray<U>
    where
        U: Clone,
        F: FnMut(&T) -> CowArray<U>,
    {
        let out = CowArray::with_config(0, self.config());
        self.foldl(out, |mut out, x| {
            out.append(&f(x));
            out
        })
    }

    fn take_while<P>(&self, mut p: P) -> CowArray<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut out = CowArray::with_config(0, self.config());
        for i in 0..self.len() {
            if !p(&self[i]) {
                break;
            }
            out.push(self[i].clone());
        }
        out
    }

    fn pop_while<P>(&mut self, mut p: P)
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        while self.back_opt().is_some_and(&mut p) && self.pop().is_ok() {}
    }

    fn split_at(&self, index: usize) -> Result<(CowArray<T>, CowArray<T>)>
    where
        T: Clone,
    {
        let len = self.len();
        if index > len {
            return Err(ArrayError::Range {
                start: index,
                len: 0,
                size: len,
            });
        }
        Ok((self.extract(0, index)?, self.extract(index, len - index)?))
    }
}

/// Split an array of pairs
pub trait Unzip<A, B> {
    /// Split into first and second components, both in order
    fn unzip(&self) -> (CowArray<A>, CowArray<B>);
}

impl<A: Clone, B: Clone> Unzip<A, B> for CowArray<(A, B)> {
    fn unzip(&self) -> (CowArray<A>, CowArray<B>) {
        let config = self.config();
        let init = (
            CowArray::with_config(self.len(), config),
            CowArray::with_config(self.len(), config),
        );
        self.foldl(init, |(mut left, mut right), (a, b)| {
            left.push(a.clone());
            right.push(b.clone());
            (left, right)
        })
    }
}
