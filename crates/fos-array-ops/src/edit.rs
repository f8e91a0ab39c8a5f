//! Positional Edits
//!
//! Insertion and removal by swapping one slot at a time. On a unique
//! buffer these run in place with no extra allocation.

use fos_array::{ArrayError, CowArray, Result};

use crate::search::Search;

/// Insertion and removal operations
pub trait Edit<T> {
    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// `index == len` appends. O(len - index) swaps.
    fn insert_at(&mut self, index: usize, value: T) -> Result<()>;

    /// Remove the element at `index`, shifting later elements left.
    ///
    /// An out-of-range index is a no-op. See `ferase_idx` for the checked form.
    fn erase_idx(&mut self, index: usize);

    /// Remove and return the element at an index the caller has validated
    fn ferase_idx(&mut self, index: usize) -> Result<T>;

    /// Remove the first element equal to `value`; returns whether one was found
    fn erase(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Remove the first element matching `p`; returns whether one was found
    fn erase_by<P>(&mut self, p: P) -> bool
    where
        P: FnMut(&T) -> bool;
}

impl<T: Clone> Edit<T> for CowArray<T> {
    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(ArrayError::Range {
                start: index,
                len: 0,
                size: len,
            });
        }

        self.push(value);
        for j in (index..len).rev() {
            self.swap(j, j + 1)?;
        }
        Ok(())
    }

    fn erase_idx(&mut self, index: usize) {
        // Out of range is the only failure, and it leaves the array untouched
        if let Err(err) = self.ferase_idx(index) {
            tracing::trace!(%err, "erase_idx out of range, ignoring");
        }
    }

    fn ferase_idx(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        if index >= len {
            return Err(ArrayError::Range {
                start: index,
                len: 1,
                size: len,
            });
        }

        for j in index..len - 1 {
            self.swap(j, j + 1)?;
        }
        self.pop()
    }

    fn erase(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.erase_by(|x| x == value)
    }

    fn erase_by<P>(&mut self, p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.find_idx(p) {
            Some(index) => {
                self.erase_idx(index);
                true
            }
            None => false,
        }
    }
}
