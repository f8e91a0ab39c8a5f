//! Searching
//!
//! Short-circuiting scans. Ascending scans return the first match; the
//! `_rev` variants scan descending and so return the last match.

use fos_array::CowArray;

use crate::fold::{Fold, Step};

/// Search and comparison operations
pub trait Search<T> {
    /// True if some element matches `p`
    fn any<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// True if some element in `[start, stop)` matches `p`
    fn any_range<P>(&self, start: usize, stop: usize, p: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// True if every element matches `p`
    fn all<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// True if every element in `[start, stop)` matches `p`
    fn all_range<P>(&self, start: usize, stop: usize, p: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// `any` with a fallible predicate; the first error ends the scan
    fn try_any<E, P>(&self, p: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>;

    /// First element matching `p`
    fn find<P>(&self, p: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Index of the first element matching `p`
    fn find_idx<P>(&self, p: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool;

    /// First `Some` produced by `f`
    fn find_some<U, F>(&self, f: F) -> Option<U>
    where
        F: FnMut(&T) -> Option<U>;

    /// Last element matching `p`
    fn find_rev<P>(&self, p: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Index of the last element matching `p`
    fn find_idx_rev<P>(&self, p: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool;

    /// Last `Some` produced by `f`, scanning descending
    fn find_some_rev<U, F>(&self, f: F) -> Option<U>
    where
        F: FnMut(&T) -> Option<U>;

    /// Index of the first element equal to `value`
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// True if some element equals `value`
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Alias of `contains`
    fn elem(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(value)
    }

    /// True if some element is `eq` to `value`
    fn contains_by<F>(&self, value: &T, eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;

    /// Largest element under the strict ordering `lt`; ties keep the first
    fn get_max<F>(&self, lt: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool;

    /// Largest element; ties keep the first
    fn max(&self) -> Option<&T>
    where
        T: Ord;

    /// True if `self` is a prefix of `other`
    fn is_prefix_of(&self, other: &CowArray<T>) -> bool
    where
        T: PartialEq;

    /// `is_prefix_of` under a custom equality
    fn is_prefix_of_by<U, F>(&self, other: &CowArray<U>, eq: F) -> bool
    where
        F: FnMut(&T, &U) -> bool;

    /// Same length and pointwise `eq`
    fn is_eqv<U, F>(&self, other: &CowArray<U>, eq: F) -> bool
    where
        F: FnMut(&T, &U) -> bool;

    /// True if no two distinct indices hold equal elements. Quadratic.
    fn all_diff(&self) -> bool
    where
        T: PartialEq;

    /// `all_diff` under a custom equality. Quadratic.
    fn all_diff_by<F>(&self, eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;
}

impl<T> Search<T> for CowArray<T> {
    fn any<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.any_range(0, self.len(), p)
    }

    fn any_range<P>(&self, start: usize, stop: usize, mut p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.foldl_range(false, start, stop, |_, x| {
            if p(x) {
                Step::Done(true)
            } else {
                Step::Continue(false)
            }
        })
    }

    fn all<P>(&self, mut p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any(|x| !p(x))
    }

    fn all_range<P>(&self, start: usize, stop: usize, mut p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any_range(start, stop, |x| !p(x))
    }

    fn try_any<E, P>(&self, mut p: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        for i in 0..self.len() {
            if p(&self[i])? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn find<P>(&self, p: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.find_idx(p).and_then(|i| self.get_opt(i))
    }

    fn find_idx<P>(&self, mut p: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        (0..self.len()).find(|&i| p(&self[i]))
    }

    fn find_some<U, F>(&self, mut f: F) -> Option<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        (0..self.len()).find_map(|i| f(&self[i]))
    }

    fn find_rev<P>(&self, p: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.find_idx_rev(p).and_then(|i| self.get_opt(i))
    }

    fn find_idx_rev<P>(&self, mut p: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        (0..self.len()).rev().find(|&i| p(&self[i]))
    }

    fn find_some_rev<U, F>(&self, mut f: F) -> Option<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        (0..self.len()).rev().find_map(|i| f(&self[i]))
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_idx(|x| x == value)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.any(|x| x == value)
    }

    fn contains_by<F>(&self, value: &T, mut eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.any(|x| eq(x, value))
    }

    fn get_max<F>(&self, mut lt: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut best = self.get_opt(0)?;
        for i in 1..self.len() {
            if lt(best, &self[i]) {
                best = &self[i];
            }
        }
        Some(best)
    }

    fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.get_max(|a, b| a < b)
    }

    fn is_prefix_of(&self, other: &CowArray<T>) -> bool
    where
        T: PartialEq,
    {
        self.is_prefix_of_by(other, |a, b| a == b)
    }

    fn is_prefix_of_by<U, F>(&self, other: &CowArray<U>, mut eq: F) -> bool
    where
        F: FnMut(&T, &U) -> bool,
    {
        self.len() <= other.len() && (0..self.len()).all(|i| eq(&self[i], &other[i]))
    }

    fn is_eqv<U, F>(&self, other: &CowArray<U>, eq: F) -> bool
    where
        F: FnMut(&T, &U) -> bool,
    {
        self.len() == other.len() && self.is_prefix_of_by(other, eq)
    }

    fn all_diff(&self) -> bool
    where
        T: PartialEq,
    {
        self.all_diff_by(|a, b| a == b)
    }

    fn all_diff_by<F>(&self, mut eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        (1..self.len()).all(|i| !self.any_range(0, i, |prev| eq(prev, &self[i])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arr(items: &[i32]) -> CowArray<i32> {
        CowArray::from(items)
    }

    #[test]
    fn test_any_all() {
        let a = arr(&[1, 3, 4, 5]);
        assert!(a.any(|x| x % 2 == 0));
        assert!(!a.all(|x| x % 2 == 1));
        assert!(a.all_range(0, 2, |x| x % 2 == 1));
        assert!(!a.any_range(0, 2, |x| x % 2 == 0));

        let empty = arr(&[]);
        assert!(!empty.any(|_| true));
        assert!(empty.all(|_| false));
    }

    #[test]
    fn test_any_short_circuits() {
        let mut visited = 0;
        assert!(arr(&[1, 2, 3, 4]).any(|&x| {
            visited += 1;
            x == 2
        }));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_try_any() {
        let result: Result<bool, &str> = arr(&[1, 2, 3]).try_any(|&x| {
            if x == 2 {
                Err("two")
            } else {
                Ok(false)
            }
        });
        assert_eq!(result, Err("two"));
        assert_eq!(arr(&[1, 2]).try_any::<&str, _>(|&x| Ok(x == 2)), Ok(true));
    }

    #[test]
    fn test_find_family() {
        let a = arr(&[4, 7, 8, 9, 10]);
        assert_eq!(a.find(|x| x % 2 == 1), Some(&7));
        assert_eq!(a.find_idx(|x| x % 2 == 1), Some(1));
        assert_eq!(a.find_rev(|x| x % 2 == 1), Some(&9));
        assert_eq!(a.find_idx_rev(|x| x % 2 == 1), Some(3));
        assert_eq!(a.find_some(|x| (*x > 7).then_some(x * 2)), Some(16));
        assert_eq!(a.find_some_rev(|x| (*x < 9).then_some(x * 2)), Some(16));
        assert_eq!(a.find(|x| *x > 100), None);
    }

    #[test]
    fn test_contains() {
        let a = arr(&[1, 2, 3]);
        assert!(a.contains(&2));
        assert!(a.elem(&3));
        assert!(!a.contains(&5));
        assert_eq!(a.index_of(&3), Some(2));
        assert!(a.contains_by(&-2, |x, y| x.abs() == y.abs()));
    }

    #[test]
    fn test_get_max() {
        let words = CowArray::from(vec!["bb", "a", "cc", "d"]);
        assert_eq!(words.get_max(|a, b| a.len() < b.len()), Some(&"bb"));
        assert_eq!(arr(&[3, 9, 2]).max(), Some(&9));
        assert_eq!(arr(&[]).max(), None);
    }

    #[test]
    fn test_is_prefix_of() {
        assert!(arr(&[1, 2]).is_prefix_of(&arr(&[1, 2, 3])));
        assert!(arr(&[]).is_prefix_of(&arr(&[1])));
        assert!(!arr(&[1, 3]).is_prefix_of(&arr(&[1, 2, 3])));
        assert!(!arr(&[1, 2, 3]).is_prefix_of(&arr(&[1, 2])));
        assert!(arr(&[1, 2]).is_eqv(&CowArray::from(vec!["1", "2"]), |a, b| a.to_string() == *b));
        assert!(!arr(&[1]).is_eqv(&arr(&[1, 2]), |a, b| a == b));
    }

    #[test]
    fn test_all_diff() {
        assert!(arr(&[]).all_diff());
        assert!(arr(&[1, 2, 3]).all_diff());
        assert!(!arr(&[1, 2, 1]).all_diff());
        assert!(!arr(&[1, -1]).all_diff_by(|a, b| a.abs() == b.abs()));
    }
}
