//! Copy-on-Write Array
//!
//! A growable array whose handles share one reference-counted buffer.
//! Mutators write in place when the calling handle is the only one alive
//! and copy the buffer first otherwise, so a clone never observes a later
//! update made through another handle.
//!
//! Exclusivity is checked with `Arc::get_mut`, which reads the atomic
//! reference count, so handles may be sent across threads freely.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::Arc;

use crate::{ArrayError, Config, Result};

/// Reference-counted copy-on-write array
pub struct CowArray<T> {
    buf: Arc<Vec<T>>,
    config: Config,
}

impl<T> CowArray<T> {
    /// Create an empty array without allocating
    pub fn new() -> Self {
        Self::with_config(0, Config::default())
    }

    /// Create an empty array with room for at least `capacity_hint` elements
    pub fn empty(capacity_hint: usize) -> Self {
        Self::with_config(capacity_hint, Config::default())
    }

    /// Create an empty array carrying a custom growth policy
    pub fn with_config(capacity_hint: usize, config: Config) -> Self {
        Self {
            buf: Arc::new(Vec::with_capacity(capacity_hint)),
            config: config.validated(),
        }
    }

    /// Create an array from an existing sequence, reusing its allocation
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_with_config(items, Config::default())
    }

    /// Create an array from an existing sequence with a custom growth policy
    pub fn from_vec_with_config(items: Vec<T>, config: Config) -> Self {
        Self {
            buf: Arc::new(items),
            config: config.validated(),
        }
    }

    /// Create a one-element array
    pub fn singleton(value: T) -> Self {
        Self::from_vec(vec![value])
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of elements (alias of `len`)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Allocated slots in the backing buffer.
    ///
    /// A push may still allocate when `len < capacity` if the buffer is shared.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Number of handles sharing the backing buffer
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.buf)
    }

    /// Check if we own the only handle to the buffer
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.buf) == 1
    }

    /// Check if two handles share one backing buffer
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.buf, &other.buf)
    }

    /// Growth policy carried by this handle
    pub fn config(&self) -> Config {
        self.config
    }

    /// Borrow the elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Iterate in ascending index order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        self.buf
            .get(index)
            .ok_or_else(|| ArrayError::index(index, self.len()))
    }

    /// Element at `index`, or `None` when out of bounds
    pub fn get_opt(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Last element
    pub fn back(&self) -> Result<&T> {
        self.buf.last().ok_or(ArrayError::Empty)
    }

    /// Last element, or `None` when empty
    pub fn back_opt(&self) -> Option<&T> {
        self.buf.last()
    }
}

impl<T: Clone> CowArray<T> {
    /// Array of `n` copies of `value`
    pub fn replicate(n: usize, value: T) -> Self {
        Self::from_vec(vec![value; n])
    }

    /// Copy the elements into a plain vector, ascending order
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.as_ref().clone()
    }

    /// Take the elements out, copying only if the buffer is shared
    pub fn into_vec(self) -> Vec<T> {
        Arc::try_unwrap(self.buf).unwrap_or_else(|shared| shared.as_ref().clone())
    }

    /// Element at `index`, or `default` when out of bounds
    pub fn get_or(&self, index: usize, default: T) -> T {
        self.buf.get(index).cloned().unwrap_or(default)
    }

    /// Element at `index`, or `T::default()` when out of bounds.
    ///
    /// Out-of-bounds access here is a caller bug; it is logged, never raised.
    pub fn get_or_default(&self, index: usize) -> T
    where
        T: Default,
    {
        match self.buf.get(index) {
            Some(value) => value.clone(),
            None => {
                tracing::error!(index, len = self.len(), "array index out of bounds");
                T::default()
            }
        }
    }

    /// Replace the element at `index`.
    ///
    /// Writes in place when this handle is unique, otherwise copies first.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        let len = self.len();
        self.make_unique(len)[index] = value;
        Ok(())
    }

    /// Replace the element at `index`, returning the previous value
    pub fn swap_at(&mut self, index: usize, value: T) -> Result<T> {
        self.check_index(index)?;
        let len = self.len();
        let items = self.make_unique(len);
        Ok(std::mem::replace(&mut items[index], value))
    }

    /// Exchange the elements at `i` and `j`
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i != j {
            let len = self.len();
            self.make_unique(len).swap(i, j);
        }
        Ok(())
    }

    /// Update the element at `index` in place
    pub fn modify<F>(&mut self, index: usize, f: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        self.check_index(index)?;
        let len = self.len();
        f(&mut self.make_unique(len)[index]);
        Ok(())
    }

    /// Append an element.
    ///
    /// Amortized O(1) on a unique buffer. A shared buffer is always copied,
    /// even when it has spare capacity.
    pub fn push(&mut self, value: T) {
        let required = self.len() + 1;
        self.make_unique(required);
        self.grow_to(required);
        Arc::make_mut(&mut self.buf).push(value);
    }

    /// Remove and return the last element.
    ///
    /// Never shrinks the backing buffer of a unique handle.
    pub fn pop(&mut self) -> Result<T> {
        let len = self.len();
        if len == 0 {
            return Err(ArrayError::Empty);
        }

        if let Some(items) = Arc::get_mut(&mut self.buf) {
            tracing::trace!(len, "popping from unique array buffer");
            return items.pop().ok_or(ArrayError::Empty);
        }

        let last = self.buf[len - 1].clone();
        self.buf = Arc::new(self.copy_prefix(len - 1, len - 1));
        Ok(last)
    }

    /// Keep only the first `n` elements
    pub fn shrink(&mut self, n: usize) -> Result<()> {
        let len = self.len();
        if n > len {
            return Err(ArrayError::range(0, n, len));
        }
        if n == len {
            return Ok(());
        }

        match Arc::get_mut(&mut self.buf) {
            Some(items) => items.truncate(n),
            None => self.buf = Arc::new(self.copy_prefix(n, n)),
        }
        Ok(())
    }

    /// Independent copy of `len` elements starting at `start`.
    ///
    /// The result never aliases this buffer.
    pub fn extract(&self, start: usize, len: usize) -> Result<Self> {
        let size = self.len();
        let end = start
            .checked_add(len)
            .filter(|&end| end <= size)
            .ok_or_else(|| ArrayError::range(start, len, size))?;
        Ok(Self::from_vec_with_config(
            self.buf[start..end].to_vec(),
            self.config,
        ))
    }

    /// Ensure room for `additional` more elements
    ///
    /// Does nothing, and keeps a shared buffer shared, when the headroom
    /// already exists.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len().saturating_add(additional);
        if required <= self.capacity() {
            return;
        }
        self.make_unique(required);
        self.grow_to(required);
    }

    /// Remove all elements, keeping the buffer when unique
    pub fn clear(&mut self) {
        match Arc::get_mut(&mut self.buf) {
            Some(items) => items.clear(),
            None => self.buf = Arc::new(Vec::new()),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(ArrayError::index(index, self.len()))
        }
    }

    /// Fresh buffer holding the first `n` elements with room for `required`
    fn copy_prefix(&self, n: usize, required: usize) -> Vec<T> {
        let target = self.config.copy_capacity(self.capacity(), required);
        tracing::debug!(
            copied = n,
            refs = self.ref_count(),
            capacity = target,
            "copying shared array buffer"
        );
        let mut items = Vec::with_capacity(target);
        items.extend_from_slice(&self.buf[..n]);
        items
    }

    /// Make this handle the sole owner of its buffer.
    ///
    /// A shared buffer is replaced by a copy sized for `required` elements.
    fn make_unique(&mut self, required: usize) -> &mut Vec<T> {
        if Arc::get_mut(&mut self.buf).is_some() {
            tracing::trace!(len = self.len(), "mutating unique array buffer in place");
        } else {
            self.buf = Arc::new(self.copy_prefix(self.len(), required));
        }
        // Unique at this point, so this never clones
        Arc::make_mut(&mut self.buf)
    }

    /// Grow a unique buffer geometrically until it holds `required` slots
    fn grow_to(&mut self, required: usize) {
        let config = self.config;
        let items = Arc::make_mut(&mut self.buf);
        let capacity = items.capacity();
        if required > capacity {
            let target = config.grown_capacity(capacity, required);
            tracing::debug!(from = capacity, to = target, "growing array buffer");
            items.reserve_exact(target - items.len());
        }
    }
}

impl<T> Clone for CowArray<T> {
    fn clone(&self) -> Self {
        Self {
            buf: Arc::clone(&self.buf),
            config: self.config,
        }
    }
}

impl<T> Default for CowArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CowArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CowArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for CowArray<T> {}

impl<T: Hash> Hash for CowArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for CowArray<T> {
    type Output = T;

    /// Panics if `index` is out of bounds; see `get` for the checked form.
    fn index(&self, index: usize) -> &T {
        &self.buf[index]
    }
}

impl<T> From<Vec<T>> for CowArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Clone> From<&[T]> for CowArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }
}

impl<T> FromIterator<T> for CowArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> Extend<T> for CowArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Clone> IntoIterator for CowArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CowArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
