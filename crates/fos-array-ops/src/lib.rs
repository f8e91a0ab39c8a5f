//! fOS Array Ops - Array Algorithms
//!
//! Traversal, search and editing over [`CowArray`]. Every operation is
//! written against the public `CowArray` primitives only, so in-place vs.
//! copy decisions are always made by the array itself.
//!
//! # Example
//! ```rust
//! use fos_array::CowArray;
//! use fos_array_ops::prelude::*;
//!
//! let mut a = CowArray::from_vec(vec![1, 3]);
//! a.insert_at(1, 2)?;
//! a.reverse();
//!
//! assert_eq!(a.as_slice(), &[3, 2, 1]);
//! assert_eq!(a.zip_with(&CowArray::from_vec(vec![10, 20]), |x, y| x + y).as_slice(), &[13, 22]);
//! # Ok::<(), fos_array::ArrayError>(())
//! ```

pub mod edit;
pub mod fold;
pub mod search;
pub mod transform;

pub use edit::Edit;
pub use fold::{Fold, Step};
pub use search::Search;
pub use transform::{Transform, Unzip};

pub use fos_array::{ArrayError, Config, CowArray, Result};

/// Glob-import to bring every extension trait into scope
pub mod prelude {
    pub use crate::{Edit, Fold, Search, Step, Transform, Unzip};
}
