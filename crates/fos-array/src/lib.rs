//! fOS Array - Copy-on-Write Arrays
//!
//! A growable array with a value-style API: cloning a handle is O(1) and
//! shares the buffer, and every mutator updates in place when the handle
//! is the only one alive. Shared buffers are copied before the first write,
//! so no handle ever observes another handle's updates.
//!
//! # Example
//! ```rust
//! use fos_array::CowArray;
//!
//! let mut a = CowArray::from_vec(vec![1, 2, 3]);
//! let snapshot = a.clone();
//!
//! a.push(4);
//! a.set(1, 9)?;
//!
//! assert_eq!(a.as_slice(), &[1, 9, 3, 4]);
//! assert_eq!(snapshot.as_slice(), &[1, 2, 3]);
//! # Ok::<(), fos_array::ArrayError>(())
//! ```

mod array;
mod config;
mod error;
#[cfg(feature = "serde")]
mod serialize;

pub use array::CowArray;
pub use config::Config;
pub use error::{ArrayError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
