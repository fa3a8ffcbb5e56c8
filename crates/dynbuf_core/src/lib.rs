//! # DYNBUF Core
//!
//! A growable buffer of `i64` values backed by a single contiguous
//! allocation.
//!
//! ## Architecture Rules
//!
//! 1. **One owner** - The array exclusively owns its storage block
//! 2. **Doubling growth** - Capacity multiplies by 2 (minimum 1) when full
//! 3. **Never shrinks** - `pop`, `pop_at` and `remove` keep the capacity
//! 4. **Explicit failures** - Every bounds/existence violation is an `Err`,
//!    and a failed operation leaves the array untouched
//!
//! ## Example
//!
//! ```rust
//! use dynbuf_core::DynamicArray;
//!
//! let mut arr = DynamicArray::from_values(&[1, 2, 3]);
//! arr.append(4)?;
//! assert_eq!(arr.pop()?, 4);
//! arr.insert(1, 9)?;
//! assert_eq!(arr.as_slice(), &[1, 9, 2, 3]);
//! # Ok::<(), dynbuf_core::ArrayError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod array;
pub mod config;
pub mod error;
pub mod sync;

pub use array::{DynamicArray, GrowthPolicy};
pub use config::ArrayConfig;
pub use error::{ArrayError, ArrayResult};
pub use sync::SharedArray;
