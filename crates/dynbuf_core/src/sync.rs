//! # Shared Array Handle
//!
//! `DynamicArray` is single-owner: `append` and `insert` can replace the
//! whole backing block, so locking individual operations is not enough.
//! `SharedArray` puts the entire array behind one mutex and hands out
//! cloneable handles.
//!
//! ```text
//!   handle A ──┐
//!   handle B ──┼──► Arc<Mutex<DynamicArray>>
//!   handle C ──┘         (one lock, whole array)
//! ```
//!
//! A multi-step sequence (check then mutate) must run inside a single
//! [`SharedArray::with_mut`] call to be atomic.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::array::DynamicArray;
use crate::error::ArrayResult;

/// Cloneable, thread-safe handle to one [`DynamicArray`].
///
/// # Example
///
/// ```rust
/// use dynbuf_core::{DynamicArray, SharedArray};
///
/// let shared = SharedArray::new(DynamicArray::from_values(&[1, 2, 3]));
/// let other = shared.clone();
///
/// std::thread::spawn(move || other.append(4)).join().unwrap()?;
/// assert_eq!(shared.snapshot(), vec![1, 2, 3, 4]);
/// # Ok::<(), dynbuf_core::ArrayError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedArray {
    inner: Arc<Mutex<DynamicArray>>,
}

impl SharedArray {
    /// Wraps an array for shared access.
    #[must_use]
    pub fn new(array: DynamicArray) -> Self {
        Self {
            inner: Arc::new(Mutex::new(array)),
        }
    }

    /// Runs `f` with shared access under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&DynamicArray) -> R) -> R {
        let guard = self.inner.lock();
        f(&guard)
    }

    /// Runs `f` with exclusive access under the lock.
    ///
    /// Everything `f` does is atomic with respect to other handles.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut DynamicArray) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Appends `value` under the lock.
    ///
    /// # Errors
    ///
    /// See [`DynamicArray::append`].
    pub fn append(&self, value: i64) -> ArrayResult<()> {
        self.with_mut(|arr| arr.append(value))
    }

    /// Pops the last element under the lock.
    ///
    /// # Errors
    ///
    /// See [`DynamicArray::pop`].
    pub fn pop(&self) -> ArrayResult<i64> {
        self.with_mut(DynamicArray::pop)
    }

    /// Returns the current length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.with(DynamicArray::len)
    }

    /// Returns `true` if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with(DynamicArray::is_empty)
    }

    /// Copies the live elements out.
    #[must_use]
    pub fn snapshot(&self) -> Vec<i64> {
        self.with(|arr| arr.as_slice().to_vec())
    }

    /// Unwraps the array if this is the last handle.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged if other handles are still alive.
    pub fn try_into_inner(self) -> Result<DynamicArray, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_appends() {
        let shared = SharedArray::new(DynamicArray::new());
        let threads = 8;
        let per_thread = 500;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..per_thread {
                        shared.append(t * 1_000 + i).unwrap();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.len(), (threads * per_thread) as usize);
        // Each thread's values stay in the order that thread wrote them
        let snapshot = shared.snapshot();
        for t in 0..threads {
            let mine: Vec<i64> = snapshot
                .iter()
                .copied()
                .filter(|v| v / 1_000 == t)
                .collect();
            let expected: Vec<i64> = (0..per_thread).map(|i| t * 1_000 + i).collect();
            assert_eq!(mine, expected);
        }
    }

    #[test]
    fn test_with_mut_is_atomic_sequence() {
        let shared = SharedArray::new(DynamicArray::from_values(&[3, 1, 2]));
        let moved = shared.with_mut(|arr| {
            arr.sort();
            arr.reverse();
            arr.pop()
        });
        assert_eq!(moved, Ok(1));
        assert_eq!(shared.snapshot(), vec![3, 2]);
    }

    #[test]
    fn test_pop_empty_through_handle() {
        let shared = SharedArray::default();
        assert!(shared.is_empty());
        assert_eq!(shared.pop().unwrap_err().code(), -2);
    }

    #[test]
    fn test_try_into_inner() {
        let shared = SharedArray::new(DynamicArray::from_values(&[1]));
        let other = shared.clone();
        let shared = shared.try_into_inner().unwrap_err();
        drop(other);
        let arr = shared.try_into_inner().unwrap();
        assert_eq!(arr.as_slice(), &[1]);
    }
}
