//! # Growth Policy
//!
//! All capacity arithmetic for [`DynamicArray`](super::DynamicArray).

use crate::config::ArrayConfig;
use crate::error::{ArrayError, ArrayResult};

/// Largest capacity, in elements, whose byte size still fits in `isize`.
const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<i64>();

/// Sizing rules for construction and growth.
///
/// - Empty arrays start at `initial_capacity` slots.
/// - Arrays built from `n` values get `2 * n` slots when `n` exceeds
///   `initial_capacity`, otherwise `initial_capacity`.
/// - A full array grows to `max(1, capacity * 2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Minimum number of slots for a freshly built array. Never zero.
    initial_capacity: usize,
}

impl GrowthPolicy {
    /// Creates a policy with the given initial capacity.
    ///
    /// A zero capacity is raised to 1 so construction always allocates.
    #[inline]
    #[must_use]
    pub const fn new(initial_capacity: usize) -> Self {
        let initial_capacity = if initial_capacity == 0 {
            1
        } else {
            initial_capacity
        };
        Self { initial_capacity }
    }

    /// Creates a policy from a configuration.
    #[inline]
    #[must_use]
    pub const fn from_config(config: &ArrayConfig) -> Self {
        Self::new(config.initial_capacity)
    }

    /// Returns the capacity of an empty array.
    #[inline]
    #[must_use]
    pub const fn initial_capacity(self) -> usize {
        self.initial_capacity
    }

    /// Returns the capacity for an array built from `len` values.
    ///
    /// Small inputs get the initial capacity; larger inputs get 100% slack
    /// so the next `len` appends do not reallocate.
    #[must_use]
    pub const fn capacity_for(self, len: usize) -> usize {
        if len > self.initial_capacity {
            len.saturating_mul(2)
        } else {
            self.initial_capacity
        }
    }

    /// Returns the capacity that follows `current` when the array is full.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailed`] if the doubled capacity
    /// overflows or exceeds the largest allocatable `i64` block.
    pub fn next_capacity(current: usize) -> ArrayResult<usize> {
        if current == 0 {
            return Ok(1);
        }
        match current.checked_mul(2) {
            Some(next) if next <= MAX_CAPACITY => Ok(next),
            Some(next) => Err(ArrayError::AllocationFailed { requested: next }),
            None => Err(ArrayError::AllocationFailed {
                requested: usize::MAX,
            }),
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::from_config(&ArrayConfig::default())
    }
}
