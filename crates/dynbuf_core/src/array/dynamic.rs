//! # DynamicArray
//!
//! The growable buffer itself. Capacity and length are tracked explicitly;
//! the backing block is a boxed slice whose length *is* the capacity.

use std::fmt;

use super::growth::GrowthPolicy;
use crate::config::ArrayConfig;
use crate::error::{ArrayError, ArrayResult};

/// A growable array of `i64` values over one contiguous allocation.
///
/// This array guarantees:
/// - `len() <= capacity()` at all times
/// - Capacity never shrinks
/// - A failed operation leaves length, capacity and contents unchanged
///
/// # Thread Safety
///
/// This array is NOT internally synchronized. Share it through
/// [`SharedArray`](crate::SharedArray), which locks the whole array.
///
/// # Example
///
/// ```rust
/// use dynbuf_core::DynamicArray;
///
/// let mut arr = DynamicArray::new();
/// arr.append(3)?;
/// arr.append(1)?;
/// arr.append(2)?;
/// arr.sort();
/// assert_eq!(arr.as_slice(), &[1, 2, 3]);
/// # Ok::<(), dynbuf_core::ArrayError>(())
/// ```
#[derive(Clone)]
pub struct DynamicArray {
    /// The backing block. Its length is the capacity.
    storage: Box<[i64]>,
    /// Number of live elements at the front of `storage`.
    len: usize,
}

impl DynamicArray {
    /// Creates an empty array with the default capacity (4).
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty array sized by `config`.
    #[must_use]
    pub fn with_config(config: &ArrayConfig) -> Self {
        Self::with_policy(GrowthPolicy::from_config(config))
    }

    /// Creates an array holding a copy of `items`, in order.
    ///
    /// Capacity is `2 * items.len()` when there are more than 4 items,
    /// otherwise 4. No further allocation happens until the length exceeds
    /// that capacity.
    ///
    /// # Arguments
    ///
    /// * `items` - Initial contents
    #[must_use]
    pub fn from_values(items: &[i64]) -> Self {
        Self::from_values_with_policy(GrowthPolicy::default(), items)
    }

    /// Creates an array holding a copy of `items`, sized by `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the minimum capacity
    /// * `items` - Initial contents
    #[must_use]
    pub fn from_values_with(config: &ArrayConfig, items: &[i64]) -> Self {
        Self::from_values_with_policy(GrowthPolicy::from_config(config), items)
    }

    fn with_policy(policy: GrowthPolicy) -> Self {
        Self::from_values_with_policy(policy, &[])
    }

    fn from_values_with_policy(policy: GrowthPolicy, items: &[i64]) -> Self {
        let capacity = policy.capacity_for(items.len());
        let mut block = Vec::with_capacity(capacity);
        block.extend_from_slice(items);
        block.resize(capacity, 0);

        tracing::debug!(len = items.len(), capacity, "array created");

        Self {
            storage: block.into_boxed_slice(),
            len: items.len(),
        }
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the live elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.storage[..self.len]
    }

    /// Iterates over the live elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.as_slice().iter()
    }

    /// Reads the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> ArrayResult<i64> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Overwrites the element at `index` in place.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: i64) -> ArrayResult<()> {
        let len = self.len;
        let slot = self.storage[..len]
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Appends `value` at the end, doubling the capacity first if full.
    ///
    /// Amortized O(1); O(n) on a growth step.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailed`] if the array is full and the
    /// doubled block cannot be allocated.
    pub fn append(&mut self, value: i64) -> ArrayResult<()> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.storage[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element. Capacity is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::EmptyContainer`] if the array is empty.
    pub fn pop(&mut self) -> ArrayResult<i64> {
        if self.len == 0 {
            return Err(ArrayError::EmptyContainer);
        }
        self.len -= 1;
        Ok(self.storage[self.len])
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// O(n - index).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn pop_at(&mut self, index: usize) -> ArrayResult<i64> {
        let value = self.get(index)?;
        self.storage.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(value)
    }

    /// Inserts `value` at `index`, shifting `[index, len)` right by one.
    ///
    /// `index == len()` is an append. Grows first if full. O(n - index).
    ///
    /// # Errors
    ///
    /// - [`ArrayError::IndexOutOfRange`] if `index > len()`
    /// - [`ArrayError::AllocationFailed`] if growth is needed and fails
    pub fn insert(&mut self, index: usize, value: i64) -> ArrayResult<()> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.storage.copy_within(index..self.len, index + 1);
        self.storage[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ValueNotFound`] if no element equals `value`.
    pub fn remove(&mut self, value: i64) -> ArrayResult<()> {
        let index = self.index_of(value)?;
        self.pop_at(index)?;
        Ok(())
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ValueNotFound`] if no element equals `value`.
    pub fn index_of(&self, value: i64) -> ArrayResult<usize> {
        self.iter()
            .position(|&v| v == value)
            .ok_or(ArrayError::ValueNotFound { value })
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.as_slice().contains(&value)
    }

    /// Counts the elements equal to `value`. Zero is a valid answer.
    #[must_use]
    pub fn count(&self, value: i64) -> usize {
        self.iter().filter(|&&v| v == value).count()
    }

    /// Sorts the elements in ascending order, in place.
    ///
    /// Equal elements may be reordered among themselves.
    pub fn sort(&mut self) {
        self.storage[..self.len].sort_unstable();
    }

    /// Reverses the element order, in place.
    pub fn reverse(&mut self) {
        self.storage[..self.len].reverse();
    }

    /// Replaces the backing block with one of the next capacity.
    ///
    /// On error the old block is untouched.
    fn grow(&mut self) -> ArrayResult<()> {
        let old_capacity = self.capacity();
        let new_capacity = GrowthPolicy::next_capacity(old_capacity)?;

        let mut block = Vec::new();
        block
            .try_reserve_exact(new_capacity)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: new_capacity,
            })?;
        block.extend_from_slice(self.as_slice());
        block.resize(new_capacity, 0);
        self.storage = block.into_boxed_slice();

        tracing::trace!(old_capacity, new_capacity, len = self.len, "array grew");
        Ok(())
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[i64]> for DynamicArray {
    fn from(items: &[i64]) -> Self {
        Self::from_values(items)
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Equality compares live elements only; capacity is ignored.
impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynamicArray {}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("values", &self.as_slice())
            .finish()
    }
}

impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
