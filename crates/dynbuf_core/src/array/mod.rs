//! # Dynamic Array
//!
//! A growable `i64` buffer over one contiguous allocation.
//!
//! ## Layout
//!
//! ```text
//!  storage: [ v0 | v1 | v2 | ... | v(len-1) | -- | -- ]
//!            ^                               ^         ^
//!            0                              len     capacity
//! ```
//!
//! Slots `[0, len)` are live. Slots `[len, capacity)` are allocated but
//! never observable through the public API.
//!
//! ## Design Philosophy
//!
//! - Growth happens in exactly two places (`append` and `insert`), both
//!   routed through [`GrowthPolicy`]
//! - Capacity only grows
//! - Growth replaces the whole block; the borrow checker guarantees nobody
//!   holds a reference into the old one

mod dynamic;
mod growth;

pub use dynamic::DynamicArray;
pub use growth::GrowthPolicy;
