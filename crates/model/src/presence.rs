//! Presence bitmap for object attributes.
//!
//! Every generated object and builder keeps one [`FieldSet`] next to its plain
//! attribute values. A bit is set when the attribute was explicitly assigned,
//! either by a builder setter or by the decoder, independently of the value.

use std::fmt;

/// A set of attribute slots that have been explicitly assigned.
///
/// Slots are numbered from `0` to `FieldSet::CAPACITY - 1`. Resource objects
/// reserve slot `0` for the link flag, `1` for `id` and `2` for `href`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldSet(u128);

impl FieldSet {
    /// Maximum number of attribute slots per object.
    pub const CAPACITY: usize = 128;

    pub const fn new() -> Self {
        Self(0)
    }

    /// Panics when `index` is not below [`FieldSet::CAPACITY`].
    #[inline]
    fn mask(index: usize) -> u128 {
        assert!(index < Self::CAPACITY, "field slot {index} out of range");
        1u128 << index
    }

    /// Marks a slot as set.
    #[inline]
    pub fn set(&mut self, index: usize) {
        self.0 |= Self::mask(index);
    }

    /// Marks a slot as unset.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        self.0 &= !Self::mask(index);
    }

    /// Sets or clears a slot.
    pub fn assign(&mut self, index: usize, present: bool) {
        if present {
            self.set(index);
        } else {
            self.clear(index);
        }
    }

    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        self.0 & Self::mask(index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True when no slot other than `index` is set.
    pub fn is_empty_except(&self, index: usize) -> bool {
        self.0 & !Self::mask(index) == 0
    }

    /// Number of set slots.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the set slots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let bits = self.0;
        (0..Self::CAPACITY).filter(move |i| bits & (1u128 << i) != 0)
    }
}

impl fmt::Debug for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
