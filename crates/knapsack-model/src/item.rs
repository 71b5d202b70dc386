// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Items offered to the knapsack.
//!
//! An `Item` pairs a strictly positive integer weight with a two-digit
//! fixed-point value. The weight is stored as a `NonZeroU32`, so every item in
//! existence can be divided by its weight; externally supplied weights are
//! checked once, in `Item::try_new`, and never again downstream.

use knapsack_core::num::{fixed::Cents, ratio::DensityRatio};
use std::num::NonZeroU32;

/// Returned when an item is constructed with a weight of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidItemError {
    /// The rejected value of the item.
    pub value: Cents,
}

impl std::fmt::Display for InvalidItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid item: weight must be at least 1 (value {})",
            self.value
        )
    }
}

impl std::error::Error for InvalidItemError {}

/// A weighted, valued item. Immutable once built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    weight: NonZeroU32,
    value: Cents,
}

impl Item {
    /// Builds an item from an already validated weight.
    #[inline(always)]
    pub const fn with_weight(weight: NonZeroU32, value: Cents) -> Self {
        Self { weight, value }
    }

    /// Builds an item, rejecting a zero weight.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knapsack_model::item::Item;
    /// # use knapsack_core::num::fixed::Cents;
    /// assert!(Item::try_new(3, Cents::new(150)).is_ok());
    /// assert!(Item::try_new(0, Cents::new(150)).is_err());
    /// ```
    #[inline]
    pub fn try_new(weight: u32, value: Cents) -> Result<Self, InvalidItemError> {
        NonZeroU32::new(weight)
            .map(|weight| Self::with_weight(weight, value))
            .ok_or(InvalidItemError { value })
    }

    /// Builds an item.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is zero.
    #[inline]
    pub fn new(weight: u32, value: Cents) -> Self {
        match NonZeroU32::new(weight) {
            Some(weight) => Self::with_weight(weight, value),
            None => panic!("called `Item::new` with a zero weight (value {})", value),
        }
    }

    /// Returns the weight.
    #[inline(always)]
    pub const fn weight(&self) -> u32 {
        self.weight.get()
    }

    /// Returns the weight as a non-zero integer.
    #[inline(always)]
    pub const fn non_zero_weight(&self) -> NonZeroU32 {
        self.weight
    }

    /// Returns the value.
    #[inline(always)]
    pub const fn value(&self) -> Cents {
        self.value
    }

    /// Returns the value per unit of weight, rounded up to the next hundredth.
    #[inline]
    pub fn density_ratio(&self) -> DensityRatio {
        DensityRatio::of(self.value, self.weight)
    }
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("weight", &self.weight.get())
            .field("value", &self.value)
            .finish()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Weight: {} Value: {}", self.weight, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_positive_weight() {
        let item = Item::try_new(2, Cents::new(300)).expect("weight 2 is valid");
        assert_eq!(item.weight(), 2);
        assert_eq!(item.value(), Cents::new(300));
        assert_eq!(item.density_ratio().to_string(), "1.50");
    }

    #[test]
    fn test_try_new_rejects_zero_weight() {
        let err = Item::try_new(0, Cents::new(500)).unwrap_err();
        assert_eq!(err, InvalidItemError { value: Cents::new(500) });
        assert_eq!(
            err.to_string(),
            "Invalid item: weight must be at least 1 (value 5.00)"
        );
    }

    #[test]
    #[should_panic(expected = "called `Item::new` with a zero weight")]
    fn test_new_panics_on_zero_weight() {
        let _ = Item::new(0, Cents::new(1));
    }

    #[test]
    fn test_items_without_identity_compare_by_fields() {
        let a = Item::new(1, Cents::new(500));
        let b = Item::new(1, Cents::new(500));
        let c = Item::new(1, Cents::new(100));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_and_debug() {
        let item = Item::new(4, Cents::new(1005));
        assert_eq!(item.to_string(), "Weight: 4 Value: 10.05");
        let dbg = format!("{:?}", item);
        assert!(dbg.contains("weight: 4"));
        assert!(dbg.contains("Cents(10.05)"));
    }
}
