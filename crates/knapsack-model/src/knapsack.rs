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

use crate::{index::ItemIndex, item::Item};
use knapsack_core::num::fixed::Cents;

/// The contents of a knapsack after one selection pass.
///
/// Structure of Arrays layout: `indices[i]` is the catalog position of
/// `items[i]`, and both are kept in acceptance order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Knapsack {
    /// The capacity the knapsack was filled against.
    capacity: u32,

    /// Positions of the accepted items in the generated sequence.
    indices: Vec<ItemIndex>,

    /// The accepted items.
    items: Vec<Item>,

    /// Sum of the accepted weights.
    total_weight: u64,
}

impl Knapsack {
    /// Constructs a new `Knapsack`.
    ///
    /// # Panics
    ///
    /// Panics if `indices` and `items` have different lengths, or if the
    /// summed weight of `items` exceeds `capacity`.
    pub fn new(capacity: u32, indices: Vec<ItemIndex>, items: Vec<Item>) -> Self {
        assert_eq!(
            indices.len(),
            items.len(),
            "called Knapsack::new with inconsistent vector lengths: indices.len() = {}, items.len() = {}",
            indices.len(),
            items.len()
        );

        let total_weight: u64 = items.iter().map(|item| u64::from(item.weight())).sum();
        assert!(
            total_weight <= u64::from(capacity),
            "called Knapsack::new with overfilled contents: total weight = {}, capacity = {}",
            total_weight,
            capacity
        );

        Self {
            capacity,
            indices,
            items,
            total_weight,
        }
    }

    /// Returns an empty knapsack of the given capacity.
    #[inline]
    pub fn empty(capacity: u32) -> Self {
        Self::new(capacity, Vec::new(), Vec::new())
    }

    /// Returns the capacity the knapsack was filled against.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the accepted items in acceptance order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the catalog positions of the accepted items in acceptance order.
    #[inline]
    pub fn indices(&self) -> &[ItemIndex] {
        &self.indices
    }

    /// Iterates over `(position, item)` pairs in acceptance order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (ItemIndex, &Item)> + '_ {
        self.indices.iter().copied().zip(self.items.iter())
    }

    /// Returns the number of accepted items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the summed weight of the accepted items.
    #[inline]
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Returns the summed value of the accepted items.
    #[inline]
    pub fn total_value(&self) -> Cents {
        self.items.iter().map(Item::value).sum()
    }

    /// Returns the capacity left unused.
    #[inline]
    pub fn remaining_capacity(&self) -> u32 {
        // Bounded by `capacity` through the constructor check.
        self.capacity - self.total_weight as u32
    }
}

impl std::fmt::Display for Knapsack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Knapsack Summary")?;
        writeln!(f, "   Capacity: {}", self.capacity)?;
        writeln!(f, "   Total Weight: {}", self.total_weight)?;
        writeln!(f, "   Total Value: {}", self.total_value())?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "   (No items selected)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10} | {:<12}", "Item", "Weight", "Value")?;
        writeln!(f, "   {:-<10}-+-{:-<10}-+-{:-<12}", "", "", "")?;
        for (index, item) in self.iter() {
            writeln!(
                f,
                "   {:<10} | {:<10} | {:<12}",
                index.get(),
                item.weight(),
                item.value().to_string()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn item(weight: u32, cents: u64) -> Item {
        Item::new(weight, Cents::new(cents))
    }

    #[test]
    fn test_new_and_derived_totals() {
        let knapsack = Knapsack::new(5, vec![ii(0), ii(2)], vec![item(1, 500), item(1, 100)]);

        assert_eq!(knapsack.capacity(), 5);
        assert_eq!(knapsack.len(), 2);
        assert_eq!(knapsack.total_weight(), 2);
        assert_eq!(knapsack.total_value(), Cents::new(600));
        assert_eq!(knapsack.total_value().to_string(), "6.00");
        assert_eq!(knapsack.remaining_capacity(), 3);
        assert_eq!(knapsack.indices(), &[ii(0), ii(2)]);
    }

    #[test]
    fn test_empty_knapsack() {
        let knapsack = Knapsack::empty(10);
        assert!(knapsack.is_empty());
        assert_eq!(knapsack.total_weight(), 0);
        assert_eq!(knapsack.total_value().to_string(), "0.00");
        assert_eq!(knapsack.remaining_capacity(), 10);
    }

    #[test]
    #[should_panic(expected = "called Knapsack::new with inconsistent vector lengths")]
    fn test_new_panics_on_length_mismatch() {
        let _ = Knapsack::new(3, vec![ii(0)], vec![]);
    }

    #[test]
    #[should_panic(expected = "called Knapsack::new with overfilled contents")]
    fn test_new_panics_when_overfilled() {
        let _ = Knapsack::new(1, vec![ii(0)], vec![item(2, 100)]);
    }

    #[test]
    fn test_display_formatting_example() {
        let knapsack = Knapsack::new(2, vec![ii(0), ii(2)], vec![item(1, 500), item(1, 100)]);

        let mut expected = String::new();
        expected.push_str("Knapsack Summary\n");
        expected.push_str("   Capacity: 2\n");
        expected.push_str("   Total Weight: 2\n");
        expected.push_str("   Total Value: 6.00\n");
        expected.push('\n');
        expected.push_str("   Item       | Weight     | Value       \n");
        expected.push_str("   -----------+------------+-------------\n");
        expected.push_str("   0          | 1          | 5.00        \n");
        expected.push_str("   2          | 1          | 1.00        \n");

        assert_eq!(format!("{}", knapsack), expected);
    }

    #[test]
    fn test_display_empty() {
        let rendered = format!("{}", Knapsack::empty(0));
        assert!(rendered.contains("(No items selected)"));
    }
}
