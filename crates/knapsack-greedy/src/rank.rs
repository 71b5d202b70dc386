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

//! Density ranking.
//!
//! `RankedCatalog::rank` orders items by density ratio (descending) and, among
//! equal ratios, by weight (ascending). Items that tie on both keep their
//! generation order, and all of them are retained: two items with the same
//! ratio and the same weight are both offered to the selector.
//!
//! A *ratio group* is a maximal run of ranked items sharing one ratio.
//! `RankedCatalog::groups` walks those runs in ranked order.
//!
//! Ordering
//! - Total order on `RankedItem`: ratio descending, then weight ascending,
//!   then catalog position ascending.

use knapsack_core::num::ratio::DensityRatio;
use knapsack_model::{index::ItemIndex, item::Item};
use std::iter::FusedIterator;

/// An item together with its catalog position and precomputed ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankedItem {
    index: ItemIndex,
    item: Item,
    ratio: DensityRatio,
}

impl RankedItem {
    #[inline]
    pub fn new(index: ItemIndex, item: Item) -> Self {
        Self {
            index,
            item,
            ratio: item.density_ratio(),
        }
    }

    /// Position of the item in the sequence it was ranked from.
    #[inline(always)]
    pub fn index(&self) -> ItemIndex {
        self.index
    }

    #[inline(always)]
    pub fn item(&self) -> &Item {
        &self.item
    }

    #[inline(always)]
    pub fn ratio(&self) -> DensityRatio {
        self.ratio
    }

    #[inline(always)]
    pub fn weight(&self) -> u32 {
        self.item.weight()
    }
}

impl PartialOrd for RankedItem {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedItem {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Highest ratio first
        other
            .ratio
            .cmp(&self.ratio)
            .then_with(|| self.weight().cmp(&other.weight()))
            // Positions are unique, so an unstable sort still keeps input order on ties
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl std::fmt::Display for RankedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Ratio:{}", self.item, self.ratio)
    }
}

/// Items in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedCatalog {
    entries: Vec<RankedItem>,
}

impl RankedCatalog {
    /// Ranks `items`. Each item keeps its position in `items` as its index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knapsack_core::num::fixed::Cents;
    /// # use knapsack_greedy::rank::RankedCatalog;
    /// # use knapsack_model::item::Item;
    /// let items = [
    ///     Item::new(2, Cents::new(300)),
    ///     Item::new(1, Cents::new(500)),
    /// ];
    /// let catalog = RankedCatalog::rank(&items);
    /// assert_eq!(catalog.entries()[0].item(), &items[1]);
    /// ```
    pub fn rank(items: &[Item]) -> Self {
        let mut entries: Vec<RankedItem> = items
            .iter()
            .enumerate()
            .map(|(i, item)| RankedItem::new(ItemIndex::new(i), *item))
            .collect();
        entries.sort_unstable();
        Self { entries }
    }

    /// Returns the number of ranked items.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the ranked items as a flat slice.
    #[inline]
    pub fn entries(&self) -> &[RankedItem] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RankedItem> {
        self.entries.iter()
    }

    /// Iterates over ratio groups, highest ratio first.
    #[inline]
    pub fn groups(&self) -> RatioGroups<'_> {
        RatioGroups {
            iter: self.entries.chunk_by(same_ratio as SameRatio),
        }
    }

    /// Returns the number of distinct ratios.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.groups().count()
    }
}

impl<'a> IntoIterator for &'a RankedCatalog {
    type Item = &'a RankedItem;
    type IntoIter = std::slice::Iter<'a, RankedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Ranks `items`; see `RankedCatalog::rank`.
#[inline]
pub fn rank(items: &[Item]) -> RankedCatalog {
    RankedCatalog::rank(items)
}

type SameRatio = fn(&RankedItem, &RankedItem) -> bool;

fn same_ratio(a: &RankedItem, b: &RankedItem) -> bool {
    a.ratio == b.ratio
}

/// A run of ranked items sharing one density ratio, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioGroup<'a> {
    ratio: DensityRatio,
    entries: &'a [RankedItem],
}

impl<'a> RatioGroup<'a> {
    #[inline]
    pub fn ratio(&self) -> DensityRatio {
        self.ratio
    }

    #[inline]
    pub fn entries(&self) -> &'a [RankedItem] {
        self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; groups are built from non-empty runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator over the ratio groups of a `RankedCatalog`.
#[derive(Debug, Clone)]
pub struct RatioGroups<'a> {
    iter: std::slice::ChunkBy<'a, RankedItem, SameRatio>,
}

impl<'a> Iterator for RatioGroups<'a> {
    type Item = RatioGroup<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|entries| RatioGroup {
            ratio: entries[0].ratio,
            entries,
        })
    }
}

impl<'a> FusedIterator for RatioGroups<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use knapsack_core::num::fixed::Cents;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::num::NonZeroU32;

    fn item(weight: u32, cents: u64) -> Item {
        Item::new(weight, Cents::new(cents))
    }

    fn assert_ranked(catalog: &RankedCatalog) {
        for pair in catalog.entries().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.ratio() >= b.ratio(),
                "ratios must be non-increasing: {} before {}",
                a,
                b
            );
            if a.ratio() == b.ratio() {
                assert!(
                    a.weight() <= b.weight(),
                    "weights must be non-decreasing within a ratio: {} before {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_scenario_order() {
        let items = [item(1, 500), item(2, 300), item(1, 100)];
        let catalog = RankedCatalog::rank(&items);

        let ratios: Vec<String> = catalog.iter().map(|e| e.ratio().to_string()).collect();
        assert_eq!(ratios, vec!["5.00", "1.50", "1.00"]);

        let indices: Vec<usize> = catalog.iter().map(|e| e.index().get()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_equal_ratio_orders_by_weight() {
        // All three have ratio 2.00
        let items = [item(3, 600), item(1, 200), item(2, 400)];
        let catalog = RankedCatalog::rank(&items);

        let weights: Vec<u32> = catalog.iter().map(|e| e.weight()).collect();
        assert_eq!(weights, vec![1, 2, 3]);
        assert_eq!(catalog.num_groups(), 1);
    }

    #[test]
    fn test_ratio_and_weight_collisions_are_all_kept() {
        let items = [item(2, 300), item(2, 300), item(2, 299), item(1, 500)];
        let catalog = RankedCatalog::rank(&items);

        assert_eq!(catalog.len(), items.len(), "no item may be dropped");
        // 3.00/2 and 2.99/2 both round up to 1.50
        let indices: Vec<usize> = catalog.iter().map(|e| e.index().get()).collect();
        assert_eq!(indices, vec![3, 0, 1, 2], "ties keep input order");
    }

    #[test]
    fn test_groups_partition_the_catalog() {
        let items = [item(1, 500), item(2, 300), item(4, 600), item(1, 100)];
        let catalog = RankedCatalog::rank(&items);

        let groups: Vec<(String, Vec<u32>)> = catalog
            .groups()
            .map(|g| {
                (
                    g.ratio().to_string(),
                    g.entries().iter().map(|e| e.weight()).collect(),
                )
            })
            .collect();

        assert_eq!(
            groups,
            vec![
                ("5.00".to_string(), vec![1]),
                ("1.50".to_string(), vec![2, 4]),
                ("1.00".to_string(), vec![1]),
            ]
        );
        let total: usize = catalog.groups().map(|g| g.len()).sum();
        assert_eq!(total, catalog.len());
        assert!(catalog.groups().all(|g| !g.is_empty()));
    }

    #[test]
    fn test_empty_input() {
        let catalog = rank(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.groups().next(), None);
        assert_eq!(catalog.num_groups(), 0);
    }

    #[test]
    fn test_generated_population_is_ranked() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let max_weight = NonZeroU32::new(100).expect("non-zero");
        let items = generate(&mut rng, 10_000, max_weight, 10_000);
        let catalog = RankedCatalog::rank(&items);

        assert_eq!(catalog.len(), items.len());
        assert_ranked(&catalog);
        for entry in &catalog {
            assert_eq!(entry.item(), &items[entry.index().get()]);
        }
    }

    #[test]
    fn test_display() {
        let entry = RankedItem::new(ItemIndex::new(0), item(99, 100));
        assert_eq!(entry.to_string(), "Weight: 99 Value: 1.00 Ratio:0.02");
    }
}
