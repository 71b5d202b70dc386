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

//! Greedy selection.
//!
//! `GreedySelector` fills a fixed capacity from a `RankedCatalog` in one pass.
//! Ratio groups are visited highest ratio first and, inside a group, lightest
//! item first. An item is accepted when its weight fits the remaining capacity
//! and is skipped for good otherwise; there is no backtracking and no search
//! for a substitute. Once a group finishes with the capacity used up, later
//! groups are not scanned.
//!
//! The result is a heuristic answer. A high-ratio item that leaves a little
//! capacity unused can block a lower-ratio item that would have filled it
//! exactly, and the pass accepts that.
//!
//! The pass is deterministic: the same catalog and capacity always yield the
//! same knapsack. Empty catalogs and zero capacities are valid inputs and
//! produce empty knapsacks.

use crate::{
    monitor::{no_op::NoOperationMonitor, selection_monitor::SelectionMonitor},
    rank::RankedCatalog,
    result::SelectionOutcome,
    stats::SelectionStatistics,
};
use knapsack_model::knapsack::Knapsack;
use std::time::Instant;

/// Fills a knapsack of fixed capacity by descending density ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedySelector {
    capacity: u32,
}

impl GreedySelector {
    /// Creates a selector for a knapsack of `capacity` weight units.
    #[inline]
    pub fn new(capacity: u32) -> Self {
        Self { capacity }
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Runs the greedy pass over `catalog`, reporting to `monitor`.
    pub fn select<M>(&self, catalog: &RankedCatalog, mut monitor: M) -> SelectionOutcome
    where
        M: SelectionMonitor,
    {
        let start_time = Instant::now();
        let mut statistics = SelectionStatistics::default();
        monitor.on_enter_selection(catalog, self.capacity);

        let mut remaining_capacity = self.capacity;
        let mut indices = Vec::new();
        let mut items = Vec::new();

        for group in catalog.groups() {
            statistics.on_group_scanned();
            monitor.on_group(&group, remaining_capacity);

            for entry in group.entries() {
                if entry.weight() <= remaining_capacity {
                    remaining_capacity -= entry.weight();
                    indices.push(entry.index());
                    items.push(*entry.item());
                    statistics.on_item_accepted();
                    monitor.on_accept(entry, remaining_capacity);
                } else {
                    statistics.on_item_rejected();
                    monitor.on_reject(entry, remaining_capacity);
                }
            }

            // Only checked between groups
            if remaining_capacity == 0 {
                statistics.on_capacity_exhausted();
                break;
            }
        }

        statistics.set_selection_duration(start_time.elapsed());
        monitor.on_exit_selection(&statistics);

        SelectionOutcome::new(Knapsack::new(self.capacity, indices, items), statistics)
    }

    /// Runs the greedy pass without a monitor.
    #[inline]
    pub fn select_silent(&self, catalog: &RankedCatalog) -> SelectionOutcome {
        self.select(catalog, NoOperationMonitor::new())
    }
}

/// Fills a knapsack of `capacity` from `catalog`; see `GreedySelector`.
#[inline]
pub fn select(catalog: &RankedCatalog, capacity: u32) -> Knapsack {
    GreedySelector::new(capacity)
        .select_silent(catalog)
        .into_knapsack()
}
