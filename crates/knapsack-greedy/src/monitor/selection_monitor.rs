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

use crate::{
    rank::{RankedCatalog, RankedItem, RatioGroup},
    stats::SelectionStatistics,
};

/// Observes a greedy selection pass.
///
/// Monitors see every decision but cannot change it.
pub trait SelectionMonitor {
    /// Called once before the first group is scanned.
    fn on_enter_selection(&mut self, catalog: &RankedCatalog, capacity: u32);

    /// Called when a ratio group is entered.
    fn on_group(&mut self, _group: &RatioGroup<'_>, _remaining_capacity: u32) {}

    /// Called after an item was placed; `remaining_capacity` already excludes it.
    fn on_accept(&mut self, entry: &RankedItem, remaining_capacity: u32);

    /// Called when an item is skipped because it does not fit.
    fn on_reject(&mut self, entry: &RankedItem, remaining_capacity: u32);

    /// Called once when the pass is finished.
    fn on_exit_selection(&mut self, statistics: &SelectionStatistics);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<M> SelectionMonitor for &mut M
where
    M: SelectionMonitor + ?Sized,
{
    #[inline]
    fn on_enter_selection(&mut self, catalog: &RankedCatalog, capacity: u32) {
        (**self).on_enter_selection(catalog, capacity);
    }

    #[inline]
    fn on_group(&mut self, group: &RatioGroup<'_>, remaining_capacity: u32) {
        (**self).on_group(group, remaining_capacity);
    }

    #[inline]
    fn on_accept(&mut self, entry: &RankedItem, remaining_capacity: u32) {
        (**self).on_accept(entry, remaining_capacity);
    }

    #[inline]
    fn on_reject(&mut self, entry: &RankedItem, remaining_capacity: u32) {
        (**self).on_reject(entry, remaining_capacity);
    }

    #[inline]
    fn on_exit_selection(&mut self, statistics: &SelectionStatistics) {
        (**self).on_exit_selection(statistics);
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl std::fmt::Debug for dyn SelectionMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SelectionMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SelectionMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SelectionMonitor({})", self.name())
    }
}
