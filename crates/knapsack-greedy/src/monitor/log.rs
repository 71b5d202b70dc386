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
    monitor::selection_monitor::SelectionMonitor,
    rank::{RankedCatalog, RankedItem, RatioGroup},
    stats::SelectionStatistics,
};
use tracing::{debug, info, trace};

/// Reports a selection pass through `tracing`.
///
/// Entry and exit are logged at `info`, every accept or reject at `debug`,
/// group boundaries at `trace`.
#[derive(Debug, Clone, Default)]
pub struct LogMonitor {
    capacity: u32,
    catalog_len: usize,
}

impl LogMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(capacity: {}, catalog_len: {})",
            self.capacity, self.catalog_len
        )
    }
}

impl SelectionMonitor for LogMonitor {
    fn on_enter_selection(&mut self, catalog: &RankedCatalog, capacity: u32) {
        self.capacity = capacity;
        self.catalog_len = catalog.len();
        info!(
            capacity,
            items = catalog.len(),
            "starting greedy selection"
        );
    }

    fn on_group(&mut self, group: &RatioGroup<'_>, remaining_capacity: u32) {
        trace!(
            ratio = %group.ratio(),
            items = group.len(),
            remaining_capacity,
            "entering ratio group"
        );
    }

    fn on_accept(&mut self, entry: &RankedItem, remaining_capacity: u32) {
        debug!(
            index = entry.index().get(),
            weight = entry.weight(),
            value = %entry.item().value(),
            ratio = %entry.ratio(),
            remaining_capacity,
            "accepted item"
        );
    }

    fn on_reject(&mut self, entry: &RankedItem, remaining_capacity: u32) {
        debug!(
            index = entry.index().get(),
            weight = entry.weight(),
            remaining_capacity,
            "item does not fit"
        );
    }

    fn on_exit_selection(&mut self, statistics: &SelectionStatistics) {
        info!(
            capacity = self.capacity,
            accepted = statistics.items_accepted,
            rejected = statistics.items_rejected,
            groups = statistics.groups_scanned,
            stopped_early = statistics.stopped_early,
            elapsed = ?statistics.selection_duration,
            "greedy selection finished"
        );
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::GreedySelector;
    use knapsack_core::num::fixed::Cents;
    use knapsack_model::item::Item;

    #[test]
    fn test_log_monitor_tracks_run_and_leaves_result_alone() {
        let items = [
            Item::new(1, Cents::new(500)),
            Item::new(2, Cents::new(300)),
        ];
        let catalog = RankedCatalog::rank(&items);

        let mut monitor = LogMonitor::new();
        let logged = GreedySelector::new(1).select(&catalog, &mut monitor);
        let silent = GreedySelector::new(1).select_silent(&catalog);

        assert_eq!(logged.knapsack(), silent.knapsack());
        assert_eq!(monitor.name(), "LogMonitor");
        assert_eq!(
            monitor.to_string(),
            "LogMonitor(capacity: 1, catalog_len: 2)"
        );
    }
}
