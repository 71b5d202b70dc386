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

use std::time::Duration;

/// Statistics collected during one greedy selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStatistics {
    /// Ratio groups entered.
    pub groups_scanned: u64,
    /// Items looked at, accepted or not.
    pub items_considered: u64,
    /// Items placed into the knapsack.
    pub items_accepted: u64,
    /// Items skipped because they did not fit the remaining capacity.
    pub items_rejected: u64,
    /// Whether the pass ended on an exhausted capacity rather than an exhausted catalog.
    pub stopped_early: bool,
    /// Wall-clock time of the selection pass alone.
    pub selection_duration: Duration,
}

impl SelectionStatistics {
    #[inline]
    pub fn on_group_scanned(&mut self) {
        self.groups_scanned = self.groups_scanned.saturating_add(1);
    }

    #[inline]
    pub fn on_item_accepted(&mut self) {
        self.items_considered = self.items_considered.saturating_add(1);
        self.items_accepted = self.items_accepted.saturating_add(1);
    }

    #[inline]
    pub fn on_item_rejected(&mut self) {
        self.items_considered = self.items_considered.saturating_add(1);
        self.items_rejected = self.items_rejected.saturating_add(1);
    }

    #[inline]
    pub fn on_capacity_exhausted(&mut self) {
        self.stopped_early = true;
    }

    #[inline]
    pub fn set_selection_duration(&mut self, duration: Duration) {
        self.selection_duration = duration;
    }
}

impl std::fmt::Display for SelectionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Greedy Selection Statistics:")?;
        writeln!(f, "  Groups scanned:       {}", self.groups_scanned)?;
        writeln!(f, "  Items considered:     {}", self.items_considered)?;
        writeln!(f, "  Items accepted:       {}", self.items_accepted)?;
        writeln!(f, "  Items rejected:       {}", self.items_rejected)?;
        writeln!(f, "  Stopped early:        {}", self.stopped_early)?;
        writeln!(f, "  Selection time:       {:.2?}", self.selection_duration)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = SelectionStatistics::default();
        stats.on_group_scanned();
        stats.on_group_scanned();
        stats.on_item_accepted();
        stats.on_item_rejected();
        stats.on_item_rejected();
        stats.on_capacity_exhausted();
        stats.set_selection_duration(Duration::from_millis(3));

        assert_eq!(stats.groups_scanned, 2);
        assert_eq!(stats.items_considered, 3);
        assert_eq!(stats.items_accepted, 1);
        assert_eq!(stats.items_rejected, 2);
        assert!(stats.stopped_early);
        assert_eq!(stats.selection_duration, Duration::from_millis(3));
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = SelectionStatistics {
            items_considered: u64::MAX,
            items_accepted: u64::MAX,
            ..Default::default()
        };
        stats.on_item_accepted();
        assert_eq!(stats.items_considered, u64::MAX);
        assert_eq!(stats.items_accepted, u64::MAX);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SelectionStatistics {
            groups_scanned: 4,
            items_considered: 9,
            items_accepted: 2,
            items_rejected: 7,
            stopped_early: true,
            selection_duration: Duration::ZERO,
        };

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Greedy Selection Statistics:"), "missing header");
        assert!(rendered.contains("Groups scanned:       4"));
        assert!(rendered.contains("Items considered:     9"));
        assert!(rendered.contains("Items accepted:       2"));
        assert!(rendered.contains("Items rejected:       7"));
        assert!(rendered.contains("Stopped early:        true"));
        assert!(rendered.contains("Selection time:"));
    }
}
