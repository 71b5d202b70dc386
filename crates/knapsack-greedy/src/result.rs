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

use crate::stats::SelectionStatistics;
use knapsack_model::knapsack::Knapsack;

/// The knapsack produced by a selection pass together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    knapsack: Knapsack,
    statistics: SelectionStatistics,
}

impl SelectionOutcome {
    #[inline]
    pub fn new(knapsack: Knapsack, statistics: SelectionStatistics) -> Self {
        Self {
            knapsack,
            statistics,
        }
    }

    #[inline]
    pub fn knapsack(&self) -> &Knapsack {
        &self.knapsack
    }

    #[inline]
    pub fn statistics(&self) -> &SelectionStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_knapsack(self) -> Knapsack {
        self.knapsack
    }

    /// Splits the outcome into its parts.
    #[inline]
    pub fn into_parts(self) -> (Knapsack, SelectionStatistics) {
        (self.knapsack, self.statistics)
    }
}

impl std::fmt::Display for SelectionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.knapsack)?;
        writeln!(f)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapsack_core::num::fixed::Cents;
    use knapsack_model::{index::ItemIndex, item::Item};

    #[test]
    fn test_accessors_and_parts() {
        let knapsack = Knapsack::new(
            3,
            vec![ItemIndex::new(1)],
            vec![Item::new(2, Cents::new(250))],
        );
        let stats = SelectionStatistics {
            items_accepted: 1,
            items_considered: 1,
            groups_scanned: 1,
            ..Default::default()
        };
        let outcome = SelectionOutcome::new(knapsack.clone(), stats.clone());

        assert_eq!(outcome.knapsack(), &knapsack);
        assert_eq!(outcome.statistics(), &stats);

        let rendered = outcome.to_string();
        assert!(rendered.contains("Knapsack Summary"));
        assert!(rendered.contains("Greedy Selection Statistics:"));

        let (k, s) = outcome.clone().into_parts();
        assert_eq!(k, knapsack);
        assert_eq!(s, stats);
        assert_eq!(outcome.into_knapsack(), knapsack);
    }
}
