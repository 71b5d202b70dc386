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

use crate::{config::KnapsackConfig, report};
use knapsack_greedy::{
    generator::ItemGenerator, monitor::log::LogMonitor, rank::RankedCatalog,
    result::SelectionOutcome, select::GreedySelector,
};
use rand::Rng;
use std::io::Write;
use tracing::info;

/// Generates a population, ranks it, fills the knapsack and writes the report.
///
/// The catalog listing is written before selection starts. The timing line is
/// written only when `config.benchmark_output_enabled()` is set.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn run<R, W>(
    config: &KnapsackConfig,
    rng: &mut R,
    out: &mut W,
) -> std::io::Result<SelectionOutcome>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let items = ItemGenerator::new(
        rng,
        config.max_item_weight(),
        config.max_item_value_cents(),
    )
    .generate(config.item_count());
    info!(items = items.len(), "generated item population");

    let catalog = RankedCatalog::rank(&items);
    info!(
        items = catalog.len(),
        groups = catalog.num_groups(),
        "ranked items by density ratio"
    );

    report::write_catalog(out, &catalog)?;

    let outcome = GreedySelector::new(config.capacity()).select(&catalog, LogMonitor::new());

    if config.benchmark_output_enabled() {
        report::write_execution_time(out, outcome.statistics().selection_duration)?;
    }
    report::write_contents(out, outcome.knapsack())?;

    Ok(outcome)
}
