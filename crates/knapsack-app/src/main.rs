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

use anyhow::Context;
use knapsack_app::{config::KnapsackConfig, pipeline};
use std::io::{BufWriter, Write};
use tracing::{Level, info};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = KnapsackConfig::default();
    info!(%config, "starting knapsack run");

    let mut rng = rand::rng();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let outcome =
        pipeline::run(&config, &mut rng, &mut out).context("failed to write knapsack report")?;
    out.flush().context("failed to flush knapsack report")?;

    info!(
        selected = outcome.knapsack().len(),
        total_weight = outcome.knapsack().total_weight(),
        total_value = %outcome.knapsack().total_value(),
        "knapsack run finished"
    );
    Ok(())
}
