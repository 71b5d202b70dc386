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

//! Console report.
//!
//! The report is plain text and line oriented, so other tools can consume it:
//!
//! ```text
//! Available items for knapsack:
//! -----------------------------
//! Weight: 1 Value: 5.00 Ratio:5.00
//! ...
//!
//! Total execution time: 0ms
//!
//!
//!
//! Optimized items in knapsack:
//! ----------------------------
//! Weight: 1 Value: 5.00
//! Total weight: 1
//! Total value: 5.00
//! ```

use knapsack_greedy::rank::RankedCatalog;
use knapsack_model::knapsack::Knapsack;
use std::{io::Write, time::Duration};

/// Writes every ranked item with its ratio, highest ratio first.
pub fn write_catalog<W>(out: &mut W, catalog: &RankedCatalog) -> std::io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "Available items for knapsack:")?;
    writeln!(out, "-----------------------------")?;
    for entry in catalog {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

/// Writes the wall-clock time of the selection pass in whole milliseconds.
pub fn write_execution_time<W>(out: &mut W, elapsed: Duration) -> std::io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out)?;
    writeln!(out, "Total execution time: {}ms", elapsed.as_millis())?;
    writeln!(out)
}

/// Writes the selected items in acceptance order followed by the totals.
pub fn write_contents<W>(out: &mut W, knapsack: &Knapsack) -> std::io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "Optimized items in knapsack:")?;
    writeln!(out, "----------------------------")?;
    for item in knapsack.items() {
        writeln!(out, "{}", item)?;
    }
    writeln!(out, "Total weight: {}", knapsack.total_weight())?;
    writeln!(out, "Total value: {}", knapsack.total_value())
}
