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

//! Greedy value-density knapsack heuristic
//!
//! Generates random items, ranks them by value per unit of weight and fills a
//! fixed capacity in a single greedy pass.
//!
//! Core flow
//! - Draw items with `generator::ItemGenerator` from an injected `rand::Rng`.
//! - Rank them with `rank::RankedCatalog::rank`.
//! - Fill a capacity with `select::GreedySelector`, optionally observed by a
//!   `monitor::SelectionMonitor`.
//!
//! Guarantees
//! - Exact arithmetic: values are two-digit fixed point, ratios are rounded up
//!   to the next hundredth.
//! - Ranking is stable; items sharing ratio and weight are all kept.
//! - Selection is deterministic for a given catalog and capacity, and never
//!   exceeds the capacity.
//! - No optimality: the pass never backtracks and may leave capacity unused
//!   that a lower-ranked item could have filled exactly.
//!
//! Module map
//! - `generator`: random item generation.
//! - `rank`: density ranking and ratio groups.
//! - `select`: the greedy selection pass.
//! - `monitor`: selection monitors (no-op, tracing log).
//! - `result`: selection outcome.
//! - `stats`: lightweight counters and timing.

pub mod generator;
pub mod monitor;
pub mod rank;
pub mod result;
pub mod select;
pub mod stats;
