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

//! Run configuration.
//!
//! A `KnapsackConfig` is fixed before a run starts. The defaults describe a
//! population of 100 000 items with weights up to 100 and values below 100.00,
//! a knapsack of capacity 1, and the selection timing line enabled. Use
//! `KnapsackConfigBuilder` to change any of them.

use std::num::NonZeroU32;

pub const DEFAULT_ITEM_COUNT: usize = 100_000;
pub const DEFAULT_CAPACITY: u32 = 1;
pub const DEFAULT_MAX_ITEM_WEIGHT: u32 = 100;
/// Exclusive bound in hundredths; divided by 100 to obtain two decimal places.
pub const DEFAULT_MAX_ITEM_VALUE_CENTS: u64 = 10_000;
pub const DEFAULT_BENCHMARK_OUTPUT_ENABLED: bool = true;

/// The error type for invalid run configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The maximum item weight must be at least 1.
    ZeroMaxItemWeight,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroMaxItemWeight => write!(f, "Maximum item weight must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters of one generate-rank-select run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnapsackConfig {
    item_count: usize,
    capacity: u32,
    max_item_weight: NonZeroU32,
    max_item_value_cents: u64,
    benchmark_output_enabled: bool,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            capacity: DEFAULT_CAPACITY,
            max_item_weight: NonZeroU32::MIN.saturating_add(DEFAULT_MAX_ITEM_WEIGHT - 1),
            max_item_value_cents: DEFAULT_MAX_ITEM_VALUE_CENTS,
            benchmark_output_enabled: DEFAULT_BENCHMARK_OUTPUT_ENABLED,
        }
    }
}

impl KnapsackConfig {
    #[inline]
    pub fn builder() -> KnapsackConfigBuilder {
        KnapsackConfigBuilder::new()
    }

    /// Number of items to generate.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Capacity of the knapsack in weight units.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Inclusive upper bound of a generated weight.
    #[inline]
    pub fn max_item_weight(&self) -> NonZeroU32 {
        self.max_item_weight
    }

    /// Exclusive upper bound of a generated value, in hundredths.
    #[inline]
    pub fn max_item_value_cents(&self) -> u64 {
        self.max_item_value_cents
    }

    /// Whether the selection timing line is written to the report.
    #[inline]
    pub fn benchmark_output_enabled(&self) -> bool {
        self.benchmark_output_enabled
    }
}

impl std::fmt::Display for KnapsackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KnapsackConfig(items: {}, capacity: {}, max_weight: {}, max_value_cents: {}, benchmark: {})",
            self.item_count,
            self.capacity,
            self.max_item_weight,
            self.max_item_value_cents,
            self.benchmark_output_enabled
        )
    }
}

/// Builder for `KnapsackConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnapsackConfigBuilder {
    item_count: usize,
    capacity: u32,
    max_item_weight: u32,
    max_item_value_cents: u64,
    benchmark_output_enabled: bool,
}

impl Default for KnapsackConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KnapsackConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            capacity: DEFAULT_CAPACITY,
            max_item_weight: DEFAULT_MAX_ITEM_WEIGHT,
            max_item_value_cents: DEFAULT_MAX_ITEM_VALUE_CENTS,
            benchmark_output_enabled: DEFAULT_BENCHMARK_OUTPUT_ENABLED,
        }
    }

    #[inline]
    pub fn item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    #[inline]
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    #[inline]
    pub fn max_item_weight(mut self, max_item_weight: u32) -> Self {
        self.max_item_weight = max_item_weight;
        self
    }

    #[inline]
    pub fn max_item_value_cents(mut self, max_item_value_cents: u64) -> Self {
        self.max_item_value_cents = max_item_value_cents;
        self
    }

    #[inline]
    pub fn benchmark_output(mut self, enabled: bool) -> Self {
        self.benchmark_output_enabled = enabled;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroMaxItemWeight` if the maximum weight is 0.
    pub fn build(self) -> Result<KnapsackConfig, ConfigError> {
        let max_item_weight =
            NonZeroU32::new(self.max_item_weight).ok_or(ConfigError::ZeroMaxItemWeight)?;

        Ok(KnapsackConfig {
            item_count: self.item_count,
            capacity: self.capacity,
            max_item_weight,
            max_item_value_cents: self.max_item_value_cents,
            benchmark_output_enabled: self.benchmark_output_enabled,
        })
    }
}
