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

//! Random item generation.
//!
//! `ItemGenerator` draws each weight uniformly from `[1, max_weight]` and each
//! value uniformly from `[0, max_value_cents)` hundredths. The generator owns
//! the random source it is given and reuses it for the whole pass; pass
//! `&mut rng` to keep using the source afterwards. Seed a deterministic source
//! such as `rand_chacha::ChaCha8Rng` to reproduce a population.

use knapsack_core::num::fixed::Cents;
use knapsack_model::item::Item;
use rand::Rng;
use std::num::NonZeroU32;

/// Draws random items from an injected random source.
#[derive(Debug, Clone)]
pub struct ItemGenerator<R> {
    rng: R,
    max_weight: NonZeroU32,
    max_value_cents: u64,
}

impl<R> ItemGenerator<R>
where
    R: Rng,
{
    /// Creates a new generator.
    ///
    /// # Arguments
    /// * `rng`: The random source, used for every draw.
    /// * `max_weight`: Inclusive upper bound of the weight.
    /// * `max_value_cents`: Exclusive upper bound of the value in hundredths.
    ///   A bound of zero yields only `0.00` values.
    #[inline]
    pub fn new(rng: R, max_weight: NonZeroU32, max_value_cents: u64) -> Self {
        Self {
            rng,
            max_weight,
            max_value_cents,
        }
    }

    /// Returns the inclusive weight bound.
    #[inline]
    pub fn max_weight(&self) -> NonZeroU32 {
        self.max_weight
    }

    /// Returns the exclusive value bound in hundredths.
    #[inline]
    pub fn max_value_cents(&self) -> u64 {
        self.max_value_cents
    }

    /// Draws a single item.
    pub fn generate_item(&mut self) -> Item {
        // 1 + [0, max_weight) covers [1, max_weight] without a zero check.
        let offset = self.rng.random_range(0..self.max_weight.get());
        let weight = NonZeroU32::MIN.saturating_add(offset);
        let value_cents = if self.max_value_cents == 0 {
            0
        } else {
            self.rng.random_range(0..self.max_value_cents)
        };

        Item::with_weight(weight, Cents::new(value_cents))
    }

    /// Draws `count` items.
    pub fn generate(&mut self, count: usize) -> Vec<Item> {
        let mut items = Vec::with_capacity(count);
        items.extend((0..count).map(|_| self.generate_item()));
        items
    }

    /// Consumes the generator and returns the random source.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Draws `count` items with weights in `[1, max_weight]` and values in
/// `[0, max_value_cents)` hundredths from `rng`.
pub fn generate<R>(
    rng: &mut R,
    count: usize,
    max_weight: NonZeroU32,
    max_value_cents: u64,
) -> Vec<Item>
where
    R: Rng + ?Sized,
{
    ItemGenerator::new(rng, max_weight, max_value_cents).generate(count)
}
