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

//! # Density Ratios
//!
//! A `DensityRatio` is value per unit of weight, rounded to two fractional
//! digits toward positive infinity. With the value held in hundredths the
//! rounded ratio in hundredths is simply `ceil(value_cents / weight)`:
//!
//! ```text
//! 1.00 / 99  = 0.0101.. -> 0.02
//! 1.00 / 100 = 0.01     -> 0.01
//! 3.00 / 2   = 1.50     -> 1.50
//! ```
//!
//! The weight is a `NonZeroU32`, so a zero divisor cannot be expressed.

use crate::num::fixed::Cents;
use num_traits::{PrimInt, Unsigned};
use std::num::NonZeroU32;

/// Integer division rounding toward positive infinity.
///
/// # Panics
///
/// Panics if `denominator` is zero.
///
/// # Examples
///
/// ```rust
/// # use knapsack_core::num::ratio::div_ceil;
/// assert_eq!(div_ceil(100u64, 99u64), 2);
/// assert_eq!(div_ceil(100u64, 100u64), 1);
/// assert_eq!(div_ceil(0u32, 7u32), 0);
/// ```
#[inline]
pub fn div_ceil<T>(numerator: T, denominator: T) -> T
where
    T: PrimInt + Unsigned,
{
    let quotient = numerator / denominator;
    if (numerator % denominator).is_zero() {
        quotient
    } else {
        quotient + T::one()
    }
}

/// Value per unit of weight in hundredths, rounded up.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DensityRatio(u64);

impl DensityRatio {
    /// Computes the ceiling-rounded ratio of `value` to `weight`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knapsack_core::num::{fixed::Cents, ratio::DensityRatio};
    /// # use std::num::NonZeroU32;
    /// let ratio = DensityRatio::of(Cents::new(100), NonZeroU32::new(99).unwrap());
    /// assert_eq!(ratio.to_string(), "0.02");
    /// ```
    #[inline]
    pub fn of(value: Cents, weight: NonZeroU32) -> Self {
        Self(div_ceil(value.get(), u64::from(weight.get())))
    }

    /// Creates a ratio directly from hundredths.
    #[inline(always)]
    pub const fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    /// Returns the ratio in hundredths.
    #[inline(always)]
    pub const fn hundredths(self) -> u64 {
        self.0
    }

    /// Returns the ratio as a two-digit fixed-point value.
    #[inline(always)]
    pub const fn as_cents(self) -> Cents {
        Cents::new(self.0)
    }
}

impl std::fmt::Display for DensityRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.as_cents(), f)
    }
}

impl std::fmt::Debug for DensityRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DensityRatio({})", self.as_cents())
    }
}
