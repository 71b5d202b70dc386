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

//! # Two-Digit Fixed-Point Values
//!
//! `Cents` stores a non-negative decimal with exactly two fractional digits as
//! an integer count of hundredths. `Cents::new(500)` is `5.00`, `Cents::new(7)`
//! is `0.07`. Rendering always prints both fractional digits, so the textual
//! form round-trips through the scale without drift.
//!
//! ## Usage
//!
//! ```rust
//! use knapsack_core::num::fixed::Cents;
//!
//! let total: Cents = [Cents::new(500), Cents::new(100)].into_iter().sum();
//! assert_eq!(total.to_string(), "6.00");
//! ```

use num_traits::{CheckedAdd, CheckedSub, Zero};

/// A non-negative decimal with two fractional digits.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(u64);

impl Cents {
    /// Number of hundredths in one whole unit.
    pub const SCALE: u64 = 100;

    /// The value `0.00`.
    pub const ZERO: Cents = Cents(0);

    /// Creates a value from a count of hundredths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use knapsack_core::num::fixed::Cents;
    /// let v = Cents::new(1234);
    /// assert_eq!(v.whole(), 12);
    /// assert_eq!(v.fraction(), 34);
    /// ```
    #[inline(always)]
    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a value from whole units and a fractional part in hundredths.
    ///
    /// # Panics
    ///
    /// Panics if `fraction` is not below `Cents::SCALE`.
    #[inline]
    pub const fn from_parts(whole: u64, fraction: u64) -> Self {
        assert!(
            fraction < Self::SCALE,
            "called `Cents::from_parts` with a fractional part of 100 or more"
        );
        Self(whole * Self::SCALE + fraction)
    }

    /// Returns the raw count of hundredths.
    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the integral part.
    #[inline(always)]
    pub const fn whole(self) -> u64 {
        self.0 / Self::SCALE
    }

    /// Returns the fractional part in hundredths (`0..100`).
    #[inline(always)]
    pub const fn fraction(self) -> u64 {
        self.0 % Self::SCALE
    }

    /// Adds two values, clamping at `u64::MAX` hundredths.
    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Add for Cents {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Cents {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Cents {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Zero for Cents {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl CheckedAdd for Cents {
    #[inline]
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.0.checked_add(v.0).map(Self)
    }
}

impl CheckedSub for Cents {
    #[inline]
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.0.checked_sub(v.0).map(Self)
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Self::saturating_add)
    }
}

impl<'a> std::iter::Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for Cents {
    #[inline]
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}

impl From<Cents> for u64 {
    #[inline]
    fn from(value: Cents) -> Self {
        value.0
    }
}

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.whole(), self.fraction())
    }
}

impl std::fmt::Debug for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cents({})", self)
    }
}
