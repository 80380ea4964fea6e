//! # Money Module
//!
//! Provides the `Money` type for prices and the `Multiplier` type for
//! size-dependent scaling.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    1.1 × (100 + 50 + 33) = 201.30000000000004                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kopecks + Basis-Point Multipliers                │
//! │    18300 kopecks × 11000 / 10000 = 20130 kopecks = 201.30 ₽             │
//! │    Rounding happens exactly once, when the multiplier is applied        │
//! │                                                                         │
//! │  OVERFLOW: every operation fed by backend data has a checked form      │
//! │  returning None; pricing turns that into CoreError::AmountOverflow.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::money::{Money, Multiplier};
//!
//! let dough = Money::from_rubles(300);
//! let doubled = dough.checked_multiply_quantity(2).unwrap();
//! let large = doubled.checked_apply_multiplier(Multiplier::from_percent(150)).unwrap();
//! assert_eq!(large, Money::from_rubles(900));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in kopecks (the smallest ruble unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays total; validation rejects negative
///   prices at the catalog boundary
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde**: serialized as the bare kopeck count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kopecks.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let price = Money::from_kopecks(29950);
    /// assert_eq!(price.rubles(), 299);
    /// assert_eq!(price.kopecks_part(), 50);
    /// ```
    #[inline]
    pub const fn from_kopecks(kopecks: i64) -> Self {
        Money(kopecks)
    }

    /// Creates a Money value from whole rubles, saturating at the i64 bounds.
    #[inline]
    pub const fn from_rubles(rubles: i64) -> Self {
        Money(rubles.saturating_mul(100))
    }

    /// Converts a ruble amount as the backend sends it (`33.5`), rounding
    /// half away from zero to the kopeck.
    ///
    /// Returns `None` for non-finite amounts and amounts outside the i64
    /// kopeck range.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_ruble_amount(33.5), Some(Money::from_kopecks(3350)));
    /// assert_eq!(Money::from_ruble_amount(f64::INFINITY), None);
    /// ```
    pub fn from_ruble_amount(rubles: f64) -> Option<Self> {
        let kopecks = (rubles * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, so the bound is exclusive
        if !kopecks.is_finite() || kopecks.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Money(kopecks as i64))
    }

    /// Returns the value in kopecks.
    #[inline]
    pub const fn kopecks(&self) -> i64 {
        self.0
    }

    /// Returns the whole-ruble portion.
    #[inline]
    pub const fn rubles(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the kopeck portion (always 0-99).
    #[inline]
    pub const fn kopecks_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts; `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }

    /// Multiplies money by a selection quantity; `None` on overflow.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let portion = Money::from_rubles(33);
    /// assert_eq!(portion.checked_multiply_quantity(3), Some(Money::from_rubles(99)));
    /// assert_eq!(Money::from_kopecks(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: u32) -> Option<Money> {
        match self.0.checked_mul(qty as i64) {
            Some(product) => Some(Money(product)),
            None => None,
        }
    }

    /// Scales money by a size multiplier, rounding half up to the kopeck.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000` in i128. `None` if the
    /// result does not fit back into i64.
    ///
    /// ```rust
    /// use pizza_core::money::{Money, Multiplier};
    ///
    /// let base = Money::from_kopecks(18333);
    /// let scaled = base.checked_apply_multiplier(Multiplier::from_percent(150)).unwrap();
    /// // 27499.5 → 27500
    /// assert_eq!(scaled.kopecks(), 27500);
    /// ```
    pub fn checked_apply_multiplier(&self, multiplier: Multiplier) -> Option<Money> {
        let scaled = (self.0 as i128 * multiplier.bps() as i128 + 5000) / 10_000;
        i64::try_from(scaled).ok().map(Money)
    }
}

/// Prices shown to the customer: `"315 ₽"`, or `"315.50 ₽"` when there
/// are kopecks.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        if self.kopecks_part() == 0 {
            write!(f, "{}{} ₽", sign, self.rubles().abs())
        } else {
            write!(
                f,
                "{}{}.{:02} ₽",
                sign,
                self.rubles().abs(),
                self.kopecks_part()
            )
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Multiplier
// =============================================================================

/// Size multiplier stored in basis points.
///
/// `10000` = ×1, `11250` = ×1.125. Four decimal places cover every factor a
/// menu quotes, and keeping it integral means money never touches floating
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Identity multiplier (×1).
    pub const ONE: Multiplier = Multiplier(10_000);

    /// Largest factor a multiplier can hold.
    pub const MAX_FACTOR: u32 = u32::MAX / 10_000;

    /// Creates a multiplier from basis points (`15000` = ×1.5).
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Multiplier(bps)
    }

    /// Creates a multiplier from a percentage (`150` = ×1.5), saturating.
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        Multiplier(percent.saturating_mul(100))
    }

    /// Creates a multiplier from a factor as the backend sends it (`1.125`),
    /// rounded to the nearest basis point.
    ///
    /// `None` for non-finite, negative, or larger than [`Self::MAX_FACTOR`].
    /// A zero factor is representable; validation rejects it afterwards.
    ///
    /// ```rust
    /// use pizza_core::money::Multiplier;
    ///
    /// assert_eq!(Multiplier::from_factor(1.125), Some(Multiplier::from_bps(11250)));
    /// assert_eq!(Multiplier::from_factor(-1.0), None);
    /// ```
    pub fn from_factor(factor: f64) -> Option<Self> {
        if !factor.is_finite() || factor < 0.0 || factor > Self::MAX_FACTOR as f64 {
            return None;
        }
        Some(Multiplier((factor * 10_000.0).round() as u32))
    }

    /// Returns the multiplier in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Checks if the multiplier is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::ONE
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
