use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Signed fixed-point amount held as minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(pub i64);

impl Money {
    pub const SCALE: i64 = 10_000; // 4 decimal places
    pub const TARGET_DECIMALS: u32 = 4;
    pub const ZERO: Self = Self(0);

    pub const fn from_major(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Rounds half to even at four places. `None` when the value does not fit.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        let mut rounded = value
            .round_dp_with_strategy(Self::TARGET_DECIMALS, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(Self::TARGET_DECIMALS);
        i64::try_from(rounded.mantissa()).ok().map(Self)
    }

    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();

        if s.is_empty() {
            return None;
        }
        Decimal::from_str(s).ok().and_then(Self::from_decimal)
    }
}

// Saturating so a ledger transition can never overflow-panic.
impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let minor = self.0;
        let abs = minor.unsigned_abs();
        let scale = Self::SCALE.unsigned_abs();
        let int_part = abs / scale;
        let frac_part = abs % scale;
        if minor < 0 {
            write!(f, "-{}.{:04}", int_part, frac_part)
        } else {
            write!(f, "{}.{:04}", int_part, frac_part)
        }
    }
}
