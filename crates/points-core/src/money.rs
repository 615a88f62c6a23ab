//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Receipt totals arrive as strings: "35.35", "9.00", "1.25"             │
//! │                                                                         │
//! │  Parsed as f64, "is this a multiple of 0.25?" becomes a remainder      │
//! │  check on a value that may not be representable exactly.                │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals (rust_decimal)                            │
//! │    "35.35"  → 3535 × 10^-2                                              │
//! │    "1.005"  → 1005 × 10^-3     (no precision cut-off at cents)          │
//! │    "1e1"    → 10                                                        │
//! │    whole dollars  ⇔ fract(x) == 0                                       │
//! │    quarter steps  ⇔ x % 0.25 == 0                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total, Money::from_cents(3535));
//! assert!(!total.is_whole_dollars());
//!
//! // Finer than a cent is still a number
//! let price: Money = "1.005".parse().unwrap();
//! assert_eq!(price.ceil_dollars_at_rate(2000), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MoneyParseError;

/// Decimal places of a basis-point rate.
const BPS_SCALE: u32 = 4;

// =============================================================================
// Money Type
// =============================================================================

/// An exact decimal amount in dollars.
///
/// ## Design Decisions
/// - **Decimal, not cents**: prices like `"1.005"` keep their full value
/// - **Signed**: Receipts are accepted as-is, so negative totals parse
/// - **Equality by value**: `"2.5"` and `"2.50"` are the same amount
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// let price = Money::from_cents(649); // Represents $6.49
    /// assert_eq!(price.to_string(), "6.49");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an existing decimal.
    #[inline]
    pub const fn from_decimal(value: Decimal) -> Self {
        Money(value)
    }

    /// Returns the underlying decimal.
    #[inline]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the amount has no fractional part.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// assert!(Money::from_cents(1000).is_whole_dollars());
    /// assert!(!Money::from_cents(1001).is_whole_dollars());
    /// ```
    #[inline]
    pub fn is_whole_dollars(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Checks if the amount is an exact multiple of `step`.
    ///
    /// A zero step never divides anything.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(975).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(980).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub fn is_multiple_of(&self, step: Money) -> bool {
        self.0
            .checked_rem(step.0)
            .is_some_and(|remainder| remainder.is_zero())
    }

    /// Applies a rate in basis points and rounds the result UP to whole dollars.
    ///
    /// Results beyond the `i64` range saturate at `i64::MAX` / `i64::MIN`.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// // $12.25 × 20% = $2.45 → 3
    /// assert_eq!(Money::from_cents(1225).ceil_dollars_at_rate(2000), 3);
    /// // $5.00 × 20% = $1.00 → 1 (exact, no rounding)
    /// assert_eq!(Money::from_cents(500).ceil_dollars_at_rate(2000), 1);
    /// ```
    pub fn ceil_dollars_at_rate(&self, bps: u32) -> i64 {
        let rate = Decimal::new(i64::from(bps), BPS_SCALE);
        let saturated = if self.0.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        };

        self.0
            .checked_mul(rate)
            .and_then(|scaled| scaled.ceil().to_i64())
            .unwrap_or(saturated)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal amount such as `"35.35"`, `"-2"`, `".25"`, `"1.005"` or
/// `"1e1"`.
///
/// ## Accepted Grammar
/// ```text
/// [+|-] digits* [ "." digits* ] [ (e|E) [+|-] digits+ ]
///                                       (at least one mantissa digit)
/// ```
///
/// Any precision is kept. Whitespace, underscores, hex floats and special
/// values (`inf`, `NaN`) are rejected, as are values beyond the 96-bit
/// decimal range or smaller than 10^-28.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (mantissa, exponent) = match s.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (s, None),
        };

        let (negative, unsigned) = split_sign(mantissa);
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(MoneyParseError::NoDigits);
        }
        if !is_digits(int_part) || !is_digits(frac_part) {
            return Err(MoneyParseError::InvalidCharacter);
        }

        let normalized = format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if int_part.is_empty() { "0" } else { int_part },
            if frac_part.is_empty() { "0" } else { frac_part },
        );
        let mut value = Decimal::from_str(&normalized).map_err(|_| MoneyParseError::Overflow)?;

        if let Some(exponent) = exponent {
            value = apply_exponent(value, parse_exponent(exponent)?)?;
        }

        Ok(Money(value))
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    }
}

fn is_digits(part: &str) -> bool {
    part.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(exponent: &str) -> Result<i64, MoneyParseError> {
    let (negative, digits) = split_sign(exponent);
    if digits.is_empty() || !is_digits(digits) {
        return Err(MoneyParseError::InvalidExponent);
    }

    let magnitude: i64 = digits.parse().map_err(|_| MoneyParseError::Overflow)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Scales `value` by 10^`exponent` without rounding.
fn apply_exponent(mut value: Decimal, exponent: i64) -> Result<Decimal, MoneyParseError> {
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }

    if exponent >= 0 {
        // A non-zero value leaves the 96-bit range after at most ~29 steps
        for _ in 0..exponent {
            value = value
                .checked_mul(Decimal::TEN)
                .ok_or(MoneyParseError::Overflow)?;
        }
    } else {
        let scale = u32::try_from(exponent.unsigned_abs())
            .ok()
            .and_then(|shift| value.scale().checked_add(shift))
            .ok_or(MoneyParseError::Overflow)?;
        value
            .set_scale(scale)
            .map_err(|_| MoneyParseError::Overflow)?;
    }

    Ok(value)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as a plain decimal, the same shape receipts use.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Money, MoneyParseError> {
        s.parse()
    }

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    #[test]
    fn test_parse_common_amounts() {
        assert_eq!(parse("35.35").unwrap(), cents(3535));
        assert_eq!(parse("9.00").unwrap(), cents(900));
        assert_eq!(parse("6.49").unwrap(), cents(649));
        assert_eq!(parse("0.00").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_loose_shapes() {
        assert_eq!(parse("10").unwrap(), cents(1000));
        assert_eq!(parse("10.5").unwrap(), cents(1050));
        assert_eq!(parse(".25").unwrap(), cents(25));
        assert_eq!(parse("3.").unwrap(), cents(300));
        assert_eq!(parse("+1.25").unwrap(), cents(125));
        assert_eq!(parse("-1.25").unwrap(), cents(-125));
        assert_eq!(parse("007.10").unwrap(), cents(710));
    }

    #[test]
    fn test_parse_keeps_sub_cent_precision() {
        assert_eq!(parse("10.000").unwrap(), cents(1000));
        assert_eq!(parse("1.005").unwrap().as_decimal(), Decimal::new(1005, 3));
        assert_eq!(parse("12.999").unwrap().as_decimal(), Decimal::new(12999, 3));
        assert!(!parse("1.005").unwrap().is_whole_dollars());
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse("1e1").unwrap(), cents(1000));
        assert_eq!(parse("2.5E+2").unwrap(), cents(25000));
        assert_eq!(parse("125e-2").unwrap(), cents(125));
        assert_eq!(parse("-3e0").unwrap(), cents(-300));
        assert_eq!(parse("0e999999").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse(""), Err(MoneyParseError::Empty)));
        assert!(matches!(parse("."), Err(MoneyParseError::NoDigits)));
        assert!(matches!(parse("-"), Err(MoneyParseError::NoDigits)));
        assert!(matches!(parse("e5"), Err(MoneyParseError::NoDigits)));
        assert!(matches!(parse("abc"), Err(MoneyParseError::InvalidCharacter)));
        assert!(matches!(parse(" 1.00"), Err(MoneyParseError::InvalidCharacter)));
        assert!(matches!(parse("1.2.3"), Err(MoneyParseError::InvalidCharacter)));
        assert!(matches!(parse("1_000"), Err(MoneyParseError::InvalidCharacter)));
        assert!(matches!(parse("NaN"), Err(MoneyParseError::InvalidCharacter)));
        assert!(matches!(parse("$5.00"), Err(MoneyParseError::InvalidCharacter)));
        assert!(matches!(parse("1e"), Err(MoneyParseError::InvalidExponent)));
        assert!(matches!(parse("1e+"), Err(MoneyParseError::InvalidExponent)));
        assert!(matches!(parse("1e2.5"), Err(MoneyParseError::InvalidExponent)));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            parse("999999999999999999999999999999999"),
            Err(MoneyParseError::Overflow)
        ));
        assert!(matches!(parse("1e40"), Err(MoneyParseError::Overflow)));
        assert!(matches!(parse("1e-40"), Err(MoneyParseError::Overflow)));
    }

    #[test]
    fn test_whole_dollars_and_quarters() {
        let quarter = cents(25);

        assert!(cents(1000).is_whole_dollars());
        assert!(cents(-500).is_whole_dollars());
        assert!(!cents(1025).is_whole_dollars());

        assert!(cents(1025).is_multiple_of(quarter));
        assert!(cents(1050).is_multiple_of(quarter));
        assert!(cents(1075).is_multiple_of(quarter));
        assert!(!cents(1010).is_multiple_of(quarter));
        assert!(!parse("10.255").unwrap().is_multiple_of(quarter));
        assert!(!cents(100).is_multiple_of(Money::zero()));
    }

    #[test]
    fn test_ceil_dollars_at_rate() {
        assert_eq!(cents(300).ceil_dollars_at_rate(2000), 1); // 0.60 → 1
        assert_eq!(cents(600).ceil_dollars_at_rate(2000), 2); // 1.20 → 2
        assert_eq!(cents(1000).ceil_dollars_at_rate(2000), 2); // exactly 2
        assert_eq!(cents(0).ceil_dollars_at_rate(2000), 0);
        assert_eq!(cents(1).ceil_dollars_at_rate(2000), 1);
        assert_eq!(parse("1.005").unwrap().ceil_dollars_at_rate(2000), 1); // 0.201 → 1
        assert_eq!(parse("12.999").unwrap().ceil_dollars_at_rate(2000), 3); // 2.5998 → 3
        // Negative amounts round toward positive infinity
        assert_eq!(cents(-300).ceil_dollars_at_rate(2000), 0);
        assert_eq!(cents(-1000).ceil_dollars_at_rate(2000), -2);
    }

    #[test]
    fn test_ceil_dollars_saturates() {
        let huge = parse("1e27").unwrap();
        assert_eq!(huge.ceil_dollars_at_rate(2000), i64::MAX);

        let negative = parse("-1e27").unwrap();
        assert_eq!(negative.ceil_dollars_at_rate(2000), i64::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(cents(3535).to_string(), "35.35");
        assert_eq!(cents(500).to_string(), "5.00");
        assert_eq!(cents(-550).to_string(), "-5.50");
        assert_eq!(cents(7).to_string(), "0.07");
    }
}
