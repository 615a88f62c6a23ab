//! # Points Rules
//!
//! The scoring rule set. Seven independent rules each read one or two
//! receipt fields and contribute a whole number of points; the receipt's
//! score is their sum.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │      Field(s)            Condition                        Points        │
//! │      ──────────────────  ───────────────────────────────  ───────────   │
//! │      retailer            each ASCII letter or digit       +1 each       │
//! │      total               whole dollars                    +50           │
//! │      total               multiple of 0.25                 +25           │
//! │      items               every two items                  +5 per pair   │
//! │      items[*]            trimmed description len % 3 == 0 ceil(p × 0.2) │
//! │      purchase_date       day of month is odd              +6            │
//! │      purchase_time       14:00 ≤ time < 16:00             +10           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Malformed Fields
//! A field that does not parse makes the rules reading it score 0. Nothing
//! here returns an error and nothing short-circuits: every rule always runs.
//!
//! ## Example
//! ```rust
//! use points_core::{calculate, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     total: "9.00".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//! };
//!
//! assert_eq!(calculate(&receipt), 109);
//! ```

use crate::money::Money;
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// Bonus for a whole-dollar total.
pub const ROUND_TOTAL_POINTS: i64 = 50;

/// Bonus for a total that is a multiple of a quarter.
pub const QUARTER_TOTAL_POINTS: i64 = 25;

/// The quarter step, in cents.
const QUARTER_CENTS: i64 = 25;

/// Points per pair of items.
pub const ITEM_PAIR_POINTS: i64 = 5;

/// Trimmed description length must be a multiple of this.
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;

/// Share of the item price awarded, in basis points (20%).
const DESCRIPTION_PRICE_RATE_BPS: u32 = 2000;

/// Bonus for an odd purchase day.
pub const ODD_DAY_POINTS: i64 = 6;

/// Bonus for an afternoon purchase.
pub const AFTERNOON_POINTS: i64 = 10;

// =============================================================================
// Breakdown
// =============================================================================

/// Points contributed by each rule for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    /// One per alphanumeric character of the retailer name.
    pub retailer_name: i64,
    /// Whole-dollar total.
    pub round_dollar_total: i64,
    /// Total divisible by 0.25.
    pub quarter_multiple_total: i64,
    /// Item pairs.
    pub item_pairs: i64,
    /// Description-length bonuses, summed over items.
    pub item_descriptions: i64,
    /// Odd purchase day.
    pub odd_purchase_day: i64,
    /// Afternoon purchase.
    pub afternoon_purchase: i64,
}

impl PointsBreakdown {
    /// Evaluates all seven rules against a receipt.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        let total = receipt.total();

        PointsBreakdown {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_dollar_total: round_dollar_points(total),
            quarter_multiple_total: quarter_multiple_points(total),
            item_pairs: item_pair_points(receipt.items.len()),
            item_descriptions: receipt
                .items
                .iter()
                .map(item_description_points)
                .fold(0, i64::saturating_add),
            odd_purchase_day: odd_day_points(&receipt.purchase_date),
            afternoon_purchase: afternoon_points(&receipt.purchase_time),
        }
    }

    /// Sum of all rule contributions, saturating at the `i64` bounds.
    pub fn total(&self) -> i64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, i64::saturating_add)
    }
}

/// Computes the points a receipt earns.
///
/// Pure and deterministic: the same receipt always scores the same.
pub fn calculate(receipt: &Receipt) -> i64 {
    PointsBreakdown::for_receipt(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per ASCII alphanumeric character.
///
/// Spaces, punctuation and non-ASCII letters don't count.
pub fn retailer_name_points(retailer: &str) -> i64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as i64
}

/// Whole-dollar total.
pub fn round_dollar_points(total: Option<Money>) -> i64 {
    match total {
        Some(total) if total.is_whole_dollars() => ROUND_TOTAL_POINTS,
        _ => 0,
    }
}

/// Total divisible by 0.25.
pub fn quarter_multiple_points(total: Option<Money>) -> i64 {
    match total {
        Some(total) if total.is_multiple_of(Money::from_cents(QUARTER_CENTS)) => {
            QUARTER_TOTAL_POINTS
        }
        _ => 0,
    }
}

/// Five points for every two items. An odd item out earns nothing.
pub fn item_pair_points(item_count: usize) -> i64 {
    i64::try_from(item_count / 2)
        .unwrap_or(i64::MAX)
        .saturating_mul(ITEM_PAIR_POINTS)
}

/// Price-based bonus for one item.
///
/// Any numeric price qualifies, including ones finer than a cent. Length is the UTF-8 byte length of the description after trimming
/// surrounding whitespace. An empty description has length 0 and qualifies.
pub fn item_description_points(item: &Item) -> i64 {
    let length = item.short_description.trim().len();
    if length % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    item.price()
        .map_or(0, |price| price.ceil_dollars_at_rate(DESCRIPTION_PRICE_RATE_BPS))
}

/// Odd day of month.
///
/// The date must have exactly three `-`-separated fields; the third is the
/// day. The year and month are not checked.
pub fn odd_day_points(purchase_date: &str) -> i64 {
    let fields: Vec<&str> = purchase_date.split('-').collect();
    let [_, _, day] = fields.as_slice() else {
        return 0;
    };

    match day.parse::<i64>() {
        Ok(day) if day % 2 != 0 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Purchase between 2:00pm and 4:00pm.
///
/// Qualifies when the hour is 14, or the hour is 15 and the minute is below
/// 60. For well-formed times that is the half-open window [14:00, 16:00);
/// 16:00 itself does not qualify.
pub fn afternoon_points(purchase_time: &str) -> i64 {
    let Some((hour, minute)) = purchase_time.split_once(':') else {
        return 0;
    };

    let (Ok(hour), Ok(minute)) = (hour.parse::<i64>(), minute.parse::<i64>()) else {
        return 0;
    };

    if hour == 14 || (hour == 15 && minute < 60) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Whole-dollar receipt on an even day, outside the afternoon window.
    fn baseline() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-03-02".to_string(),
            purchase_time: "13:01".to_string(),
            total: "10.00".to_string(),
            items: vec![Item::new("abc", "3.00"), Item::new("abcdef", "6.00")],
        }
    }

    #[test]
    fn test_baseline_scores_89() {
        let breakdown = PointsBreakdown::for_receipt(&baseline());

        assert_eq!(
            breakdown,
            PointsBreakdown {
                retailer_name: 6,
                round_dollar_total: 50,
                quarter_multiple_total: 25,
                item_pairs: 5,
                item_descriptions: 3,
                odd_purchase_day: 0,
                afternoon_purchase: 0,
            }
        );
        assert_eq!(breakdown.total(), 89);
    }

    #[test]
    fn test_odd_day_and_afternoon_add_16() {
        let mut receipt = baseline();
        receipt.purchase_date = "2022-03-15".to_string();
        receipt.purchase_time = "14:00".to_string();

        assert_eq!(calculate(&receipt), 105);
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "35.35".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        };

        assert_eq!(calculate(&receipt), 28);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let receipt = baseline();
        let first = calculate(&receipt);
        for _ in 0..10 {
            assert_eq!(calculate(&receipt), first);
        }
    }

    // -------------------------------------------------------------------------
    // Retailer name
    // -------------------------------------------------------------------------

    #[test]
    fn test_retailer_counts_ascii_alphanumerics_only() {
        assert_eq!(retailer_name_points("M&M"), 2);
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("7-Eleven"), 7);
        assert_eq!(retailer_name_points("Café"), 3);
        assert_eq!(retailer_name_points(""), 0);
        assert_eq!(retailer_name_points("  &&  "), 0);
    }

    #[test]
    fn test_retailer_change_moves_only_name_points() {
        let mut receipt = baseline();
        receipt.retailer = "M&M".to_string();
        assert_eq!(calculate(&receipt), 89 - 6 + 2);
    }

    // -------------------------------------------------------------------------
    // Total
    // -------------------------------------------------------------------------

    #[test]
    fn test_total_bonuses() {
        let cases = [
            ("10.00", 50, 25),
            ("10.25", 0, 25),
            ("10.50", 0, 25),
            ("10.75", 0, 25),
            ("10.10", 0, 0),
            ("0.00", 50, 25),
            ("10", 50, 25),
            ("-2.00", 50, 25),
            ("1e1", 50, 25),
            ("2.5e-1", 0, 25),
            ("10.005", 0, 0),
            ("10.250", 0, 25),
        ];

        for (total, round, quarter) in cases {
            let money = total.parse().ok();
            assert_eq!(round_dollar_points(money), round, "round dollar for {}", total);
            assert_eq!(quarter_multiple_points(money), quarter, "quarter for {}", total);
        }
    }

    #[test]
    fn test_malformed_total_scores_zero() {
        for total in ["", "ten", "1,00", " 1.00", "1e", "NaN"] {
            let money = total.parse().ok();
            assert_eq!(round_dollar_points(money), 0, "round dollar for {:?}", total);
            assert_eq!(quarter_multiple_points(money), 0, "quarter for {:?}", total);
        }
    }

    #[test]
    fn test_total_change_moves_only_total_points() {
        let mut receipt = baseline();
        receipt.total = "10.25".to_string();
        assert_eq!(calculate(&receipt), 89 - 50);

        receipt.total = "10.01".to_string();
        assert_eq!(calculate(&receipt), 89 - 75);

        receipt.total = "garbage".to_string();
        assert_eq!(calculate(&receipt), 89 - 75);
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    #[test]
    fn test_item_pairs() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(3), 5);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_item_description_bonus() {
        // 18 chars, 12.25 × 0.2 = 2.45 → 3
        assert_eq!(item_description_points(&Item::new("Emils Cheese Pizza", "12.25")), 3);
        // Trimmed to 24 chars, 12.00 × 0.2 = 2.4 → 3
        assert_eq!(
            item_description_points(&Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")),
            3
        );
        // 17 chars: not a multiple of 3
        assert_eq!(item_description_points(&Item::new("Mountain Dew 12PK", "6.49")), 0);
        // Exact multiple of a dollar bonus is not bumped up
        assert_eq!(item_description_points(&Item::new("abc", "5.00")), 1);
    }

    #[test]
    fn test_sub_cent_and_exponent_prices() {
        // 1.005 × 0.2 = 0.201 → 1
        assert_eq!(item_description_points(&Item::new("abc", "1.005")), 1);
        // 12.999 × 0.2 = 2.5998 → 3
        assert_eq!(item_description_points(&Item::new("abc", "12.999")), 3);
        // 1e1 × 0.2 = 2
        assert_eq!(item_description_points(&Item::new("abc", "1e1")), 2);
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_overflowing() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "14:30".to_string(),
            total: "1.00".to_string(),
            items: vec![Item::new("abc", "92233720368547758.07"); 501],
        };

        let breakdown = PointsBreakdown::for_receipt(&receipt);
        assert_eq!(breakdown.item_descriptions, i64::MAX);
        assert_eq!(calculate(&receipt), i64::MAX);

        let mut receipt = receipt;
        receipt.items = vec![Item::new("abc", "1e27"); 3];
        assert_eq!(calculate(&receipt), i64::MAX);
    }

    #[test]
    fn test_empty_description_qualifies() {
        assert_eq!(item_description_points(&Item::new("", "3.00")), 1);
        assert_eq!(item_description_points(&Item::new("   ", "3.00")), 1);
    }

    #[test]
    fn test_description_length_is_bytes() {
        // "é" is two bytes: "aé" has byte length 3
        assert_eq!(item_description_points(&Item::new("aé", "3.00")), 1);
    }

    #[test]
    fn test_malformed_price_scores_zero() {
        assert_eq!(item_description_points(&Item::new("abc", "")), 0);
        assert_eq!(item_description_points(&Item::new("abc", "three")), 0);
    }

    #[test]
    fn test_adding_items_moves_only_item_points() {
        let mut receipt = baseline();
        receipt.items.push(Item::new("abcd", "1.00")); // unpaired, length 4
        assert_eq!(calculate(&receipt), 89);

        receipt.items.push(Item::new("abcd", "1.00")); // completes a pair
        assert_eq!(calculate(&receipt), 89 + 5);

        receipt.items.push(Item::new("xyz", "7.50")); // 1.50 → 2
        assert_eq!(calculate(&receipt), 89 + 5 + 2);
    }

    // -------------------------------------------------------------------------
    // Purchase date
    // -------------------------------------------------------------------------

    #[test]
    fn test_odd_day() {
        assert_eq!(odd_day_points("2022-01-01"), 6);
        assert_eq!(odd_day_points("2022-03-15"), 6);
        assert_eq!(odd_day_points("2022-03-02"), 0);
        assert_eq!(odd_day_points("2022-03-20"), 0);
    }

    #[test]
    fn test_malformed_date_scores_zero() {
        assert_eq!(odd_day_points(""), 0);
        assert_eq!(odd_day_points("2022-03"), 0);
        assert_eq!(odd_day_points("2022/03/15"), 0);
        assert_eq!(odd_day_points("2022-03-xx"), 0);
        assert_eq!(odd_day_points("2022-03-15-01"), 0);
    }

    #[test]
    fn test_date_change_moves_only_day_points() {
        let mut receipt = baseline();
        receipt.purchase_date = "2022-03-03".to_string();
        assert_eq!(calculate(&receipt), 89 + 6);

        receipt.purchase_date = "not a date".to_string();
        assert_eq!(calculate(&receipt), 89);
    }

    // -------------------------------------------------------------------------
    // Purchase time
    // -------------------------------------------------------------------------

    #[test]
    fn test_afternoon_window_is_half_open() {
        assert_eq!(afternoon_points("13:59"), 0);
        assert_eq!(afternoon_points("14:00"), 10);
        assert_eq!(afternoon_points("14:33"), 10);
        assert_eq!(afternoon_points("15:59"), 10);
        assert_eq!(afternoon_points("16:00"), 0);
    }

    #[test]
    fn test_out_of_range_minute_at_three_pm() {
        assert_eq!(afternoon_points("14:75"), 10);
        assert_eq!(afternoon_points("15:75"), 0);
    }

    #[test]
    fn test_malformed_time_scores_zero() {
        assert_eq!(afternoon_points(""), 0);
        assert_eq!(afternoon_points("14"), 0);
        assert_eq!(afternoon_points("14:xx"), 0);
        assert_eq!(afternoon_points("14:00:00"), 0);
        assert_eq!(afternoon_points("2:30 PM"), 0);
    }

    #[test]
    fn test_time_change_moves_only_afternoon_points() {
        let mut receipt = baseline();
        receipt.purchase_time = "15:30".to_string();
        assert_eq!(calculate(&receipt), 89 + 10);

        receipt.purchase_time = "16:00".to_string();
        assert_eq!(calculate(&receipt), 89);
    }
}
