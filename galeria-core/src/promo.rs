//! Promo pricing rules for the storefront calculators.
//!
//! All money is integer cents; formatting to ARS happens at the
//! presentation edge.

use serde::{Deserialize, Serialize};

/// Spend threshold for the barbería bundle promo, in cents (ARS 20.000).
pub const BUNDLE_THRESHOLD_CENTS: i64 = 2_000_000;

/// Spend threshold for the videojuegos volume promo, in cents (ARS 900.000).
pub const VOLUME_THRESHOLD_CENTS: i64 = 90_000_000;

/// Discount rate applied once a spend threshold is met.
pub const THRESHOLD_RATE_PCT: u8 = 10;

/// Subtotal, discount and final total of one promo computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoTotals {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl PromoTotals {
    /// Build totals from a subtotal and a raw discount.
    ///
    /// The discount is clamped into `0..=subtotal` so the final total can
    /// never go negative.
    #[must_use]
    pub fn new(subtotal_cents: i64, discount_cents: i64) -> Self {
        let subtotal = subtotal_cents.max(0);
        let discount = discount_cents.clamp(0, subtotal);
        Self {
            subtotal_cents: subtotal,
            discount_cents: discount,
            total_cents: subtotal - discount,
        }
    }
}

/// "Dúo" promo: taking two products, the cheaper one is half price.
#[must_use]
pub fn cheapest_half(a_cents: i64, b_cents: i64) -> PromoTotals {
    PromoTotals::new(a_cents + b_cents, a_cents.min(b_cents) / 2)
}

/// "Trío" promo: booking three services, the cheapest one is free.
#[must_use]
pub fn cheapest_free(prices_cents: [i64; 3]) -> PromoTotals {
    let [a, b, c] = prices_cents;
    PromoTotals::new(a + b + c, a.min(b).min(c))
}

/// Pair promo: every second unit of the same item is half price.
#[must_use]
pub fn pair_half(price_cents: i64, qty: u32) -> PromoTotals {
    let qty = i64::from(qty);
    let pairs = qty / 2;
    PromoTotals::new(price_cents * qty, pairs * (price_cents / 2))
}

/// Combo promo over three optional picks: the cheapest is free only once
/// all three slots are filled. Empty slots contribute nothing.
#[must_use]
pub fn three_pick(prices_cents: [Option<i64>; 3]) -> PromoTotals {
    let subtotal: i64 = prices_cents.iter().flatten().sum();
    let discount = match prices_cents {
        [Some(a), Some(b), Some(c)] => a.min(b).min(c),
        _ => 0,
    };
    PromoTotals::new(subtotal, discount)
}

/// Outcome of a spend-threshold promo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdOutcome {
    pub totals: PromoTotals,
    /// Amount still missing to qualify; `None` once the threshold is met.
    pub shortfall_cents: Option<i64>,
}

/// Threshold promo: spending at least `threshold_cents` takes
/// `rate_pct` percent off the whole subtotal.
#[must_use]
pub fn threshold(subtotal_cents: i64, threshold_cents: i64, rate_pct: u8) -> ThresholdOutcome {
    let subtotal = subtotal_cents.max(0);
    if subtotal >= threshold_cents {
        let discount = subtotal * i64::from(rate_pct) / 100;
        ThresholdOutcome {
            totals: PromoTotals::new(subtotal, discount),
            shortfall_cents: None,
        }
    } else {
        ThresholdOutcome {
            totals: PromoTotals::new(subtotal, 0),
            shortfall_cents: Some(threshold_cents - subtotal),
        }
    }
}

/// One checked line of the bundle card: unit price times quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleLine {
    pub price_cents: i64,
    pub qty: u32,
}

/// Subtotal over the checked bundle lines.
#[must_use]
pub fn bundle_subtotal(lines: &[BundleLine]) -> i64 {
    lines
        .iter()
        .map(|line| line.price_cents * i64::from(line.qty))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duo_discount_is_half_the_cheaper_price() {
        let totals = cheapest_half(450_000, 600_000);
        assert_eq!(totals.subtotal_cents, 1_050_000);
        assert_eq!(totals.discount_cents, 225_000);
        assert_eq!(totals.total_cents, 825_000);

        // Order does not matter.
        assert_eq!(cheapest_half(600_000, 450_000), totals);
    }

    #[test]
    fn trio_makes_the_cheapest_service_free() {
        let totals = cheapest_free([800_000, 550_000, 1_200_000]);
        assert_eq!(totals.subtotal_cents, 2_550_000);
        assert_eq!(totals.discount_cents, 550_000);
        assert_eq!(totals.total_cents, 2_000_000);
    }

    #[test]
    fn pair_promo_halves_every_second_unit() {
        let totals = pair_half(4_500_000, 5);
        assert_eq!(totals.subtotal_cents, 22_500_000);
        // Two complete pairs, half price each.
        assert_eq!(totals.discount_cents, 4_500_000);
        assert_eq!(totals.total_cents, 18_000_000);

        assert_eq!(pair_half(4_500_000, 1).discount_cents, 0);
        assert_eq!(pair_half(4_500_000, 0).subtotal_cents, 0);
    }

    #[test]
    fn three_pick_discounts_only_with_all_slots_filled() {
        let partial = three_pick([Some(4_500_000), None, Some(3_900_000)]);
        assert_eq!(partial.subtotal_cents, 8_400_000);
        assert_eq!(partial.discount_cents, 0);

        let full = three_pick([Some(4_500_000), Some(6_800_000), Some(3_900_000)]);
        assert_eq!(full.discount_cents, 3_900_000);
        assert_eq!(full.total_cents, 11_300_000);
    }

    #[test]
    fn threshold_promo_switches_on_the_exact_boundary() {
        let below = threshold(BUNDLE_THRESHOLD_CENTS - 1, BUNDLE_THRESHOLD_CENTS, 10);
        assert_eq!(below.totals.discount_cents, 0);
        assert_eq!(below.shortfall_cents, Some(1));

        let at = threshold(BUNDLE_THRESHOLD_CENTS, BUNDLE_THRESHOLD_CENTS, 10);
        assert_eq!(at.totals.discount_cents, BUNDLE_THRESHOLD_CENTS / 10);
        assert_eq!(at.shortfall_cents, None);

        let above = threshold(3_000_000, BUNDLE_THRESHOLD_CENTS, 10);
        assert_eq!(above.totals.discount_cents, 300_000);
        assert_eq!(above.totals.total_cents, 2_700_000);
    }

    #[test]
    fn bundle_subtotal_multiplies_price_by_quantity() {
        let lines = [
            BundleLine {
                price_cents: 350_000,
                qty: 2,
            },
            BundleLine {
                price_cents: 480_000,
                qty: 1,
            },
        ];
        assert_eq!(bundle_subtotal(&lines), 1_180_000);
        assert_eq!(bundle_subtotal(&[]), 0);
    }

    #[test]
    fn totals_never_go_negative() {
        let totals = PromoTotals::new(100, 500);
        assert_eq!(totals.discount_cents, 100);
        assert_eq!(totals.total_cents, 0);

        let negative = PromoTotals::new(-50, 10);
        assert_eq!(negative.subtotal_cents, 0);
        assert_eq!(negative.total_cents, 0);
    }
}
