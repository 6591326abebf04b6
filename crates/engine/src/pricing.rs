//! Owner-facing rental pricing.
//!
//! Rule: `total = area(m²) × 0.0025 USD × months`, quoted per fixed duration
//! tier. The engine computes one quote per tier and leaves the choice to the
//! owner; it never picks a "best" plan.

use serde::{Deserialize, Serialize};

use crate::config::ZONE_PRICE_PER_SQM_MONTH;

/// One offered rental duration plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationTier {
    pub months: u32,
    pub label: &'static str,
    pub tag: &'static str,
    /// Highlighted as the suggested plan in owner-facing UI.
    pub suggested: bool,
}

/// The fixed plan table. Months outside this table are not purchasable.
pub const DURATION_TIERS: [DurationTier; 3] = [
    DurationTier {
        months: 1,
        label: "1 Month Plan",
        tag: "Standard",
        suggested: false,
    },
    DurationTier {
        months: 3,
        label: "3 Months Plan",
        tag: "Quarterly",
        suggested: true,
    },
    DurationTier {
        months: 12,
        label: "1 Year Plan",
        tag: "Annual Value",
        suggested: false,
    },
];

/// Look up the tier offering exactly `months` months.
pub fn tier_for(months: u32) -> Option<&'static DurationTier> {
    DURATION_TIERS.iter().find(|tier| tier.months == months)
}

/// A computed total for one duration. Derived on demand, never stored on the
/// zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub months: u32,
    /// Total in USD with exactly two fraction digits.
    pub total_usd: String,
}

/// Quote `area_sqm` square meters for `months` months.
///
/// No area floor here: quotes below the viability minimum are computable,
/// the editor just refuses to present them for purchase.
pub fn quote(area_sqm: u32, months: u32) -> PriceQuote {
    let raw = f64::from(area_sqm) * ZONE_PRICE_PER_SQM_MONTH * f64::from(months);
    PriceQuote {
        months,
        total_usd: format_usd(raw),
    }
}

/// One quote per entry of [`DURATION_TIERS`], in table order.
pub fn quote_all_tiers(area_sqm: u32) -> [PriceQuote; DURATION_TIERS.len()] {
    DURATION_TIERS.map(|tier| quote(area_sqm, tier.months))
}

/// Render a raw USD amount with exactly two fraction digits.
pub fn format_usd(raw: f64) -> String {
    format!("{raw:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(quote: &PriceQuote) -> f64 {
        quote.total_usd.parse().unwrap()
    }

    #[test]
    fn quote_matches_reference_vectors() {
        // A 20 m radius circle covers round(π · 20²) = 1257 m².
        assert_eq!(quote(1_257, 1).total_usd, "3.14");
        assert_eq!(quote(1_257, 3).total_usd, "9.43");
        assert_eq!(quote(1_257, 12).total_usd, "37.71");
    }

    #[test]
    fn quote_is_linear_in_area_and_months() {
        // Two independent 2-decimal roundings may disagree by one cent.
        const TOLERANCE: f64 = 0.011;

        for (area, months) in [(1_257u32, 3u32), (420, 1), (10_000, 12), (33, 7)] {
            let base = usd(&quote(area, months));
            assert!((usd(&quote(area * 2, months)) - 2.0 * base).abs() <= TOLERANCE);
            assert!((usd(&quote(area, months * 2)) - 2.0 * base).abs() <= TOLERANCE);
        }
    }

    #[test]
    fn zero_area_quotes_to_zero() {
        assert_eq!(quote(0, 12).total_usd, "0.00");
    }

    #[test]
    fn tier_table_offers_one_three_and_twelve_months() {
        let months: Vec<u32> = DURATION_TIERS.iter().map(|t| t.months).collect();
        assert_eq!(months, vec![1, 3, 12]);

        // Exactly one suggested plan: the quarterly one.
        let suggested: Vec<&DurationTier> =
            DURATION_TIERS.iter().filter(|t| t.suggested).collect();
        assert_eq!(suggested.len(), 1);
        assert_eq!(suggested[0].months, 3);
        assert_eq!(suggested[0].tag, "Quarterly");
    }

    #[test]
    fn tier_for_rejects_unoffered_durations() {
        assert!(tier_for(3).is_some());
        assert!(tier_for(6).is_none());
        assert!(tier_for(0).is_none());
    }

    #[test]
    fn quote_all_tiers_follows_table_order() {
        let quotes = quote_all_tiers(1_257);
        assert_eq!(
            quotes.iter().map(|q| q.months).collect::<Vec<_>>(),
            vec![1, 3, 12]
        );
        assert_eq!(quotes[1].total_usd, "9.43");
    }
}
