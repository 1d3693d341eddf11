//! Order and cart totals in minor currency units.

use crate::{config::PricingConfig, errors::ServiceError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceSummary {
    pub subtotal: i64,
    pub tax: i64,
    pub shipping: i64,
    pub total: i64,
}

/// Price of `quantity` units, or `BadRequest` when it does not fit in `i64`.
pub fn line_total(price: i64, quantity: i32) -> Result<i64, ServiceError> {
    price.checked_mul(i64::from(quantity)).ok_or_else(too_large)
}

/// Computes subtotal, tax and shipping for `(unit_price, quantity)` lines.
///
/// Tax is rounded half-up to the nearest minor unit. Shipping only applies to
/// a non-empty set of lines.
pub fn summarize<I>(lines: I, pricing: &PricingConfig) -> Result<PriceSummary, ServiceError>
where
    I: IntoIterator<Item = (i64, i32)>,
{
    let mut subtotal: i64 = 0;
    let mut has_lines = false;

    for (price, quantity) in lines {
        subtotal = subtotal
            .checked_add(line_total(price, quantity)?)
            .ok_or_else(too_large)?;
        has_lines = true;
    }

    if !has_lines {
        return Ok(PriceSummary::default());
    }

    let tax = tax_for(subtotal, pricing.tax_rate_bps)?;
    let shipping = pricing.shipping_fee;

    let total = subtotal
        .checked_add(tax)
        .and_then(|sum| sum.checked_add(shipping))
        .ok_or_else(too_large)?;

    Ok(PriceSummary {
        subtotal,
        tax,
        shipping,
        total,
    })
}

fn tax_for(subtotal: i64, rate_bps: i64) -> Result<i64, ServiceError> {
    subtotal
        .checked_mul(rate_bps)
        .and_then(|scaled| scaled.checked_add(5_000))
        .map(|scaled| scaled.div_euclid(10_000))
        .ok_or_else(too_large)
}

fn too_large() -> ServiceError {
    ServiceError::BadRequest("Amount is too large".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing(tax_rate_bps: i64, shipping_fee: i64) -> PricingConfig {
        PricingConfig {
            tax_rate_bps,
            shipping_fee,
        }
    }

    #[test]
    fn empty_lines_cost_nothing() {
        let summary = summarize(Vec::new(), &pricing(1_000, 5_000)).unwrap();
        assert_eq!(summary, PriceSummary::default());
    }

    #[test]
    fn sums_lines_and_adds_tax_and_shipping() {
        let summary = summarize(vec![(2_500, 2), (1_000, 1)], &pricing(500, 300)).unwrap();

        assert_eq!(summary.subtotal, 6_000);
        assert_eq!(summary.tax, 300);
        assert_eq!(summary.shipping, 300);
        assert_eq!(summary.total, 6_600);
    }

    #[test]
    fn tax_rounds_half_up() {
        // 5% of 1_010 is 50.5
        assert_eq!(summarize(vec![(1_010, 1)], &pricing(500, 0)).unwrap().tax, 51);
        // 5% of 1_009 is 50.45
        assert_eq!(summarize(vec![(1_009, 1)], &pricing(500, 0)).unwrap().tax, 50);
    }

    #[test]
    fn free_items_still_pay_shipping() {
        let summary = summarize(vec![(0, 3)], &pricing(500, 1_500)).unwrap();
        assert_eq!(summary.total, 1_500);
    }

    #[test]
    fn overflowing_amounts_are_rejected() {
        let err = summarize(vec![(50_000_000, i32::MAX)], &pricing(500, 0)).unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));

        let err = summarize(vec![(i64::MAX, 1), (1, 1)], &pricing(0, 0)).unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));

        assert!(line_total(i64::MAX, 2).is_err());
        assert_eq!(line_total(2_500, 4).unwrap(), 10_000);
    }
}
