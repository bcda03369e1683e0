//! Price derivation.
//!
//! The provider quotes prices at the offer level as decimal strings. The
//! derived fee is `grandTotal - base` when both parse; when either is
//! missing or unparseable the explicit `fees` line items are summed
//! instead, and with neither available the fee stays absent rather than
//! being fabricated as zero.

use serde_json::Value;

use super::model::Price;
use crate::amadeus::RawOffer;
use crate::json;

/// Derive the offer-level price breakdown, if the offer carries a price
/// node at all.
pub fn derive_price(offer: &RawOffer) -> Option<Price> {
    let offer_value = offer.as_value();
    let price_node = offer_value.get("price")?;

    let currency = json::text_at(price_node, &["currency"]).map(str::to_string);
    let total = json::text_at(price_node, &["grandTotal"]).map(str::to_string);
    let base = json::text_at(price_node, &["base"]).map(str::to_string);

    let fees = derive_fees(price_node, base.as_deref(), total.as_deref());
    let price_per_adult = per_traveler_price(offer, total.as_deref());

    Some(Price {
        currency,
        total,
        base,
        fees,
        price_per_adult,
    })
}

/// Number of travelers on an offer: the size of the per-traveler pricing
/// array, or `default` when the provider sent none.
pub fn traveler_count(offer: &RawOffer, default: u32) -> u32 {
    match offer.traveler_pricings() {
        Some(pricings) => pricings.len() as u32,
        None => {
            tracing::warn!(
                offer_id = offer.offer_id().unwrap_or("<missing>"),
                default,
                "travelerPricings missing, defaulting traveler count"
            );
            default
        }
    }
}

/// Fee derivation: `total - base` at two decimals when both parse,
/// otherwise the sum of explicit fee line items, otherwise absent.
fn derive_fees(price_node: &Value, base: Option<&str>, total: Option<&str>) -> Option<String> {
    if let (Some(base), Some(total)) = (base, total)
        && let (Ok(base), Ok(total)) = (base.parse::<f64>(), total.parse::<f64>())
    {
        return Some(format!("{:.2}", total - base));
    }

    let fee_items = json::array_at(price_node, &["fees"])?;
    let sum: f64 = fee_items
        .iter()
        .filter_map(|fee| json::number_at(fee, &["amount"]))
        .sum();
    Some(format!("{sum:.2}"))
}

/// Per-traveler price: the first traveler's total, falling back to the
/// offer's grand total.
fn per_traveler_price(offer: &RawOffer, total: Option<&str>) -> Option<String> {
    if let Some(pricings) = offer.traveler_pricings()
        && let Some(first) = pricings.first()
        && let Some(per_adult) = json::text_at(first, &["price", "total"])
    {
        return Some(per_adult.to_string());
    }
    total.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer(value: Value) -> RawOffer {
        RawOffer::new(value)
    }

    #[test]
    fn fee_is_total_minus_base() {
        let offer = offer(json!({
            "price": {"currency": "USD", "base": "450.00", "grandTotal": "500.00"}
        }));

        let price = derive_price(&offer).unwrap();
        assert_eq!(price.base.as_deref(), Some("450.00"));
        assert_eq!(price.total.as_deref(), Some("500.00"));
        assert_eq!(price.fees.as_deref(), Some("50.00"));
        assert_eq!(price.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn fee_rounds_to_two_decimals() {
        let offer = offer(json!({
            "price": {"base": "100.10", "grandTotal": "133.43"}
        }));
        assert_eq!(derive_price(&offer).unwrap().fees.as_deref(), Some("33.33"));
    }

    #[test]
    fn unparseable_total_falls_back_to_fee_items() {
        let offer = offer(json!({
            "price": {
                "base": "100.00",
                "grandTotal": "not-a-number",
                "fees": [{"amount": "10.00"}, {"amount": 2.5}]
            }
        }));
        assert_eq!(derive_price(&offer).unwrap().fees.as_deref(), Some("12.50"));
    }

    #[test]
    fn missing_base_and_no_fee_items_yields_absent_fee() {
        let offer = offer(json!({
            "price": {"grandTotal": "500.00"}
        }));
        let price = derive_price(&offer).unwrap();
        assert_eq!(price.fees, None);
        // total still carried through
        assert_eq!(price.total.as_deref(), Some("500.00"));
    }

    #[test]
    fn missing_price_node_yields_no_price() {
        assert!(derive_price(&offer(json!({"id": "1"}))).is_none());
    }

    #[test]
    fn per_adult_from_first_traveler() {
        let offer = offer(json!({
            "price": {"base": "900.00", "grandTotal": "1000.00"},
            "travelerPricings": [
                {"travelerId": "1", "price": {"total": "500.00"}},
                {"travelerId": "2", "price": {"total": "500.00"}}
            ]
        }));
        assert_eq!(
            derive_price(&offer).unwrap().price_per_adult.as_deref(),
            Some("500.00")
        );
    }

    #[test]
    fn per_adult_falls_back_to_grand_total() {
        let offer = offer(json!({
            "price": {"base": "450.00", "grandTotal": "500.00"}
        }));
        assert_eq!(
            derive_price(&offer).unwrap().price_per_adult.as_deref(),
            Some("500.00")
        );
    }

    #[test]
    fn traveler_count_from_pricings() {
        let offer = offer(json!({
            "travelerPricings": [{}, {}, {}]
        }));
        assert_eq!(traveler_count(&offer, 1), 3);
    }

    #[test]
    fn traveler_count_default_when_absent() {
        let offer = offer(json!({"id": "1"}));
        assert_eq!(traveler_count(&offer, 1), 1);
        assert_eq!(traveler_count(&offer, 0), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        /// Whenever base and total both parse, fee = total - base at two
        /// decimals, exactly.
        #[test]
        fn fee_invariant(base_cents in 0u64..10_000_000, fee_cents in 0u64..1_000_000) {
            let base = base_cents as f64 / 100.0;
            let total = (base_cents + fee_cents) as f64 / 100.0;

            let offer = RawOffer::new(json!({
                "price": {
                    "base": format!("{base:.2}"),
                    "grandTotal": format!("{total:.2}"),
                }
            }));

            let price = derive_price(&offer).unwrap();
            let expected = format!("{:.2}", fee_cents as f64 / 100.0);
            prop_assert_eq!(price.fees.as_deref(), Some(expected.as_str()));
        }
    }
}
