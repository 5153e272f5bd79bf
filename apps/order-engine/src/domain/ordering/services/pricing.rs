//! Line price derivation.

use crate::domain::shared::{Money, Quantity};

/// Compute the price of an order line: `quantity x unit price`.
///
/// This is evaluated and stored on every create or update of an order
/// item, immediately before persistence. Any externally supplied price
/// is ignored in favor of this derivation.
#[must_use]
pub fn line_price(unit_price: Money, quantity: Quantity) -> Money {
    unit_price * quantity
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn line_price_multiplies() {
        let unit = Money::from_cents(1000); // 10.00
        let price = line_price(unit, Quantity::new(2).unwrap());
        assert_eq!(price.amount(), dec!(20.00));
    }

    #[test]
    fn line_price_of_one_is_unit_price() {
        let unit = Money::from_cents(599);
        assert_eq!(line_price(unit, Quantity::ONE), unit);
    }

    proptest! {
        #[test]
        fn line_price_is_quantity_times_unit(cents in 0i64..10_000_000, qty in 1u32..10_000) {
            let unit = Money::from_cents(cents);
            let quantity = Quantity::new(qty).unwrap();
            let price = line_price(unit, quantity);
            prop_assert_eq!(price.amount(), unit.amount() * Decimal::from(qty));
        }

        #[test]
        fn line_price_is_never_negative_for_catalog_prices(cents in 0i64..10_000_000, qty in 1u32..10_000) {
            let price = line_price(Money::from_cents(cents), Quantity::new(qty).unwrap());
            prop_assert!(!price.is_negative());
        }
    }
}
