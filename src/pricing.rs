//! Pricing

use rust_decimal::Decimal;

use crate::cart::{self, CartItem};

/// Orders with a subtotal at or above this amount ship for free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Flat shipping charge below the free-shipping threshold.
pub const SHIPPING_COST: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// The three amounts frozen onto an order at placement time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    /// Sum of price x quantity over the ordered items.
    pub subtotal: Decimal,

    /// Shipping charge applied to the order.
    pub shipping: Decimal,

    /// Subtotal plus shipping.
    pub total: Decimal,
}

/// Shipping charge for a given subtotal.
pub fn shipping_cost(subtotal: Decimal) -> Decimal {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        Decimal::ZERO
    } else {
        SHIPPING_COST
    }
}

/// Compute the amounts an order placed over `items` would freeze.
pub fn order_totals(items: &[CartItem]) -> OrderTotals {
    let subtotal = cart::subtotal(items);
    let shipping = shipping_cost(subtotal);

    OrderTotals {
        subtotal,
        shipping,
        total: subtotal + shipping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::Product;

    fn item(price: Decimal, quantity: u64) -> CartItem {
        let product = Product {
            id: "1".to_owned(),
            title: "Honey Glazed Ribs".to_owned(),
            price,
            description: String::new(),
            rating: 4.9,
            review_count: 156,
            image: String::new(),
            category: "BBQ".to_owned(),
            featured: true,
        };

        let mut item = CartItem::new(&product, None);
        item.quantity = quantity;
        item
    }

    #[test]
    fn shipping_is_charged_below_threshold() {
        assert_eq!(shipping_cost(Decimal::new(49_99, 2)), SHIPPING_COST);
        assert_eq!(shipping_cost(Decimal::new(45_00, 2)), SHIPPING_COST);
    }

    #[test]
    fn shipping_is_free_at_and_above_threshold() {
        assert_eq!(shipping_cost(FREE_SHIPPING_THRESHOLD), Decimal::ZERO);
        assert_eq!(shipping_cost(Decimal::new(50_01, 2)), Decimal::ZERO);
    }

    #[test]
    fn totals_below_threshold_include_shipping() {
        let totals = order_totals(&[item(Decimal::new(45_00, 2), 1)]);

        assert_eq!(totals.subtotal, Decimal::new(45_00, 2));
        assert_eq!(totals.shipping, SHIPPING_COST);
        assert_eq!(totals.total, Decimal::new(55_00, 2));
    }

    #[test]
    fn totals_at_threshold_ship_free() {
        let totals = order_totals(&[item(Decimal::new(25_00, 2), 2)]);

        assert_eq!(totals.subtotal, Decimal::new(50_00, 2));
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::new(50_00, 2));
    }

    #[test]
    fn totals_over_empty_items() {
        let totals = order_totals(&[]);

        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping, SHIPPING_COST);
        assert_eq!(totals.total, SHIPPING_COST);
    }
}
