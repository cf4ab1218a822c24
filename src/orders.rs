//! Orders

use jiff::Timestamp;
use rand::{Rng, distributions::Alphanumeric};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{cart::CartItem, pricing::OrderTotals};

/// Fulfilment state of an order.
///
/// Set to [`OrderStatus::Processing`] at placement and never advanced by this
/// crate; state transitions belong to a future fulfilment concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed and awaiting fulfilment.
    Processing,

    /// Handed to the carrier.
    Shipped,

    /// Delivered to the customer.
    Delivered,
}

/// Free-text shipping destination captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Recipient name.
    pub name: String,

    /// Street address.
    pub street: String,

    /// City.
    pub city: String,

    /// State or region.
    pub state: String,

    /// Postal code.
    pub zip_code: String,
}

/// An immutable record of a checked-out cart.
///
/// The item list is a deep snapshot of the cart at placement time and the
/// amounts are frozen; neither is recomputed if the cart or the shipping
/// rules change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Generated order reference, `POM-<millis>-<suffix>`.
    pub id: String,

    /// Placement time.
    pub placed_at: Timestamp,

    /// Snapshot of the ordered line items.
    pub items: Vec<CartItem>,

    /// Sum of price x quantity at placement.
    pub subtotal: Decimal,

    /// Shipping charge at placement.
    pub shipping: Decimal,

    /// Subtotal plus shipping.
    pub total: Decimal,

    /// Fulfilment state, write-once.
    pub status: OrderStatus,

    /// Destination captured at checkout.
    pub shipping_address: ShippingAddress,
}

impl Order {
    /// Build the order record for a checkout of `items`.
    pub(crate) fn place(
        items: Vec<CartItem>,
        totals: OrderTotals,
        shipping_address: ShippingAddress,
    ) -> Self {
        let placed_at = Timestamp::now();

        Order {
            id: order_reference(placed_at),
            placed_at,
            items,
            subtotal: totals.subtotal,
            shipping: totals.shipping,
            total: totals.total,
            status: OrderStatus::Processing,
            shipping_address,
        }
    }
}

/// Generate an order reference for an order placed at `placed_at`.
///
/// Millisecond timestamp plus a random uppercase alphanumeric suffix, unique
/// with overwhelming probability.
fn order_reference(placed_at: Timestamp) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    format!(
        "POM-{}-{}",
        placed_at.as_millisecond(),
        suffix.to_uppercase()
    )
}
