//! Cart items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// One line entry in the cart.
///
/// The cart holds at most one item per `(product, plan)` pair; adding the same
/// pair again increments the quantity instead. `quantity` is always at least
/// one — an item whose quantity would drop to zero is removed, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Derived line-item key, see [`cart_item_id`].
    pub id: String,

    /// Product snapshot taken when the item was first added.
    pub product: Product,

    /// Number of units, always >= 1.
    pub quantity: u64,

    /// Selected subscription plan value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_plan: Option<String>,
}

impl CartItem {
    /// Create a fresh single-unit line item for a product and optional plan.
    pub fn new(product: &Product, plan: Option<&str>) -> Self {
        CartItem {
            id: cart_item_id(&product.id, plan),
            product: product.clone(),
            quantity: 1,
            selected_plan: plan.map(str::to_owned),
        }
    }
}

/// Derive the line-item key for a product and optional plan.
///
/// Plan variants of the same product are distinct line items, so the plan
/// value is folded into the key: `"5"` without a plan, `"5_3-months"` with
/// one.
pub fn cart_item_id(product_id: &str, plan: Option<&str>) -> String {
    match plan {
        Some(plan) => format!("{product_id}_{plan}"),
        None => product_id.to_owned(),
    }
}

/// Total unit count across all line items.
pub fn total_items(items: &[CartItem]) -> u64 {
    items.iter().map(|item| item.quantity).sum()
}

/// Sum of price x quantity across all line items.
pub fn subtotal(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .map(|item| item.product.price * Decimal::from(item.quantity))
        .sum()
}
