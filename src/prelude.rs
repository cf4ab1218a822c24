//! Smokehouse prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::CartItem,
    orders::{Order, OrderStatus, ShippingAddress},
    plans::{PLAN_OPTIONS, PlanOption, plan_label},
    pricing::{FREE_SHIPPING_THRESHOLD, OrderTotals, SHIPPING_COST},
    products::{Catalog, Product},
    storage::{KeyValueStore, StorageError},
    store::{CartStore, StoreStatus},
};
