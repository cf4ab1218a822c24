//! Smokehouse
//!
//! Smokehouse is the cart and order engine behind a small BBQ storefront: it
//! owns the in-memory cart and order history for a shopping session,
//! synchronises both to a durable key-value store on a best-effort basis, and
//! exposes the mutation and query operations a presentation layer needs.
//!
//! The crate deliberately stops at the state boundary. Screens, navigation and
//! payment capture are collaborators; so is the durable store, which is only
//! reached through the [`storage::KeyValueStore`] seam.

pub mod cart;
pub mod fixtures;
pub mod orders;
pub mod plans;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod storage;
pub mod store;
