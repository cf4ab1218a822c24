//! Cart/order store.
//!
//! [`CartStore`] is the single stateful component of the crate: it owns the
//! live cart and the order history for one shopping session, and mirrors both
//! to a [`KeyValueStore`] on a best-effort basis. In-memory state is the
//! source of truth; persistence failures are logged and swallowed, and a
//! missing or corrupt blob at startup degrades to an empty session rather
//! than an error.

use std::{fmt, sync::Arc};

use rust_decimal::Decimal;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::{mpsc, oneshot};
use tracing::{Span, info, warn};

use crate::{
    cart::{self, CartItem, cart_item_id},
    orders::{Order, ShippingAddress},
    pricing,
    products::Product,
    storage::{CART_KEY, KeyValueStore, ORDER_HISTORY_KEY},
};

/// Lifecycle of a store.
///
/// A store starts [`StoreStatus::Loading`] and flips to
/// [`StoreStatus::Ready`] once the initial fetch of both persisted
/// collections has resolved. Reads of the cart and order history are only
/// meaningful once ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// Initial load from durable storage has not completed yet.
    Loading,

    /// Initial load has resolved; persisted writes are now allowed.
    Ready,
}

enum WriterMessage {
    Write { key: &'static str, payload: String },
    Flush(oneshot::Sender<()>),
}

/// The cart and order-history state machine.
///
/// Constructed with an explicit storage collaborator and injected into
/// consumers by reference; there is no ambient singleton. Must be created
/// inside a Tokio runtime, since persistence runs on a background task.
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    writer: mpsc::UnboundedSender<WriterMessage>,
    items: Vec<CartItem>,
    order_history: Vec<Order>,
    status: StoreStatus,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("order_history", &self.order_history)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create a store in the [`StoreStatus::Loading`] state.
    ///
    /// Call [`CartStore::load`] to pull persisted state and become ready, or
    /// use [`CartStore::open`] to do both in one step.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let (writer, receiver) = mpsc::unbounded_channel();

        tokio::spawn(run_writer(Arc::clone(&storage), receiver));

        CartStore {
            storage,
            writer,
            items: Vec::new(),
            order_history: Vec::new(),
            status: StoreStatus::Loading,
        }
    }

    /// Create a store and load persisted state.
    pub async fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut store = CartStore::new(storage);
        store.load().await;
        store
    }

    /// Load the cart and order history from durable storage.
    ///
    /// A missing key or an undecodable blob defaults the affected collection
    /// to empty; neither is fatal. No-op once the store is ready.
    #[tracing::instrument(name = "store.load", skip(self))]
    pub async fn load(&mut self) {
        if self.status == StoreStatus::Ready {
            return;
        }

        self.items = read_collection(self.storage.as_ref(), CART_KEY).await;
        self.order_history = read_collection(self.storage.as_ref(), ORDER_HISTORY_KEY).await;
        self.status = StoreStatus::Ready;

        info!(
            items = self.items.len(),
            orders = self.order_history.len(),
            "store ready"
        );
    }

    /// Add one unit of a product, with an optional subscription plan.
    ///
    /// An existing line item for the same `(product, plan)` pair has its
    /// quantity incremented; otherwise a new single-unit item is appended.
    pub fn add_to_cart(&mut self, product: &Product, plan: Option<&str>) {
        let id = cart_item_id(&product.id, plan);

        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::new(product, plan));
        }

        self.persist_cart();
    }

    /// Remove the line item with the given id; unknown ids are a no-op.
    pub fn remove_from_cart(&mut self, item_id: &str) {
        self.items.retain(|item| item.id != item_id);
        self.persist_cart();
    }

    /// Set a line item's quantity to an absolute value.
    ///
    /// A quantity of zero or less removes the item. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) {
        let Ok(quantity @ 1..) = u64::try_from(quantity) else {
            self.remove_from_cart(item_id);
            return;
        };

        if let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) {
            item.quantity = quantity;
        }

        self.persist_cart();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.persist_cart();
    }

    /// Check out the current cart.
    ///
    /// Freezes the totals and a deep snapshot of the items into a new
    /// [`Order`], prepends it to the history (newest first), clears the cart
    /// and persists both collections. The caller is responsible for blocking
    /// empty-cart checkouts; this operation does not.
    #[tracing::instrument(
        name = "store.place_order",
        skip(self, shipping_address),
        fields(order_id = tracing::field::Empty)
    )]
    pub fn place_order(&mut self, shipping_address: ShippingAddress) -> Order {
        let totals = pricing::order_totals(&self.items);
        let order = Order::place(self.items.clone(), totals, shipping_address);

        Span::current().record("order_id", tracing::field::display(&order.id));
        info!(total = %order.total, items = order.items.len(), "order placed");

        self.order_history.insert(0, order.clone());
        self.items.clear();

        self.persist_order_history();
        self.persist_cart();

        order
    }

    /// Current cart line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Past orders, newest first.
    pub fn order_history(&self) -> &[Order] {
        &self.order_history
    }

    /// Total unit count across the cart.
    pub fn total_items(&self) -> u64 {
        cart::total_items(&self.items)
    }

    /// Sum of price x quantity across the cart.
    pub fn cart_total(&self) -> Decimal {
        cart::subtotal(&self.items)
    }

    /// Current lifecycle state.
    pub fn status(&self) -> StoreStatus {
        self.status
    }

    /// Whether the initial load has completed.
    pub fn is_ready(&self) -> bool {
        self.status == StoreStatus::Ready
    }

    /// Wait until every persistence write issued so far has been handed to
    /// the backend. Useful at shutdown and in tests; normal operation never
    /// awaits writes.
    pub async fn flush(&self) {
        let (done, waiter) = oneshot::channel();

        if self.writer.send(WriterMessage::Flush(done)).is_ok() {
            waiter.await.ok();
        }
    }

    fn persist_cart(&self) {
        self.persist(CART_KEY, &self.items);
    }

    fn persist_order_history(&self) {
        self.persist(ORDER_HISTORY_KEY, &self.order_history);
    }

    /// Queue a snapshot write. Writes issued before the initial load has
    /// completed are suppressed so not-yet-loaded persisted data is never
    /// clobbered with defaults.
    fn persist<T: Serialize>(&self, key: &'static str, collection: &T) {
        if self.status != StoreStatus::Ready {
            return;
        }

        let payload = match serde_json::to_string(collection) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(key, %error, "failed to encode snapshot for persistence");
                return;
            }
        };

        if self
            .writer
            .send(WriterMessage::Write { key, payload })
            .is_err()
        {
            warn!(key, "persistence writer is gone; dropping snapshot");
        }
    }
}

/// Background writer task: applies queued snapshots to the backend one at a
/// time, in issue order, so the durable state converges on the latest
/// in-memory snapshot even when individual writes are slow or fail.
async fn run_writer(
    storage: Arc<dyn KeyValueStore>,
    mut receiver: mpsc::UnboundedReceiver<WriterMessage>,
) {
    while let Some(message) = receiver.recv().await {
        match message {
            WriterMessage::Write { key, payload } => {
                if let Err(error) = storage.set(key, payload).await {
                    warn!(key, %error, "persistence write failed; in-memory state remains authoritative");
                }
            }
            WriterMessage::Flush(done) => {
                done.send(()).ok();
            }
        }
    }
}

async fn read_collection<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Vec<T> {
    match storage.get(key).await {
        Ok(Some(blob)) => match serde_json::from_str(&blob) {
            Ok(collection) => collection,
            Err(error) => {
                warn!(key, %error, "discarding undecodable persisted blob");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(error) => {
            warn!(key, %error, "failed to read persisted state; starting empty");
            Vec::new()
        }
    }
}
