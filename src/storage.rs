//! Durable key-value storage seam.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub mod fs;
pub mod memory;

/// Key the serialized cart collection is stored under.
pub const CART_KEY: &str = "cart";

/// Key the serialized order history is stored under.
pub const ORDER_HISTORY_KEY: &str = "order-history";

/// Errors surfaced by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file or device could not be read or written.
    #[error("storage I/O failure")]
    Io(#[from] std::io::Error),

    /// The backend rejected or could not service the operation.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous key-value persistence collaborator.
///
/// The store reads each key once at startup and rewrites whole collections on
/// mutation; blobs are opaque to the backend.
#[automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the blob stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any existing blob.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
