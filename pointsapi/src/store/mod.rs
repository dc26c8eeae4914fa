use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::prelude::*;

/// In-memory store of scored receipts, keyed by the identifier returned from
/// [`ReceiptStore::put`].
///
/// The handle is cheap to clone and share across request handlers. Entries
/// are immutable once inserted and live for the lifetime of the process;
/// there is no update, delete, or eviction. The map sits behind an `RwLock`,
/// so a concurrent lookup either sees a fully inserted entry or none at all.
///
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    entries: Arc<RwLock<HashMap<Uuid, ScoredReceipt>>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a scored receipt under a freshly generated identifier and
    /// returns that identifier.
    pub async fn put(&self, receipt: Receipt, points: u64) -> Uuid {
        let id = Uuid::new_v4();
        let scored = ScoredReceipt { receipt, points };
        self.entries.write().await.insert(id, scored);
        id
    }

    /// Returns the points stored under an identifier, or `None` if the
    /// identifier was never issued.
    pub async fn get(&self, id: &Uuid) -> Option<u64> {
        self.entries.read().await.get(id).map(|entry| entry.points)
    }

    /// Number of receipts stored so far.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
