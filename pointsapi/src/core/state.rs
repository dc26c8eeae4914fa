use crate::store::ReceiptStore;

#[derive(Clone)]
pub struct AppState {
    /// The shared receipt store.
    /// Holds every receipt scored during the lifetime of the process.
    pub store: ReceiptStore,
}

impl AppState {
    pub fn new(store: ReceiptStore) -> Self {
        Self { store }
    }
}
