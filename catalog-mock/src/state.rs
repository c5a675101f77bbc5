use crate::store::ProductStore;

pub struct AppState {
    pub store: ProductStore,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ProductStore::default())
    }
}
