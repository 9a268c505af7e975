use std::sync::RwLock;

use medstock_inventory::{Medicine, Store, StoreResult};

/// Shared application state: the inventory store behind a single lock.
///
/// Every handler goes through these methods, so mutations serialize against
/// each other and against reads; a read immediately after a successful write
/// observes that write.
#[derive(Debug, Default)]
pub struct AppServices {
    store: RwLock<Store>,
}

impl AppServices {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::new()),
        }
    }

    pub fn create(&self, name: &str, price: f64) -> StoreResult<Medicine> {
        self.store.write().unwrap().create(name, price)
    }

    pub fn update(&self, name: &str, price: f64) -> StoreResult<Medicine> {
        self.store.write().unwrap().update(name, price)
    }

    pub fn delete(&self, name: &str) -> StoreResult<Medicine> {
        self.store.write().unwrap().delete(name)
    }

    pub fn get(&self, name: &str) -> StoreResult<Medicine> {
        self.store.read().unwrap().get(name)
    }

    pub fn list(&self) -> Vec<Medicine> {
        self.store.read().unwrap().list().to_vec()
    }

    pub fn average_price(&self) -> StoreResult<f64> {
        self.store.read().unwrap().average_price()
    }
}
