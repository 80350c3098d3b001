use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::Product;

/// The product catalog. Insertion order is preserved for listing.
#[derive(Debug, Default)]
pub struct CatalogStore {
  products: RwLock<Vec<Product>>,
}

impl CatalogStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn list(&self) -> Vec<Product> {
    self.products.read().clone()
  }

  pub fn get(&self, id: Uuid) -> Option<Product> {
    self.products.read().iter().find(|p| p.id == id).cloned()
  }

  pub fn len(&self) -> usize {
    self.products.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.read().is_empty()
  }

  /// Inserts `products` only if the catalog is currently empty. The emptiness
  /// check and the insert happen under one write lock, so two concurrent
  /// seeds cannot both succeed. Returns the inserted records, or `None` if
  /// the catalog was already populated.
  pub fn seed_if_empty(&self, products: Vec<Product>) -> Option<Vec<Product>> {
    let mut guard = self.products.write();
    if !guard.is_empty() {
      return None;
    }
    *guard = products.clone();
    Some(products)
  }
}
