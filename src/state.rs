use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::{CartStore, CatalogStore};

#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<CatalogStore>,
  pub carts: Arc<CartStore>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(config: Arc<AppConfig>) -> Self {
    Self {
      catalog: Arc::new(CatalogStore::new()),
      carts: Arc::new(CartStore::new()),
      config,
    }
  }
}
