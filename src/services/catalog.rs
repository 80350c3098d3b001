use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::Product;
use crate::store::CatalogStore;

#[instrument(skip(catalog))]
pub fn list_products(catalog: &CatalogStore) -> Vec<Product> {
  let products = catalog.list();
  info!("Fetched {} products from the catalog.", products.len());
  products
}

#[instrument(skip(catalog), fields(product_id = %id))]
pub fn get_product(catalog: &CatalogStore, id: Uuid) -> Result<Product> {
  catalog.get(id).ok_or_else(|| {
    warn!("Product {} not found.", id);
    AppError::NotFound(format!("Product with ID {} not found", id))
  })
}

/// One-time catalog seed. Refuses to run if any product already exists; the
/// second call is rejected, never duplicated.
#[instrument(skip(catalog))]
pub fn seed_catalog(catalog: &CatalogStore) -> Result<Vec<Product>> {
  match catalog.seed_if_empty(seed_products()) {
    Some(products) => {
      info!("Catalog seeded with {} products.", products.len());
      Ok(products)
    }
    None => {
      warn!("Catalog seed rejected: products already initialized.");
      Err(AppError::Conflict("Products already initialized".to_string()))
    }
  }
}

/// The fixed demo catalog: ten products across four categories.
fn seed_products() -> Vec<Product> {
  let price = |cents: i64| Decimal::new(cents, 2);
  vec![
    Product::new(
      "Wireless Headphones",
      price(7999),
      "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
      "Premium wireless headphones with noise cancellation",
      "Electronics",
      50,
    ),
    Product::new(
      "Smart Watch",
      price(19999),
      "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
      "Feature-rich smartwatch with fitness tracking",
      "Electronics",
      30,
    ),
    Product::new(
      "Running Shoes",
      price(8999),
      "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500",
      "Comfortable running shoes for daily training",
      "Sports",
      75,
    ),
    Product::new(
      "Leather Backpack",
      price(12999),
      "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500",
      "Stylish leather backpack for work and travel",
      "Accessories",
      40,
    ),
    Product::new(
      "Smartphone",
      price(69999),
      "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=500",
      "Latest smartphone with advanced features",
      "Electronics",
      25,
    ),
    Product::new(
      "Sunglasses",
      price(14999),
      "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=500",
      "Designer sunglasses with UV protection",
      "Accessories",
      60,
    ),
    Product::new(
      "Coffee Maker",
      price(8999),
      "https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6?w=500",
      "Automatic coffee maker for perfect brews",
      "Home",
      35,
    ),
    Product::new(
      "Yoga Mat",
      price(3999),
      "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=500",
      "Non-slip yoga mat for all fitness levels",
      "Sports",
      100,
    ),
    Product::new(
      "Desk Lamp",
      price(4999),
      "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?w=500",
      "LED desk lamp with adjustable brightness",
      "Home",
      45,
    ),
    Product::new(
      "Bluetooth Speaker",
      price(5999),
      "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=500",
      "Portable Bluetooth speaker with great sound",
      "Electronics",
      55,
    ),
  ]
}
