use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Product;

/// One entry in a session's cart.
///
/// `name`, `price`, and `image` are a denormalized snapshot copied from the
/// [`Product`] at the moment the line is created. They are intentionally not
/// refreshed from the catalog afterwards: the price a customer saw when they
/// added the item is the price the cart keeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  /// Identity of the line itself, distinct from the product it references.
  pub id: Uuid,
  pub product_id: Uuid,
  pub name: String,
  pub price: Decimal,
  pub image: String,
  pub quantity: u32,
  pub added_at: DateTime<Utc>,
}

impl CartLine {
  /// Builds a new line holding a snapshot of `product` at this instant.
  pub fn from_product(product: &Product, quantity: u32) -> Self {
    Self {
      id: Uuid::new_v4(),
      product_id: product.id,
      name: product.name.clone(),
      price: product.price,
      image: product.image.clone(),
      quantity,
      added_at: Utc::now(),
    }
  }
}
