use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable catalog record. Created only by the one-time seed; never
/// updated or deleted by any exposed operation. `stock` is informational and
/// is never decremented.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub price: Decimal,
  pub image: String,
  pub description: String,
  pub category: String,
  pub stock: u32,
  pub created_at: DateTime<Utc>,
}

impl Product {
  pub fn new(
    name: &str,
    price: Decimal,
    image: &str,
    description: &str,
    category: &str,
    stock: u32,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      name: name.to_string(),
      price,
      image: image.to_string(),
      description: description.to_string(),
      category: category.to_string(),
      stock,
      created_at: Utc::now(),
    }
  }
}
