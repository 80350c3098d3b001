use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::CartLine;
use crate::store::{cart::AddOutcome, CartStore, CatalogStore};

/// A session's cart lines together with the display total, recomputed fresh
/// on every listing.
#[derive(Debug)]
pub struct CartView {
  pub lines: Vec<CartLine>,
  pub total: Decimal,
}

/// Σ(price × quantity) over `lines`, rounded to two decimal places.
pub fn cart_total(lines: &[CartLine]) -> Decimal {
  lines
    .iter()
    .map(|l| l.price * Decimal::from(l.quantity))
    .sum::<Decimal>()
    .round_dp(2)
}

#[instrument(skip(carts), fields(session = %session))]
pub fn list_cart(carts: &CartStore, session: Uuid) -> CartView {
  let lines = carts.list(session);
  let total = cart_total(&lines);
  CartView { lines, total }
}

/// Adds a product to the session's cart, merging into an existing line for
/// the same product. No stock check is performed; `stock` is informational.
#[instrument(skip(carts, catalog), fields(session = %session, product_id = %product_id, quantity))]
pub fn add_item(
  carts: &CartStore,
  catalog: &CatalogStore,
  session: Uuid,
  product_id: Uuid,
  quantity: i64,
) -> Result<AddOutcome> {
  let quantity = positive_quantity(quantity)?;

  let product = catalog.get(product_id).ok_or_else(|| {
    warn!("Add to cart rejected: product {} not found.", product_id);
    AppError::NotFound("Product not found".to_string())
  })?;

  let outcome = carts.add_or_merge(session, &product, quantity).ok_or_else(|| {
    warn!("Add to cart rejected: merged quantity would overflow.");
    AppError::Validation("Quantity exceeds the supported maximum".to_string())
  })?;
  match &outcome {
    AddOutcome::Created(line) => info!("Created cart line {} for product {}.", line.id, product_id),
    AddOutcome::Merged(line) => info!(
      "Merged into cart line {}; quantity is now {}.",
      line.id, line.quantity
    ),
  }
  Ok(outcome)
}

/// Sets a line's quantity to an absolute value (not a delta).
#[instrument(skip(carts), fields(session = %session, line_id = %line_id, quantity))]
pub fn update_item(carts: &CartStore, session: Uuid, line_id: Uuid, quantity: i64) -> Result<CartLine> {
  let quantity = positive_quantity(quantity)?;

  carts.set_quantity(session, line_id, quantity).ok_or_else(|| {
    warn!("Update rejected: cart line {} not found.", line_id);
    AppError::NotFound("Cart item not found".to_string())
  })
}

#[instrument(skip(carts), fields(session = %session, line_id = %line_id))]
pub fn remove_item(carts: &CartStore, session: Uuid, line_id: Uuid) -> Result<()> {
  if carts.remove(session, line_id) {
    info!("Removed cart line {}.", line_id);
    Ok(())
  } else {
    warn!("Remove rejected: cart line {} not found.", line_id);
    Err(AppError::NotFound("Cart item not found".to_string()))
  }
}

/// Unconditional clear; succeeds even when the cart was already empty.
#[instrument(skip(carts), fields(session = %session))]
pub fn clear_cart(carts: &CartStore, session: Uuid) {
  carts.clear(session);
  info!("Cart cleared.");
}

fn positive_quantity(quantity: i64) -> Result<u32> {
  if quantity < 1 {
    return Err(AppError::Validation("Valid quantity is required".to_string()));
  }
  u32::try_from(quantity).map_err(|_| AppError::Validation("Valid quantity is required".to_string()))
}
