use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::Receipt;
use crate::services::cart::cart_total;
use crate::services::format_money;
use crate::store::CartStore;

/// Tax is a fixed 10% of the subtotal; single jurisdiction, single currency.
const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

const CONFIRMATION_MESSAGE: &str = "Thank you for your order! Your order has been confirmed.";

/// Processes a mock checkout for the session.
///
/// The authoritative cart is re-read server-side: whatever item snapshot a
/// client may hold is ignored. The session's lines are taken from the store
/// atomically, so of two concurrent checkouts only one can consume the cart;
/// the other sees it empty and is rejected.
///
/// Nothing about the order is persisted. The returned [`Receipt`] is the only
/// record, and it lives only for this request/response cycle.
#[instrument(skip(carts, name, email), fields(session = %session))]
pub fn process_checkout(carts: &CartStore, session: Uuid, name: &str, email: &str) -> Result<Receipt> {
  let name = name.trim();
  let email = email.trim();

  if name.is_empty() || email.is_empty() {
    warn!("Checkout rejected: name and email are required.");
    return Err(AppError::Validation("Name and email are required".to_string()));
  }
  if !is_plausible_email(email) {
    warn!("Checkout rejected: email is invalid.");
    return Err(AppError::Validation("Email is invalid".to_string()));
  }

  // Validation passed; consume the cart. An empty result means there was
  // nothing to check out (or a concurrent checkout got there first).
  let items = carts.take(session);
  if items.is_empty() {
    warn!("Checkout rejected: cart is empty.");
    return Err(AppError::Validation("Cart is empty".to_string()));
  }

  let subtotal = cart_total(&items);
  let tax = (subtotal * TAX_RATE).round_dp(2);
  let total = subtotal + tax;

  let order_number = format!("ORD-{}", Uuid::new_v4());
  info!(
    "Checkout confirmed: order {} with {} line(s), total {}.",
    order_number,
    items.len(),
    total
  );

  Ok(Receipt {
    order_number,
    customer_name: name.to_string(),
    customer_email: email.to_string(),
    items,
    subtotal: format_money(subtotal),
    tax: format_money(tax),
    total: format_money(total),
    timestamp: Utc::now(),
    status: "Confirmed".to_string(),
    message: CONFIRMATION_MESSAGE.to_string(),
  })
}

/// Shape check only (`local@domain.tld`, no whitespace). Deliverability is
/// out of scope for a demo checkout.
fn is_plausible_email(email: &str) -> bool {
  if email.chars().any(char::is_whitespace) {
    return false;
  }
  let mut parts = email.split('@');
  match (parts.next(), parts.next(), parts.next()) {
    (Some(local), Some(domain), None) => {
      !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
    }
    _ => false,
  }
}
