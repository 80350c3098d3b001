use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CartLine;

/// The ephemeral summary returned after a successful checkout. It exists only
/// within the request/response cycle; no storage-side record survives.
///
/// Monetary fields are two-decimal strings rather than binary floating-point
/// so the displayed amounts never drift from what was computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
  pub order_number: String,
  pub customer_name: String,
  pub customer_email: String,
  pub items: Vec<CartLine>,
  pub subtotal: String,
  pub tax: String,
  pub total: String,
  pub timestamp: DateTime<Utc>,
  pub status: String,
  pub message: String,
}
