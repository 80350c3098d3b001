use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::checkout;
use crate::state::AppState;
use crate::web::extractors::SessionId;

/// Checkout request body. The server re-reads the authoritative cart for the
/// session; any `cartItems` snapshot a client sends along is ignored.
#[derive(Deserialize, Debug)]
pub struct CheckoutPayload {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub email: String,
}

#[instrument(
    name = "handler::checkout",
    skip(app_state, payload, session),
    fields(session = %session.0)
)]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CheckoutPayload>,
  session: SessionId,
) -> Result<HttpResponse, AppError> {
  let receipt = checkout::process_checkout(&app_state.carts, session.0, &payload.name, &payload.email)?;
  info!("Checkout successful: order {}.", receipt.order_number);

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Checkout successful",
      "data": receipt,
  })))
}
