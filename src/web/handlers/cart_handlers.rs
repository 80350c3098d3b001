use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::cart;
use crate::services::format_money;
use crate::state::AppState;
use crate::store::cart::AddOutcome;
use crate::web::extractors::SessionId;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartPayload {
  pub product_id: Option<Uuid>,
  pub quantity: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartPayload {
  pub quantity: Option<i64>,
}

#[instrument(name = "handler::get_cart", skip(app_state, session), fields(session = %session.0))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
) -> Result<HttpResponse, AppError> {
  let view = cart::list_cart(&app_state.carts, session.0);

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "count": view.lines.len(),
      "data": view.lines,
      "total": format_money(view.total),
  })))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, payload, session),
    fields(session = %session.0)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddToCartPayload>,
  session: SessionId,
) -> Result<HttpResponse, AppError> {
  let (Some(product_id), Some(quantity)) = (payload.product_id, payload.quantity) else {
    return Err(AppError::Validation(
      "Product ID and quantity are required".to_string(),
    ));
  };

  let outcome = cart::add_item(&app_state.carts, &app_state.catalog, session.0, product_id, quantity)?;

  Ok(match outcome {
    AddOutcome::Created(line) => HttpResponse::Created().json(json!({
        "success": true,
        "message": "Item added to cart",
        "data": line,
    })),
    AddOutcome::Merged(line) => HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Cart updated",
        "data": line,
    })),
  })
}

#[instrument(
    name = "handler::update_cart_item",
    skip(app_state, path, payload, session),
    fields(session = %session.0, line_id = %path.as_ref())
)]
pub async fn update_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<UpdateCartPayload>,
  session: SessionId,
) -> Result<HttpResponse, AppError> {
  let line_id = Uuid::parse_str(&path.into_inner())
    .map_err(|_| AppError::NotFound("Cart item not found".to_string()))?;
  let quantity = payload
    .quantity
    .ok_or_else(|| AppError::Validation("Valid quantity is required".to_string()))?;

  let line = cart::update_item(&app_state.carts, session.0, line_id, quantity)?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Cart item updated",
      "data": line,
  })))
}

#[instrument(
    name = "handler::remove_from_cart",
    skip(app_state, path, session),
    fields(session = %session.0, line_id = %path.as_ref())
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  session: SessionId,
) -> Result<HttpResponse, AppError> {
  let line_id = Uuid::parse_str(&path.into_inner())
    .map_err(|_| AppError::NotFound("Cart item not found".to_string()))?;

  cart::remove_item(&app_state.carts, session.0, line_id)?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Item removed from cart",
  })))
}

#[instrument(name = "handler::clear_cart", skip(app_state, session), fields(session = %session.0))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
) -> Result<HttpResponse, AppError> {
  cart::clear_cart(&app_state.carts, session.0);

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Cart cleared successfully",
  })))
}
