use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::catalog;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = catalog::list_products(&app_state.catalog);

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "count": products.len(),
      "data": products,
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  // A malformed identifier cannot resolve to a product, so it is reported
  // the same way as an unknown one.
  let product_id = Uuid::parse_str(&path.into_inner())
    .map_err(|_| AppError::NotFound("Product not found".to_string()))?;

  let product = catalog::get_product(&app_state.catalog, product_id)?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "data": product,
  })))
}

#[instrument(name = "handler::initialize_products", skip(app_state))]
pub async fn initialize_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = catalog::seed_catalog(&app_state.catalog)?;
  info!("Catalog initialized with {} products.", products.len());

  Ok(HttpResponse::Created().json(json!({
      "success": true,
      "message": "Products initialized successfully",
      "count": products.len(),
      "data": products,
  })))
}
