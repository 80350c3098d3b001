use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, checkout_handlers, product_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Configures every application route. Called from `main` and from the
/// integration tests so both run the same route table.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  // Malformed or ill-typed request bodies must come back in the same
  // `{success, message}` envelope as every other validation failure.
  cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
    AppError::Validation(format!("Invalid request body: {}", err)).into()
  }));
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route(
            "/initialize",
            web::post().to(product_handlers::initialize_products_handler),
          )
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
      )
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::get_cart_handler))
          .route("", web::post().to(cart_handlers::add_to_cart_handler))
          .route("", web::delete().to(cart_handlers::clear_cart_handler))
          .route("/{line_id}", web::put().to(cart_handlers::update_cart_item_handler))
          .route("/{line_id}", web::delete().to(cart_handlers::remove_from_cart_handler)),
      )
      .service(web::scope("/checkout").route("", web::post().to(checkout_handlers::checkout_handler))),
  );
}
