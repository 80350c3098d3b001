//! End-to-end API tests: every route table entry exercised against a fresh
//! in-process application.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use uuid::Uuid;

use storefront::config::AppConfig;
use storefront::models::Product;
use storefront::services::catalog;
use storefront::state::AppState;
use storefront::web::configure_app_routes;
use storefront::web::extractors::SESSION_HEADER;

fn fresh_state() -> AppState {
  AppState::new(Arc::new(AppConfig::default()))
}

/// Seeds the catalog directly through the service and returns the products.
fn seed(state: &AppState) -> Vec<Product> {
  catalog::seed_catalog(&state.catalog).unwrap()
}

fn product_named<'a>(products: &'a [Product], name: &str) -> &'a Product {
  products.iter().find(|p| p.name == name).unwrap()
}

macro_rules! test_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state.clone()))
        .configure(configure_app_routes),
    )
    .await
  };
}

fn with_session(req: test::TestRequest, session: Uuid) -> test::TestRequest {
  req.insert_header((SESSION_HEADER, session.to_string()))
}

#[actix_web::test]
async fn health_endpoint_responds_ok() {
  let app = test_app!(fresh_state());
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn seed_endpoint_inserts_ten_products_and_rejects_a_second_call() {
  let state = fresh_state();
  let app = test_app!(state);

  let resp = test::call_service(
    &app,
    test::TestRequest::post().uri("/api/products/initialize").to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(true));
  assert_eq!(body["count"], json!(10));

  let resp = test::call_service(
    &app,
    test::TestRequest::post().uri("/api/products/initialize").to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(false));

  // Still exactly ten products, not twenty.
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products").to_request()).await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["count"], json!(10));
}

#[actix_web::test]
async fn get_product_resolves_known_ids_and_404s_everything_else() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);

  let known = &products[0];
  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri(&format!("/api/products/{}", known.id)).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["data"]["name"], json!(known.name));

  let resp = test::call_service(
    &app,
    test::TestRequest::get()
      .uri(&format!("/api/products/{}", Uuid::new_v4()))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  // A malformed identifier is also "not found", not a parse error.
  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/products/not-a-uuid").to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn adding_the_same_product_twice_merges_into_one_line() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();
  let product_id = products[0].id;

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": product_id, "quantity": 2 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": product_id, "quantity": 3 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], json!("Cart updated"));
  assert_eq!(body["data"]["quantity"], json!(5));

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::get().uri("/api/cart"), session).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["count"], json!(1));
  assert_eq!(body["data"][0]["quantity"], json!(5));
}

#[actix_web::test]
async fn cart_total_is_recomputed_on_every_listing() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();

  // 79.99 x 2 + 39.99 x 1 = 199.97
  let headphones = product_named(&products, "Wireless Headphones");
  let mat = product_named(&products, "Yoga Mat");
  for (id, qty) in [(headphones.id, 2), (mat.id, 1)] {
    test::call_service(
      &app,
      with_session(test::TestRequest::post().uri("/api/cart"), session)
        .set_json(json!({ "productId": id, "quantity": qty }))
        .to_request(),
    )
    .await;
  }

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::get().uri("/api/cart"), session).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["total"], json!("199.97"));

  // Drop the headphones to one unit; the total follows immediately.
  let line_id = body["data"][0]["id"].as_str().unwrap().to_string();
  let quantity = body["data"][0]["quantity"].as_u64().unwrap();
  let new_quantity = if quantity == 2 { 1 } else { quantity };
  test::call_service(
    &app,
    with_session(test::TestRequest::put().uri(&format!("/api/cart/{}", line_id)), session)
      .set_json(json!({ "quantity": new_quantity }))
      .to_request(),
  )
  .await;

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::get().uri("/api/cart"), session).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["total"], json!("119.98"));
}

#[actix_web::test]
async fn update_with_quantity_below_one_is_rejected_and_line_is_unchanged() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": products[0].id, "quantity": 4 }))
      .to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  let line_id = body["data"]["id"].as_str().unwrap().to_string();

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::put().uri(&format!("/api/cart/{}", line_id)), session)
      .set_json(json!({ "quantity": 0 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::get().uri("/api/cart"), session).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["data"][0]["quantity"], json!(4));
}

#[actix_web::test]
async fn merging_past_the_quantity_limit_is_rejected_without_wrapping() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();
  let product_id = products[0].id;

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": product_id, "quantity": 4_000_000_000u32 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": product_id, "quantity": 4_000_000_000u32 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(false));

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::get().uri("/api/cart"), session).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["count"], json!(1));
  assert_eq!(body["data"][0]["quantity"], json!(4_000_000_000u32));
}

#[actix_web::test]
async fn malformed_request_bodies_get_the_error_envelope() {
  let state = fresh_state();
  seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();

  // Ill-typed fields: a non-UUID product id and a fractional quantity.
  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": "not-even-valid", "quantity": 1.5 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(false));
  assert!(body["message"].as_str().unwrap().contains("Invalid request body"));

  // A body that is not JSON at all gets the same treatment.
  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/checkout"), session)
      .insert_header(("content-type", "application/json"))
      .set_payload("not json")
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(false));
}

#[actix_web::test]
async fn adding_an_unknown_product_is_404_and_creates_no_line() {
  let state = fresh_state();
  seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": Uuid::new_v4(), "quantity": 1 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::get().uri("/api/cart"), session).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["count"], json!(0));
}

#[actix_web::test]
async fn cart_requests_without_a_session_header_are_rejected() {
  let app = test_app!(fresh_state());

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/cart").to_request()).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let resp = test::call_service(
    &app,
    test::TestRequest::get()
      .uri("/api/cart")
      .insert_header((SESSION_HEADER, "not-a-uuid"))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn remove_then_clear_covers_present_and_absent_lines() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": products[0].id, "quantity": 1 }))
      .to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  let line_id = body["data"]["id"].as_str().unwrap().to_string();

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::delete().uri(&format!("/api/cart/{}", line_id)), session).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);

  // Removing it again is a not-found, not a silent success.
  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::delete().uri(&format!("/api/cart/{}", line_id)), session).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  // Clearing an already-empty cart still succeeds.
  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::delete().uri("/api/cart"), session).to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn checkout_returns_a_receipt_and_empties_the_cart() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();

  // 79.99 x 2 = 159.98; tax 16.00; total 175.98
  let headphones = product_named(&products, "Wireless Headphones");
  test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": headphones.id, "quantity": 2 }))
      .to_request(),
  )
  .await;

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/checkout"), session)
      .set_json(json!({ "name": "Ada Lovelace", "email": "ada@example.com" }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(true));

  let receipt = &body["data"];
  assert!(receipt["orderNumber"].as_str().unwrap().starts_with("ORD-"));
  assert_eq!(receipt["subtotal"], json!("159.98"));
  assert_eq!(receipt["tax"], json!("16.00"));
  assert_eq!(receipt["total"], json!("175.98"));
  assert_eq!(receipt["status"], json!("Confirmed"));
  assert_eq!(receipt["items"].as_array().unwrap().len(), 1);

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::get().uri("/api/cart"), session).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["count"], json!(0));
}

#[actix_web::test]
async fn checkout_validation_rejects_bad_input_without_consuming_the_cart() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();

  // Empty cart with valid customer details.
  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/checkout"), session)
      .set_json(json!({ "name": "Ada", "email": "ada@example.com" }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": products[0].id, "quantity": 1 }))
      .to_request(),
  )
  .await;

  // Blank name and malformed email are each rejected despite the full cart.
  for payload in [
    json!({ "name": "   ", "email": "ada@example.com" }),
    json!({ "name": "Ada", "email": "not-an-email" }),
    json!({ "email": "ada@example.com" }),
  ] {
    let resp = test::call_service(
      &app,
      with_session(test::TestRequest::post().uri("/api/checkout"), session)
        .set_json(payload)
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // Nothing was consumed by the rejected attempts.
  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::get().uri("/api/cart"), session).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["count"], json!(1));
}

#[actix_web::test]
async fn checkout_uses_the_server_side_cart_not_a_client_snapshot() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);
  let session = Uuid::new_v4();

  let mat = product_named(&products, "Yoga Mat"); // 39.99
  test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), session)
      .set_json(json!({ "productId": mat.id, "quantity": 1 }))
      .to_request(),
  )
  .await;

  // The submitted snapshot claims wildly different contents; it is ignored.
  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/checkout"), session)
      .set_json(json!({
        "name": "Ada",
        "email": "ada@example.com",
        "cartItems": [{ "price": "0.01", "quantity": 1 }]
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["data"]["subtotal"], json!("39.99"));
  assert_eq!(body["data"]["tax"], json!("4.00"));
  assert_eq!(body["data"]["total"], json!("43.99"));
}

#[actix_web::test]
async fn sessions_are_isolated_from_each_other() {
  let state = fresh_state();
  let products = seed(&state);
  let app = test_app!(state);
  let alice = Uuid::new_v4();
  let bob = Uuid::new_v4();

  test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), alice)
      .set_json(json!({ "productId": products[0].id, "quantity": 1 }))
      .to_request(),
  )
  .await;
  test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/cart"), bob)
      .set_json(json!({ "productId": products[1].id, "quantity": 2 }))
      .to_request(),
  )
  .await;

  // Alice checks out; Bob's cart must be untouched.
  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::post().uri("/api/checkout"), alice)
      .set_json(json!({ "name": "Alice", "email": "alice@example.com" }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);

  let resp = test::call_service(
    &app,
    with_session(test::TestRequest::get().uri("/api/cart"), bob).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["count"], json!(1));
  assert_eq!(body["data"][0]["quantity"], json!(2));
}
