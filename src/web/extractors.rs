use actix_web::{FromRequest, HttpRequest};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;

/// Name of the header carrying the caller's cart-session identifier.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Identifies the caller's cart session. Carts are keyed by this id; there is
/// no global shared cart. Clients mint their own UUID and send it with every
/// cart and checkout call.
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Uuid);

impl FromRequest for SessionId {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    if let Some(header) = req.headers().get(SESSION_HEADER) {
      if let Ok(raw) = header.to_str() {
        if let Ok(session) = Uuid::parse_str(raw) {
          return futures_util::future::ready(Ok(SessionId(session)));
        }
      }
    }
    warn!("SessionId extractor: missing or invalid {} header.", SESSION_HEADER);
    futures_util::future::ready(Err(AppError::Validation(format!(
      "A valid {} header (UUID) is required",
      SESSION_HEADER
    ))))
  }
}
