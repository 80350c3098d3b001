use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::{CartLine, Product};

/// Cart lines keyed by session id. Each session sees only its own cart.
///
/// Invariant: within a session there is at most one line per distinct
/// product id. [`CartStore::add_or_merge`] enforces this by incrementing the
/// existing line instead of inserting a duplicate.
#[derive(Debug, Default)]
pub struct CartStore {
  carts: RwLock<HashMap<Uuid, Vec<CartLine>>>,
}

/// Outcome of [`CartStore::add_or_merge`], so callers can distinguish a
/// freshly created line from a merged one.
#[derive(Debug, Clone)]
pub enum AddOutcome {
  Created(CartLine),
  Merged(CartLine),
}

impl AddOutcome {
  pub fn line(&self) -> &CartLine {
    match self {
      AddOutcome::Created(line) | AddOutcome::Merged(line) => line,
    }
  }
}

impl CartStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn list(&self, session: Uuid) -> Vec<CartLine> {
    self.carts.read().get(&session).cloned().unwrap_or_default()
  }

  /// Adds `quantity` of `product` to the session's cart. If a line for the
  /// same product already exists its quantity is incremented; otherwise a new
  /// line is created with a snapshot of the product. The lookup and the
  /// mutation happen under one write lock.
  ///
  /// Returns `None` when merging would overflow the quantity; the existing
  /// line is left unchanged in that case.
  pub fn add_or_merge(&self, session: Uuid, product: &Product, quantity: u32) -> Option<AddOutcome> {
    let mut guard = self.carts.write();
    let lines = guard.entry(session).or_default();

    if let Some(existing) = lines.iter_mut().find(|l| l.product_id == product.id) {
      existing.quantity = existing.quantity.checked_add(quantity)?;
      return Some(AddOutcome::Merged(existing.clone()));
    }

    let line = CartLine::from_product(product, quantity);
    lines.push(line.clone());
    Some(AddOutcome::Created(line))
  }

  /// Sets a line's quantity to an absolute value. Returns the updated line,
  /// or `None` if no such line exists in the session's cart.
  pub fn set_quantity(&self, session: Uuid, line_id: Uuid, quantity: u32) -> Option<CartLine> {
    let mut guard = self.carts.write();
    let lines = guard.get_mut(&session)?;
    let line = lines.iter_mut().find(|l| l.id == line_id)?;
    line.quantity = quantity;
    Some(line.clone())
  }

  /// Removes a line. Returns `false` if the line did not exist.
  pub fn remove(&self, session: Uuid, line_id: Uuid) -> bool {
    let mut guard = self.carts.write();
    let Some(lines) = guard.get_mut(&session) else {
      return false;
    };
    let before = lines.len();
    lines.retain(|l| l.id != line_id);
    lines.len() != before
  }

  /// Deletes every line in the session's cart. A no-op on an already-empty
  /// cart.
  pub fn clear(&self, session: Uuid) {
    self.carts.write().remove(&session);
  }

  /// Atomically removes and returns the session's lines. Used by checkout so
  /// that two concurrent checkouts cannot both consume the same cart: the
  /// second caller receives an empty list.
  pub fn take(&self, session: Uuid) -> Vec<CartLine> {
    self.carts.write().remove(&session).unwrap_or_default()
  }
}
