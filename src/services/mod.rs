//! Business operations over the stores. Handlers stay thin; validation and
//! store mutation live here.

pub mod cart;
pub mod catalog;
pub mod checkout;

use rust_decimal::Decimal;

/// Formats a monetary amount as a two-decimal string ("35.00", not "35").
pub fn format_money(amount: Decimal) -> String {
  let mut amount = amount.round_dp(2);
  amount.rescale(2);
  amount.to_string()
}
