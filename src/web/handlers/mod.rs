pub mod cart_handlers;
pub mod checkout_handlers;
pub mod product_handlers;
