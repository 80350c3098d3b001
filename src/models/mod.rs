//! Data structures representing store documents and API payloads.

pub mod cart_line;
pub mod product;
pub mod receipt;

pub use cart_line::CartLine;
pub use product::Product;
pub use receipt::Receipt;
