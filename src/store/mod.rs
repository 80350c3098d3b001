//! In-process document stores.
//!
//! The demo keeps its documents in plain collections behind
//! `parking_lot::RwLock`. Every read-modify-write sequence (cart merge, seed
//! guard, checkout take) runs inside a single write-lock section so that
//! concurrent requests cannot interleave between the read and the write.

pub mod cart;
pub mod catalog;

pub use cart::CartStore;
pub use catalog::CatalogStore;
