//! Persistence module
//!
//! SQLite-based storage for pickup shops.

pub mod connection;
pub mod migrations;
pub mod shop_store;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use shop_store::SqliteShopStore;
