//! Infrastructure layer for AyamFresh
//!
//! Configuration loading, SQLite persistence for shops, and the adapters
//! binding the integration crates to the application ports.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::{LalamoveAdapter, NominatimAdapter};
pub use config::AppConfig;
pub use persistence::{ConnectionPool, DatabaseError, SqliteShopStore, create_pool};
