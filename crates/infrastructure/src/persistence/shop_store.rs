//! SQLite shop store implementation
//!
//! Implements the `ShopStore` port using SQLite.

use std::sync::Arc;

use application::{error::ApplicationError, ports::ShopStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    entities::Shop,
    value_objects::{GeoLocation, ShopId},
};
use rusqlite::{OptionalExtension, Row, params};
use tokio::task;
use tracing::instrument;

use super::connection::ConnectionPool;

/// SQLite-based shop store
#[derive(Debug, Clone)]
pub struct SqliteShopStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteShopStore {
    /// Create a new SQLite shop store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

/// Convert a database row to a `Shop`
fn row_to_shop(row: &Row<'_>) -> Result<Shop, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let name: String = row.get(1)?;
    let address: String = row.get(2)?;
    let latitude: Option<f64> = row.get(3)?;
    let longitude: Option<f64> = row.get(4)?;
    let is_active: bool = row.get(5)?;
    let created_at_str: String = row.get(6)?;
    let updated_at_str: String = row.get(7)?;

    let id = ShopId::parse(&id_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let location = match (latitude, longitude) {
        (Some(lat), Some(lng)) => GeoLocation::new(lat, lng).ok(),
        _ => None,
    };

    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

    let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

    Ok(Shop::restore(
        id, name, address, location, is_active, created_at, updated_at,
    ))
}

#[async_trait]
impl ShopStore for SqliteShopStore {
    #[instrument(skip(self), fields(shop_id = %id))]
    async fn get(&self, id: ShopId) -> Result<Option<Shop>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.query_row(
                "SELECT id, name, address, latitude, longitude, is_active, created_at, updated_at
                 FROM shops WHERE id = ?1",
                params![id.to_string()],
                row_to_shop,
            )
            .optional()
            .map_err(|e| ApplicationError::Internal(e.to_string()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> Result<Vec<Shop>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, name, address, latitude, longitude, is_active, created_at, updated_at
                     FROM shops WHERE is_active = 1 ORDER BY name",
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let shops = stmt
                .query_map([], row_to_shop)
                .map_err(|e| ApplicationError::Internal(e.to_string()))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            Ok(shops)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, shop), fields(shop_id = %shop.id()))]
    async fn upsert(&self, shop: &Shop) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let shop = shop.clone();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let (latitude, longitude) = shop
                .location()
                .map_or((None, None), |loc| {
                    (Some(loc.latitude()), Some(loc.longitude()))
                });

            conn.execute(
                "INSERT INTO shops (id, name, address, latitude, longitude, is_active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(id) DO UPDATE SET
                     name = excluded.name,
                     address = excluded.address,
                     latitude = excluded.latitude,
                     longitude = excluded.longitude,
                     is_active = excluded.is_active,
                     updated_at = excluded.updated_at",
                params![
                    shop.id().to_string(),
                    shop.name(),
                    shop.address(),
                    latitude,
                    longitude,
                    shop.is_active(),
                    shop.created_at().to_rfc3339(),
                    shop.updated_at().to_rfc3339(),
                ],
            )
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::persistence::connection::create_pool;

    fn test_store() -> SqliteShopStore {
        let config = DatabaseConfig {
            path: ":memory:".to_string(),
            max_connections: 1,
            run_migrations: true,
        };
        let pool = create_pool(&config).unwrap();
        SqliteShopStore::new(Arc::new(pool))
    }

    fn sample_shop() -> Shop {
        Shop::with_location(
            "Pudu Outlet",
            "Jalan Pasar, Pudu, Kuala Lumpur",
            GeoLocation::new(3.1350, 101.7140).unwrap(),
        )
    }

    #[tokio::test]
    async fn get_unknown_shop_returns_none() {
        let store = test_store();
        let result = store.get(ShopId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn upsert_then_get_roundtrips() {
        let store = test_store();
        let shop = sample_shop();

        store.upsert(&shop).await.unwrap();
        let loaded = store.get(shop.id()).await.unwrap().unwrap();

        assert_eq!(loaded.id(), shop.id());
        assert_eq!(loaded.name(), "Pudu Outlet");
        assert_eq!(loaded.address(), "Jalan Pasar, Pudu, Kuala Lumpur");
        assert_eq!(loaded.location(), shop.location());
        assert!(loaded.is_active());
    }

    #[tokio::test]
    async fn upsert_updates_existing_shop() {
        let store = test_store();
        let mut shop = sample_shop();
        store.upsert(&shop).await.unwrap();

        shop.set_active(false);
        store.upsert(&shop).await.unwrap();

        let loaded = store.get(shop.id()).await.unwrap().unwrap();
        assert!(!loaded.is_active());
    }

    #[tokio::test]
    async fn list_active_excludes_inactive() {
        let store = test_store();

        let active = sample_shop();
        store.upsert(&active).await.unwrap();

        let mut inactive = Shop::new("Closed Outlet", "Jalan Lama");
        inactive.set_active(false);
        store.upsert(&inactive).await.unwrap();

        let shops = store.list_active().await.unwrap();
        assert_eq!(shops.len(), 1);
        assert_eq!(shops[0].id(), active.id());
    }

    #[tokio::test]
    async fn shop_without_coordinates_roundtrips() {
        let store = test_store();
        let shop = Shop::new("New Outlet", "Jalan Baru");
        store.upsert(&shop).await.unwrap();

        let loaded = store.get(shop.id()).await.unwrap().unwrap();
        assert!(loaded.location().is_none());
    }
}
