//! Shop store port
//!
//! Defines the interface for reading and writing pickup outlets. The
//! storefront admin manages shops; the quote flow only reads them.

use async_trait::async_trait;
use domain::entities::Shop;
use domain::value_objects::ShopId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for shop persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ShopStore: Send + Sync {
    /// Fetch a shop by ID
    async fn get(&self, id: ShopId) -> Result<Option<Shop>, ApplicationError>;

    /// List shops currently accepting orders
    async fn list_active(&self) -> Result<Vec<Shop>, ApplicationError>;

    /// Insert or update a shop
    async fn upsert(&self, shop: &Shop) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ShopStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ShopStore>();
    }
}
