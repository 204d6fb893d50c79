//! Shop identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique shop identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShopId(Uuid);

impl ShopId {
    /// Create a new random shop ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a shop ID from an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a shop ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ShopId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ShopId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_shop_id_is_unique() {
        let id1 = ShopId::new();
        let id2 = ShopId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn shop_id_can_be_parsed() {
        let original = ShopId::new();
        let parsed = ShopId::parse(&original.to_string()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn invalid_shop_id_fails_to_parse() {
        assert!(ShopId::parse("not-a-uuid").is_err());
    }
}
