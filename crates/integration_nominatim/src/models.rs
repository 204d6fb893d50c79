//! Public types returned by the Nominatim client

use domain::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};

/// A single address suggestion for type-ahead entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressCandidate {
    /// Display address as returned by the provider
    pub address: String,
    /// Resolved coordinates
    pub location: GeoLocation,
}
