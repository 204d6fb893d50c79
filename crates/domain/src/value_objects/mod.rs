//! Value objects for the AyamFresh domain

mod delivery_fee;
mod geo_location;
mod shop_id;

pub use delivery_fee::DeliveryFee;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use shop_id::ShopId;
