//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// # Safety
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a location from string-encoded decimal coordinates
    ///
    /// Geocoding providers and the logistics API exchange coordinates as
    /// decimal strings; this validates both the number format and the range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if either component is not a valid
    /// number or is out of range.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, InvalidCoordinates> {
        let lat: f64 = latitude.trim().parse().map_err(|_| InvalidCoordinates)?;
        let lng: f64 = longitude.trim().parse().map_err(|_| InvalidCoordinates)?;
        Self::new(lat, lng)
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude as the string-encoded decimal the wire formats expect
    #[must_use]
    pub fn latitude_string(&self) -> String {
        format!("{}", self.latitude)
    }

    /// Longitude as the string-encoded decimal the wire formats expect
    #[must_use]
    pub fn longitude_string(&self) -> String {
        format!("{}", self.longitude)
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(3.1578, 101.7118).expect("valid coordinates");
        assert!((loc.latitude() - 3.1578).abs() < f64::EPSILON);
        assert!((loc.longitude() - 101.7118).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_parse_from_strings() {
        let loc = GeoLocation::parse("3.1578", "101.7118").expect("valid");
        assert!((loc.latitude() - 3.1578).abs() < f64::EPSILON);
        assert!((loc.longitude() - 101.7118).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let loc = GeoLocation::parse(" 3.1578 ", " 101.7118").expect("valid");
        assert!((loc.latitude() - 3.1578).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(GeoLocation::parse("north", "101.7").is_err());
        assert!(GeoLocation::parse("3.15", "").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(GeoLocation::parse("95.0", "101.7").is_err());
    }

    #[test]
    fn test_string_roundtrip() {
        let loc = GeoLocation::new(3.1578, 101.7118).expect("valid");
        assert_eq!(loc.latitude_string(), "3.1578");
        assert_eq!(loc.longitude_string(), "101.7118");
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(3.1578, 101.7118).expect("valid");
        let display = format!("{loc}");
        assert!(display.contains("3.1578"));
        assert!(display.contains("101.7118"));
    }

    #[test]
    fn test_serialization() {
        let loc = GeoLocation::new(3.1578, 101.7118).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("3.1578"));
        assert!(json.contains("101.7118"));

        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }
}
