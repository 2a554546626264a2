//! Hospital records and lookup results.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A facility that can receive an emergency alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub name: String,
    pub address: String,
    /// Contact number, E.164 where the source provides it
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl HospitalRecord {
    pub fn new(
        name: &str,
        address: &str,
        phone: &str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            latitude,
            longitude,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Outcome of a nearest-hospital lookup.
///
/// `hospital` is `None` only when nothing could be selected (empty
/// directory), in which case `distance_meters` is `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionResult<'a> {
    pub hospital: Option<&'a HospitalRecord>,
    pub distance_meters: f64,
}

impl<'a> ResolutionResult<'a> {
    pub fn none() -> Self {
        Self {
            hospital: None,
            distance_meters: f64::INFINITY,
        }
    }

    pub fn is_none(&self) -> bool {
        self.hospital.is_none()
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }
}
