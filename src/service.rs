//! Emergency alert service: resolve the nearest hospital and notify it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::alert::{AlertDispatcher, AlertMessage, DispatchError};
use crate::directory::HospitalDirectory;
use crate::models::{Coordinate, CoordinateError, HospitalRecord};

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("invalid location: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("no hospital available to notify")]
    NoHospital,

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl AlertError {
    pub fn user_message(&self) -> String {
        match self {
            AlertError::InvalidCoordinate(e) => format!("Invalid location: {}", e),
            AlertError::NoHospital => "No hospital is available to receive the alert".to_string(),
            AlertError::Dispatch(e) => e.user_message(),
        }
    }
}

/// Nearest hospital for a location, owned so it can outlive the lookup
#[derive(Debug, Clone, Serialize)]
pub struct NearestHospital {
    pub hospital: HospitalRecord,
    pub distance_m: f64,
}

impl NearestHospital {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }
}

/// Result of a delivered alert
#[derive(Debug, Clone, Serialize)]
pub struct AlertOutcome {
    pub hospital: HospitalRecord,
    pub distance_m: f64,
    pub message_sid: String,
    pub sent_at: DateTime<Utc>,
}

/// Ties the directory to a dispatcher
pub struct EmergencyService {
    directory: Arc<HospitalDirectory>,
    dispatcher: Arc<dyn AlertDispatcher>,
}

impl EmergencyService {
    pub fn new(directory: Arc<HospitalDirectory>, dispatcher: Arc<dyn AlertDispatcher>) -> Self {
        Self {
            directory,
            dispatcher,
        }
    }

    pub fn directory(&self) -> &HospitalDirectory {
        &self.directory
    }

    /// Validated nearest-hospital lookup. `Ok(None)` means the directory
    /// had nothing to offer.
    pub fn nearest(&self, location: Coordinate) -> Result<Option<NearestHospital>, CoordinateError> {
        location.validate()?;
        let result = self.directory.nearest(location);
        Ok(result.hospital.map(|hospital| NearestHospital {
            hospital: hospital.clone(),
            distance_m: result.distance_meters,
        }))
    }

    /// Send an SOS for `location` to the closest hospital
    pub async fn send_alert(
        &self,
        location: Coordinate,
        note: Option<&str>,
    ) -> Result<AlertOutcome, AlertError> {
        let nearest = self.nearest(location)?.ok_or_else(|| {
            warn!("SOS at ({}) but the hospital directory is empty", location);
            AlertError::NoHospital
        })?;

        info!(
            "SOS at ({}): routing to {} ({:.2} km)",
            location,
            nearest.hospital.name,
            nearest.distance_km()
        );

        let message = AlertMessage::new(location, note);
        let receipt = self
            .dispatcher
            .dispatch(&nearest.hospital.phone, &message.body())
            .await?;

        Ok(AlertOutcome {
            hospital: nearest.hospital,
            distance_m: nearest.distance_m,
            message_sid: receipt.sid,
            sent_at: Utc::now(),
        })
    }
}
