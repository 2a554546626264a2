//! Hospital directory: the read-only set of facilities searched by the
//! nearest-hospital lookup.
//!
//! A directory is built once at startup (built-in table or a TOML list)
//! and handed to whoever needs it, usually behind an `Arc`.

mod builtin;

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

use crate::locator::resolve_nearest;
use crate::models::{Coordinate, CoordinateError, HospitalRecord, ResolutionResult};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("hospital #{index} has an empty name")]
    MissingName { index: usize },

    #[error("hospital '{name}' has no phone number")]
    MissingPhone { name: String },

    #[error("hospital '{name}' has an invalid coordinate: {source}")]
    InvalidCoordinate {
        name: String,
        #[source]
        source: CoordinateError,
    },
}

/// Immutable list of hospitals
#[derive(Debug, Clone, Default)]
pub struct HospitalDirectory {
    hospitals: Vec<HospitalRecord>,
}

impl HospitalDirectory {
    /// Build a directory, rejecting records that cannot be routed to.
    ///
    /// Phone numbers that are not E.164 are kept but logged; the SMS
    /// provider has the final word on what it will deliver to.
    pub fn new(hospitals: Vec<HospitalRecord>) -> Result<Self, DirectoryError> {
        for (index, hospital) in hospitals.iter().enumerate() {
            if hospital.name.trim().is_empty() {
                return Err(DirectoryError::MissingName { index });
            }
            if hospital.phone.trim().is_empty() {
                return Err(DirectoryError::MissingPhone {
                    name: hospital.name.clone(),
                });
            }
            hospital
                .coordinate()
                .validate()
                .map_err(|source| DirectoryError::InvalidCoordinate {
                    name: hospital.name.clone(),
                    source,
                })?;
            if !is_e164(&hospital.phone) {
                warn!(
                    "Hospital '{}' phone '{}' is not in E.164 format",
                    hospital.name, hospital.phone
                );
            }
        }

        info!("Hospital directory loaded with {} entries", hospitals.len());
        Ok(Self { hospitals })
    }

    /// The built-in Delhi table
    pub fn builtin() -> Self {
        Self {
            hospitals: builtin::delhi_hospitals(),
        }
    }

    pub fn hospitals(&self) -> &[HospitalRecord] {
        &self.hospitals
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    /// Nearest hospital to `query`; see [`resolve_nearest`]
    pub fn nearest(&self, query: Coordinate) -> ResolutionResult<'_> {
        resolve_nearest(query, &self.hospitals)
    }
}

/// `+` followed by up to 15 digits, no leading zero
pub fn is_e164(phone: &str) -> bool {
    static E164: OnceLock<Regex> = OnceLock::new();
    E164.get_or_init(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("valid E.164 pattern"))
        .is_match(phone)
}
