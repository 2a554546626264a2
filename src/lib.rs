//! Hospital SOS - nearest-hospital lookup and emergency alert dispatch
//!
//! This library provides the shared lookup core, alert delivery and HTTP
//! API used by the `server` and `locate` binaries.

pub mod alert;
pub mod api;
pub mod config;
pub mod directory;
pub mod locator;
pub mod models;
pub mod service;

pub use directory::HospitalDirectory;
pub use locator::{haversine_distance, resolve_nearest};
pub use models::{Coordinate, HospitalRecord, ResolutionResult};
