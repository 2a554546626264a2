//! Core data models for the emergency lookup.

pub mod coordinate;
pub mod hospital;

pub use coordinate::{Coordinate, CoordinateError};
pub use hospital::{HospitalRecord, ResolutionResult};
