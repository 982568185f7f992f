//! Core contracts for vehigen.
//!
//! This crate defines the vehicle record value type, the closed enumerations
//! it is built from, and the fixed reference tables that record generation
//! samples from.

pub mod error;
pub mod record;
pub mod schema;
pub mod tables;
pub mod types;

pub use error::{Error, Result};
pub use record::{HorsePower, TankCapacity, VehicleNumber, VehicleRecord};
pub use schema::vehicles_json_schema;
pub use types::{EmissionStandard, EngineStrokes, PowerSource, StateCode, VehicleType};

/// Number of records produced by one batch.
pub const BATCH_SIZE: usize = 200;

/// Default location of the generated document, relative to the working directory.
pub const OUTPUT_FILE: &str = "vehicles.json";
