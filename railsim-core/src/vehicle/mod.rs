//! Module containing the rail vehicle model and its traction and braking solvers

pub(crate) use crate::imports::*;

// configuration
pub mod modes;
pub mod params;

// physics
pub mod acceleration;
pub mod conversion;
pub mod deceleration;
pub mod envelope;
pub mod regen;
pub mod resistance;

// vehicle model
pub mod vehicle_model;


pub use acceleration::{AccelLimit, TractionSolution};
pub use conversion::*;
pub use deceleration::{BrakingSolution, DecelLimit};
pub use envelope::EnvelopePoint;
pub(crate) use modes::friction_available;
pub use modes::{BrakeMode, OperatingMode};
pub use params::VehicleParams;
pub use vehicle_model::Vehicle;
