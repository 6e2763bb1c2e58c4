#![allow(clippy::field_reassign_with_default)]
// TODO: uncomment when docs are somewhat mature to check for missing docs
// #![warn(missing_docs)]

//! Crate containing the longitudinal dynamics core of a rail vehicle: the maximum
//! achievable acceleration and deceleration at a given speed under engine power,
//! adhesion, and braking-system constraints, along with the resulting traction,
//! regenerative, and friction power flows.
//! # Features:
//! - yaml: enable (de)serialization of vehicle parameters to/from YAML
//! - json: enable (de)serialization of vehicle parameters to/from JSON

#[macro_use]
pub mod macros;

#[cfg(test)]
pub mod testing;

pub mod combo_error;
pub mod error;
pub mod imports;
pub mod prelude;
pub mod si;
pub mod traits;
pub mod uc;
pub mod utils;
pub mod validate;
pub mod vehicle;

