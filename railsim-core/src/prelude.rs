//! Convenience module for exposing commonly used structs

pub use crate::error::{TractionError, TractionResult};
pub use crate::traits::{Init, Linspace, SerdeAPI};
pub use crate::vehicle::{
    AccelLimit, BrakeMode, BrakingSolution, DecelLimit, EnvelopePoint, OperatingMode,
    TractionSolution, Vehicle, VehicleParams,
};
pub use uom::ConstZero;
