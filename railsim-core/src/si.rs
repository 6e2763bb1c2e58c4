//! Import uom si system
//! Zero values should be created using standard uom syntax ($Quantity::ZERO) after adding "use crate::imports::*"
//! Non-zero values should be created using standard uom syntax ($Quantity::new::<$unit>($value)) or multiplication syntax ($value * $UNIT_CONSTANT)

use uom::si;

pub use si::acceleration::meter_per_second_squared;
pub use si::f64::{Acceleration, Area, Force, Length, Mass, MassDensity, Power, Ratio, Velocity};
pub use si::ratio::ratio;
pub use si::velocity::meter_per_second;
