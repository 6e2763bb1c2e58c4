//! Module providing unit constants (e.g. 1 kg) for an assortment of
//! dimensional quantities.

use super::si::*;

use uom::lib::marker::PhantomData;
use uom::si::Quantity;

/// Invoking `unit_const!(R, Ratio, 1.0);` yields:
/// ```ignore
/// pub const R: Ratio = Quantity {
///    dimension: PhantomData,
///    units: PhantomData,
///    value: 1.0,
/// }
/// ```
macro_rules! unit_const {
    ($(#[$docs:meta])* $name:ident, $T:ty, $value:expr) => {
        $(#[$docs])*
        /// defines uom unit const
        pub const $name: $T = Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value: $value,
        };
    };
}

unit_const!(R, Ratio, 1.0);

unit_const!(KG, Mass, 1.0);

unit_const!(M, Length, 1.0);
unit_const!(M2, Area, 1.0);

unit_const!(N, Force, 1.0);
unit_const!(KN, Force, 1.0E3);

unit_const!(W, Power, 1.0);
unit_const!(KW, Power, 1.0E3);
unit_const!(MW, Power, 1.0E6);

unit_const!(KGPM3, MassDensity, 1.0);

unit_const!(MPS, Velocity, 1.0);
unit_const!(MPS2, Acceleration, 1.0);

unit_const!(
    /// Standard acceleration due to gravity
    ACC_GRAV,
    Acceleration,
    9.806_65
);

