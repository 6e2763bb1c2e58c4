//! Conversions between force, power, and acceleration at a given speed and mass.
//!
//! Multiplying conversions are total.  Dividing conversions refuse a zero divisor with
//! [TractionError::DegenerateInput] instead of producing NaN or infinity; callers
//! solving at stall must work from forces directly.

use super::*;

pub fn force_to_power(force: si::Force, speed: si::Velocity) -> si::Power {
    force * speed
}

pub fn power_to_force(power: si::Power, speed: si::Velocity) -> TractionResult<si::Force> {
    if speed == si::Velocity::ZERO {
        return Err(TractionError::DegenerateInput(format!(
            "cannot convert power = {power:?} to force at zero speed"
        )));
    }
    Ok(power / speed)
}

pub fn force_to_acceleration(force: si::Force, mass: si::Mass) -> TractionResult<si::Acceleration> {
    if mass == si::Mass::ZERO {
        return Err(TractionError::DegenerateInput(format!(
            "cannot convert force = {force:?} to acceleration at zero mass"
        )));
    }
    Ok(force / mass)
}

pub fn acceleration_to_force(acceleration: si::Acceleration, mass: si::Mass) -> si::Force {
    acceleration * mass
}

pub fn power_to_acceleration(
    power: si::Power,
    speed: si::Velocity,
    mass: si::Mass,
) -> TractionResult<si::Acceleration> {
    force_to_acceleration(power_to_force(power, speed)?, mass)
}

pub fn acceleration_to_power(
    acceleration: si::Acceleration,
    speed: si::Velocity,
    mass: si::Mass,
) -> si::Power {
    force_to_power(acceleration_to_force(acceleration, mass), speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_power() {
        let power = force_to_power(2_756.0 * uc::N, 20.0 * uc::MPS);
        assert!(almost_eq_uom(&power, &(55_120.0 * uc::W), None));
        let force = power_to_force(power, 20.0 * uc::MPS).unwrap();
        assert!(almost_eq_uom(&force, &(2_756.0 * uc::N), None));
    }

    #[test]
    fn test_force_acceleration() {
        let mass = 378_000.0 * uc::KG;
        let accel = force_to_acceleration(378.0 * uc::KN, mass).unwrap();
        assert!(almost_eq_uom(&accel, &(1.0 * uc::MPS2), None));
        let force = acceleration_to_force(accel, mass);
        assert!(almost_eq_uom(&force, &(378.0 * uc::KN), None));
    }

    #[test]
    fn test_power_acceleration_round_trip() {
        let mass = 378_000.0 * uc::KG;
        for speed_mps in Vec::linspace(0.5, 50.0, 25) {
            let speed = speed_mps * uc::MPS;
            for pwr in [0.0 * uc::W, 55_120.0 * uc::W, 4.4 * uc::MW, -1.0 * uc::MW] {
                let accel = power_to_acceleration(pwr, speed, mass).unwrap();
                let pwr_back = acceleration_to_power(accel, speed, mass);
                assert!(
                    almost_eq_uom(&pwr_back, &pwr, None),
                    "{}",
                    format_dbg!((pwr, pwr_back, speed))
                );
            }
        }
    }

    #[test]
    fn test_zero_speed_is_degenerate() {
        assert!(matches!(
            power_to_force(1.0 * uc::W, si::Velocity::ZERO),
            Err(TractionError::DegenerateInput(_))
        ));
        assert!(matches!(
            power_to_acceleration(1.0 * uc::W, si::Velocity::ZERO, 1.0 * uc::KG),
            Err(TractionError::DegenerateInput(_))
        ));
        assert!(matches!(
            force_to_acceleration(1.0 * uc::N, si::Mass::ZERO),
            Err(TractionError::DegenerateInput(_))
        ));
        // multiplying conversions stay defined at stall
        assert_eq!(
            acceleration_to_power(1.0 * uc::MPS2, si::Velocity::ZERO, 1.0 * uc::KG),
            si::Power::ZERO
        );
    }
}
