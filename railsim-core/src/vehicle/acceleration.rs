use super::*;

/// Constraint that bound an acceleration solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccelLimit {
    /// All engine power is used; the result is below the acceleration ceiling
    EnginePower,
    /// Engine could deliver more, but acceleration is held at the ceiling
    AccelCeiling,
    /// Zero speed, solved from forces since every power is zero at standstill
    Stall,
}

/// Result of [Vehicle::max_acceleration]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TractionSolution {
    /// Engine power used, including power spent overcoming resistance
    pub pwr_used: si::Power,
    /// Max achievable acceleration
    pub accel: si::Acceleration,
    /// Constraint that set `accel`
    pub limit: AccelLimit,
}

impl From<TractionSolution> for (si::Power, si::Acceleration) {
    fn from(sol: TractionSolution) -> Self {
        (sol.pwr_used, sol.accel)
    }
}

impl Vehicle {
    /// Max achievable acceleration at `speed` on level track
    pub fn max_acceleration(&self, speed: si::Velocity) -> TractionResult<TractionSolution> {
        self.max_acceleration_on_grade(speed, si::Ratio::ZERO)
    }

    /// Max achievable acceleration at `speed` on `grade`, arbitrating between the engine
    /// power ceiling and the acceleration ceiling.  Equality goes to the engine power
    /// branch: the ceiling only takes over when power allows strictly more.
    pub fn max_acceleration_on_grade(
        &self,
        speed: si::Velocity,
        grade: si::Ratio,
    ) -> TractionResult<TractionSolution> {
        self.check_speed(speed)?;
        if speed == si::Velocity::ZERO {
            return self.stall_acceleration(grade);
        }
        let params = self.params();

        let pwr_static = self.static_power_on_grade(speed, grade);
        let pwr_excess = params.pwr_engine_max - pwr_static;
        let accel_excess = power_to_acceleration(pwr_excess, speed, self.mass())?;

        let sol = if accel_excess > params.accel_max {
            TractionSolution {
                pwr_used: acceleration_to_power(params.accel_max, speed, self.mass())
                    + pwr_static,
                accel: params.accel_max,
                limit: AccelLimit::AccelCeiling,
            }
        } else {
            TractionSolution {
                pwr_used: params.pwr_engine_max,
                accel: accel_excess,
                limit: AccelLimit::EnginePower,
            }
        };
        log::debug!(
            "{:?}-limited acceleration {:?} at {:?}",
            sol.limit,
            sol.accel,
            speed
        );
        Ok(sol)
    }

    /// Tractive force is unbounded as speed approaches zero, so any engine power at all
    /// reaches the acceleration ceiling.  Without engine power only a downgrade steeper than
    /// rolling resistance can set the vehicle moving.
    fn stall_acceleration(&self, grade: si::Ratio) -> TractionResult<TractionSolution> {
        let params = self.params();
        let accel = if params.pwr_engine_max > si::Power::ZERO {
            params.accel_max
        } else {
            let force_net = -self.resistive_force(si::Velocity::ZERO, grade);
            force_to_acceleration(force_net, self.mass())?.max(si::Acceleration::ZERO)
        };
        log::warn!("solving acceleration at zero speed from force limits: {accel:?}");
        Ok(TractionSolution {
            pwr_used: si::Power::ZERO,
            accel,
            limit: AccelLimit::Stall,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_power_limited() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        let sol = vehicle.max_acceleration(20.0 * uc::MPS).unwrap();
        assert_eq!(sol.limit, AccelLimit::EnginePower);
        assert_eq!(sol.pwr_used, 4.4 * uc::MW);
        let expected = (4.4e6 - 55_120.0) / (20.0 * 378_000.0) * uc::MPS2;
        assert!(almost_eq_uom(&sol.accel, &expected, None));
        assert!(almost_eq(sol.accel.get::<si::meter_per_second_squared>(), 0.5747, Some(1e-3)));
    }

    #[test]
    fn test_accel_ceiling_limited() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        let speed = 5.0 * uc::MPS;
        let sol = vehicle.max_acceleration(speed).unwrap();
        assert_eq!(sol.limit, AccelLimit::AccelCeiling);
        assert_eq!(sol.accel, 1.1 * uc::MPS2);
        let expected = 1.1 * 378_000.0 * 5.0 * uc::W + vehicle.static_power(speed);
        assert!(almost_eq_uom(&sol.pwr_used, &expected, None));
        assert!(sol.pwr_used < vehicle.params().pwr_engine_max);
    }

    #[test]
    fn test_tie_goes_to_engine_power() {
        // pick the engine power so that the candidate acceleration at 10 m/s is exactly
        // the ceiling on a vehicle without resistance
        let params = VehicleParams {
            drag_area: si::Area::ZERO,
            rolling_res: si::Acceleration::ZERO,
            accel_max: 1.0 * uc::MPS2,
            pwr_engine_max: 1.0 * 378_000.0 * 10.0 * uc::W,
            ..VehicleParams::valid()
        };
        let vehicle = Vehicle::new(params).unwrap();
        let sol = vehicle.max_acceleration(10.0 * uc::MPS).unwrap();
        assert_eq!(sol.accel, 1.0 * uc::MPS2);
        assert_eq!(sol.limit, AccelLimit::EnginePower);
        assert_eq!(sol.pwr_used, vehicle.params().pwr_engine_max);
    }

    #[test]
    fn test_acceleration_bounded() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        for speed in Vec::linspace(0.0, 50.0, 101) {
            let sol = vehicle.max_acceleration(speed * uc::MPS).unwrap();
            assert!(sol.accel <= vehicle.params().accel_max, "{}", format_dbg!(sol));
            assert!(almost_le_uom(
                &sol.pwr_used,
                &vehicle.params().pwr_engine_max,
                None
            ));
        }
    }

    #[test]
    fn test_stall() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        let sol = vehicle.max_acceleration(si::Velocity::ZERO).unwrap();
        assert_eq!(sol.limit, AccelLimit::Stall);
        assert_eq!(sol.accel, vehicle.params().accel_max);
        assert_eq!(sol.pwr_used, si::Power::ZERO);
        assert!(!sol.accel.is_nan());
    }

    #[test]
    fn test_stall_without_engine_power() {
        let vehicle = Vehicle::new(VehicleParams {
            pwr_engine_max: si::Power::ZERO,
            ..VehicleParams::valid()
        })
        .unwrap();
        let level = vehicle.max_acceleration(si::Velocity::ZERO).unwrap();
        assert_eq!(level.accel, si::Acceleration::ZERO);

        let downhill = vehicle
            .max_acceleration_on_grade(si::Velocity::ZERO, -0.01 * uc::R)
            .unwrap();
        let expected = (9.806_65 * 0.01 - 0.002) * uc::MPS2;
        assert!(almost_eq_uom(&downhill.accel, &expected, None));
    }

    #[test]
    fn test_heavier_vehicle_accelerates_slower() {
        let mut vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        let speed = 20.0 * uc::MPS;
        let tare = vehicle.max_acceleration(speed).unwrap();
        vehicle.set_mass(450_000.0 * uc::KG).unwrap();
        let loaded = vehicle.max_acceleration(speed).unwrap();
        assert!(loaded.accel < tare.accel);
    }

    #[test]
    fn test_uphill_accelerates_slower() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        let speed = 20.0 * uc::MPS;
        let level = vehicle.max_acceleration(speed).unwrap();
        let uphill = vehicle
            .max_acceleration_on_grade(speed, 0.02 * uc::R)
            .unwrap();
        assert!(uphill.accel < level.accel);
    }

    #[test]
    fn test_invalid_speed() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        for speed in [-1.0 * uc::MPS, f64::NAN * uc::MPS, f64::INFINITY * uc::MPS] {
            assert!(matches!(
                vehicle.max_acceleration(speed),
                Err(TractionError::InvalidSpeed(_))
            ));
        }
    }

    #[test]
    fn test_into_tuple() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        let sol = vehicle.max_acceleration(20.0 * uc::MPS).unwrap();
        let (pwr_used, accel): (si::Power, si::Acceleration) = sol.into();
        assert_eq!(pwr_used, sol.pwr_used);
        assert_eq!(accel, sol.accel);
    }
}
