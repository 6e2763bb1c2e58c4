use super::*;

/// Acceleration and deceleration capability at one speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint {
    pub speed: si::Velocity,
    pub traction: TractionSolution,
    pub braking: BrakingSolution,
}

impl Vehicle {
    /// Solves traction and braking at each of `speeds` on level track.  Speeds above the
    /// vehicle's max speed are rejected, as are negative or non-finite ones.
    pub fn performance_envelope(
        &self,
        speeds: &[si::Velocity],
        brake_mode: BrakeMode,
        operating_mode: OperatingMode,
    ) -> TractionResult<Vec<EnvelopePoint>> {
        speeds
            .iter()
            .map(|&speed| {
                if speed > self.params().speed_max {
                    return Err(TractionError::InvalidSpeed(format!(
                        "speed = {:?} exceeds max speed = {:?}",
                        speed,
                        self.params().speed_max
                    )));
                }
                Ok(EnvelopePoint {
                    speed,
                    traction: self.max_acceleration(speed)?,
                    braking: self.max_deceleration(speed, brake_mode, operating_mode)?,
                })
            })
            .collect()
    }

    /// Evenly spaced speeds from standstill to max speed, inclusive
    pub fn speed_grid(&self, n_elements: usize) -> Vec<si::Velocity> {
        let speed_max = self.params().speed_max;
        Vec::linspace(0.0, speed_max.get::<si::meter_per_second>(), n_elements)
            .into_iter()
            // guard the last element against rounding past max speed
            .map(|v| (v * uc::MPS).min(speed_max))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_grid() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        let grid = vehicle.speed_grid(11);
        assert_eq!(grid.len(), 11);
        assert_eq!(grid[0], si::Velocity::ZERO);
        assert!(almost_eq_uom(&grid[10], &vehicle.params().speed_max, None));
    }

    #[test]
    fn test_envelope() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        let envelope = vehicle
            .performance_envelope(
                &vehicle.speed_grid(51),
                BrakeMode::Saver,
                OperatingMode::Design,
            )
            .unwrap();
        assert_eq!(envelope.len(), 51);
        assert_eq!(envelope[0].traction.limit, AccelLimit::Stall);
        // traction falls off with speed once power limited
        let accels: Vec<si::Acceleration> = envelope.iter().map(|p| p.traction.accel).collect();
        assert!(accels.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(envelope[50].traction.limit, AccelLimit::EnginePower);
    }

    #[test]
    fn test_envelope_rejects_overspeed() {
        let vehicle = Vehicle::new(VehicleParams::valid()).unwrap();
        let res = vehicle.performance_envelope(
            &[10.0 * uc::MPS, 60.0 * uc::MPS],
            BrakeMode::Max,
            OperatingMode::Max,
        );
        assert!(matches!(res, Err(TractionError::InvalidSpeed(_))));
    }
}
