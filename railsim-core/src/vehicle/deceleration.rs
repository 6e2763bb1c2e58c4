use super::*;

/// Constraint that bound a deceleration solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecelLimit {
    /// Braking system capacity (plus resistive assist) is below the target ceiling
    BrakeCapacity,
    /// [OperatingMode::Design]: held at the comfort ceiling by the brakes
    Comfort,
    /// [OperatingMode::Design]: resistance alone exceeds the comfort ceiling, so the
    /// engine motors to hold it
    ComfortMotoring,
    /// [OperatingMode::Max]: brakes held at the adhesion ceiling, with resistance
    /// decelerating beyond it
    Adhesion,
}

/// Result of [Vehicle::max_deceleration]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrakingSolution {
    /// Regenerative braking power
    pub pwr_regen: si::Power,
    /// Friction braking power
    pub pwr_fric: si::Power,
    /// Engine power, negative when motoring against excess resistance and zero otherwise
    pub pwr_engine: si::Power,
    /// Achievable deceleration, positive when slowing down
    pub decel: si::Acceleration,
    /// Constraint that set `decel`
    pub limit: DecelLimit,
}

impl BrakingSolution {
    /// Total commanded brake power
    pub fn pwr_brake(&self) -> si::Power {
        self.pwr_regen + self.pwr_fric
    }
}

impl From<BrakingSolution> for (si::Power, si::Power, si::Power, si::Acceleration) {
    fn from(sol: BrakingSolution) -> Self {
        (sol.pwr_regen, sol.pwr_fric, sol.pwr_engine, sol.decel)
    }
}

/// Braking capability at one speed.  At zero speed every power is zero and the
/// decelerations come from force limits, possibly infinite.
#[derive(Debug, Clone, Copy)]
struct BrakeCapacity {
    pwr_regen_max: si::Power,
    /// regen plus any available friction braking
    pwr_brake_max: si::Power,
    pwr_static: si::Power,
    /// brakes alone
    decel_brake_max: si::Acceleration,
    /// brakes plus resistive forces
    decel_brake_max_res: si::Acceleration,
    /// resistive forces alone
    decel_res: si::Acceleration,
}

/// Mutually exclusive outcomes of the operating-mode decision table
#[derive(Debug, Clone, Copy)]
enum BrakeCommand {
    Capacity {
        decel: si::Acceleration,
        pwr_brake: si::Power,
    },
    Comfort {
        decel: si::Acceleration,
        pwr_brake: si::Power,
    },
    Motoring {
        decel: si::Acceleration,
        pwr_engine: si::Power,
    },
    Adhesion {
        decel: si::Acceleration,
        pwr_brake: si::Power,
    },
}

impl BrakeCommand {
    /// Splits commanded brake power into regen first, friction for the remainder
    fn resolve(self, pwr_regen_max: si::Power) -> BrakingSolution {
        let split = |pwr_brake: si::Power| {
            if pwr_regen_max >= pwr_brake {
                (pwr_brake, si::Power::ZERO)
            } else {
                (pwr_regen_max, pwr_brake - pwr_regen_max)
            }
        };
        let (decel, pwr_brake, pwr_engine, limit) = match self {
            Self::Capacity { decel, pwr_brake } => {
                (decel, pwr_brake, si::Power::ZERO, DecelLimit::BrakeCapacity)
            }
            Self::Comfort { decel, pwr_brake } => {
                (decel, pwr_brake, si::Power::ZERO, DecelLimit::Comfort)
            }
            Self::Motoring { decel, pwr_engine } => {
                (decel, si::Power::ZERO, pwr_engine, DecelLimit::ComfortMotoring)
            }
            Self::Adhesion { decel, pwr_brake } => {
                (decel, pwr_brake, si::Power::ZERO, DecelLimit::Adhesion)
            }
        };
        let (pwr_regen, pwr_fric) = split(pwr_brake);
        BrakingSolution {
            pwr_regen,
            pwr_fric,
            pwr_engine,
            decel,
            limit,
        }
    }
}

impl Vehicle {
    /// Max achievable deceleration at `speed` on level track
    pub fn max_deceleration(
        &self,
        speed: si::Velocity,
        brake_mode: BrakeMode,
        operating_mode: OperatingMode,
    ) -> TractionResult<BrakingSolution> {
        self.max_deceleration_on_grade(speed, si::Ratio::ZERO, brake_mode, operating_mode)
    }

    /// Same as [Vehicle::max_deceleration] using the vehicle's configured brake mode
    pub fn max_deceleration_default(
        &self,
        speed: si::Velocity,
        operating_mode: OperatingMode,
    ) -> TractionResult<BrakingSolution> {
        self.max_deceleration(speed, self.params().brake_mode, operating_mode)
    }

    /// Max achievable deceleration at `speed` on `grade`, and the split of braking power
    /// across regenerative, friction, and engine contributions
    pub fn max_deceleration_on_grade(
        &self,
        speed: si::Velocity,
        grade: si::Ratio,
        brake_mode: BrakeMode,
        operating_mode: OperatingMode,
    ) -> TractionResult<BrakingSolution> {
        self.check_speed(speed)?;
        let cap = self.brake_capacity(speed, grade, brake_mode, operating_mode)?;
        let cmd = self.command_brakes(&cap, speed, operating_mode);
        if let BrakeCommand::Motoring { pwr_engine, .. } = cmd {
            log::warn!(
                "engine motoring at {pwr_engine:?} to hold design deceleration at {speed:?}"
            );
        }
        let sol = cmd.resolve(cap.pwr_regen_max);
        log::debug!(
            "{:?}-limited deceleration {:?} at {:?} ({} brake mode, {} operating mode)",
            sol.limit,
            sol.decel,
            speed,
            brake_mode,
            operating_mode
        );
        Ok(sol)
    }

    fn brake_capacity(
        &self,
        speed: si::Velocity,
        grade: si::Ratio,
        brake_mode: BrakeMode,
        operating_mode: OperatingMode,
    ) -> TractionResult<BrakeCapacity> {
        let params = self.params();
        let fric_avail =
            friction_available(brake_mode, operating_mode, speed, params.speed_fric_brake);
        let pwr_fric_max = if fric_avail {
            params.pwr_fric_brake_max
        } else {
            si::Power::ZERO
        };
        let pwr_regen_max = self.max_regen_power(speed);
        let pwr_brake_max = pwr_regen_max + pwr_fric_max;

        if speed == si::Velocity::ZERO {
            return self.stall_brake_capacity(grade, pwr_fric_max);
        }

        let pwr_static = self.static_power_on_grade(speed, grade);
        Ok(BrakeCapacity {
            pwr_regen_max,
            pwr_brake_max,
            pwr_static,
            decel_brake_max: power_to_acceleration(pwr_brake_max, speed, self.mass())?,
            decel_brake_max_res: power_to_acceleration(
                pwr_brake_max + pwr_static,
                speed,
                self.mass(),
            )?,
            decel_res: power_to_acceleration(pwr_static, speed, self.mass())?,
        })
    }

    /// At standstill regen force vanishes with the quadratic rolloff, while any friction
    /// brake power yields unbounded force.
    fn stall_brake_capacity(
        &self,
        grade: si::Ratio,
        pwr_fric_max: si::Power,
    ) -> TractionResult<BrakeCapacity> {
        let decel_brake_max = if pwr_fric_max > si::Power::ZERO {
            f64::INFINITY * uc::MPS2
        } else {
            si::Acceleration::ZERO
        };
        let decel_res =
            force_to_acceleration(self.resistive_force(si::Velocity::ZERO, grade), self.mass())?;
        log::warn!("solving deceleration at zero speed from force limits");
        Ok(BrakeCapacity {
            pwr_regen_max: si::Power::ZERO,
            pwr_brake_max: si::Power::ZERO,
            pwr_static: si::Power::ZERO,
            decel_brake_max,
            decel_brake_max_res: decel_brake_max + decel_res,
            decel_res,
        })
    }

    fn command_brakes(
        &self,
        cap: &BrakeCapacity,
        speed: si::Velocity,
        operating_mode: OperatingMode,
    ) -> BrakeCommand {
        let params = self.params();
        match operating_mode {
            OperatingMode::Design => {
                if cap.decel_brake_max_res <= params.decel_design {
                    BrakeCommand::Capacity {
                        decel: cap.decel_brake_max_res,
                        pwr_brake: cap.pwr_brake_max,
                    }
                } else {
                    // resistance already provides `pwr_static` worth of braking
                    let pwr_brake = acceleration_to_power(params.decel_design, speed, self.mass())
                        - cap.pwr_static;
                    if pwr_brake < si::Power::ZERO {
                        BrakeCommand::Motoring {
                            decel: params.decel_design,
                            pwr_engine: pwr_brake,
                        }
                    } else {
                        BrakeCommand::Comfort {
                            decel: params.decel_design,
                            pwr_brake,
                        }
                    }
                }
            }
            OperatingMode::Max => {
                if cap.decel_brake_max <= params.decel_max {
                    BrakeCommand::Capacity {
                        decel: cap.decel_brake_max_res,
                        pwr_brake: cap.pwr_brake_max,
                    }
                } else {
                    BrakeCommand::Adhesion {
                        decel: params.decel_max + cap.decel_res,
                        pwr_brake: acceleration_to_power(params.decel_max, speed, self.mass()),
                    }
                }
            }
        }
    }
}
