use super::*;

/// Rail vehicle whose design parameters are fixed at construction.  The current mass is
/// the only mutable state and may change between solves as load changes; no internal
/// synchronization is provided, so a single writer must not mutate it during a solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    params: VehicleParams,
    /// Current mass including passengers and cargo, never below `params.mass_tare`
    mass: si::Mass,
}

impl Vehicle {
    /// Builds a vehicle at tare mass after validating `params`
    pub fn new(params: VehicleParams) -> TractionResult<Self> {
        params.validate()?;
        let mass = params.mass_tare;
        log::debug!(
            "built vehicle with {} carriages at tare mass {:?}",
            params.num_carriages,
            mass
        );
        Ok(Self { params, mass })
    }

    /// Reads parameters from a file (extension selects the format) and builds a vehicle
    pub fn from_file<P: AsRef<Path>>(filepath: P) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let params = VehicleParams::from_file(filepath, false)?;
        Self::new(params).with_context(|| format!("Invalid vehicle in {filepath:?}"))
    }

    pub fn params(&self) -> &VehicleParams {
        &self.params
    }

    pub fn mass(&self) -> si::Mass {
        self.mass
    }

    /// Sets current mass.  Fails, leaving the vehicle unchanged, if `mass` is not finite or
    /// lies below tare mass.
    pub fn set_mass(&mut self, mass: si::Mass) -> TractionResult<()> {
        let mut errors = ValidationErrors::new();
        si_chk_num_gtz_fin(&mut errors, &mass, "Current mass");
        if mass < self.params.mass_tare {
            errors.push(anyhow!(
                "Current mass = {:?} must not be below tare mass = {:?}!",
                mass,
                self.params.mass_tare
            ));
        }
        errors.make_err_in(anyhow!("Vehicle mass"))?;
        self.mass = mass;
        Ok(())
    }

    /// Rejects negative or non-finite speeds before any solve
    pub(crate) fn check_speed(&self, speed: si::Velocity) -> TractionResult<()> {
        if !speed.is_finite() || speed < si::Velocity::ZERO {
            return Err(TractionError::InvalidSpeed(format!(
                "speed = {speed:?} must be a finite, non-negative number"
            )));
        }
        Ok(())
    }

    /// Power drawn from the supply while motoring: traction power through the motor plus
    /// hotel load
    pub fn traction_supply_power(&self, traction: &TractionSolution) -> si::Power {
        traction.pwr_used / self.params.motor_eff + self.params.pwr_hotel
    }

    /// Power drawn from the supply while braking.  Negative values mean net return to the
    /// supply.
    pub fn braking_supply_power(&self, braking: &BrakingSolution) -> si::Power {
        self.params.pwr_hotel + braking.pwr_engine.abs() / self.params.motor_eff
            - braking.pwr_regen * self.params.regen_eff
    }
}

impl TryFrom<VehicleParams> for Vehicle {
    type Error = TractionError;

    fn try_from(params: VehicleParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}
