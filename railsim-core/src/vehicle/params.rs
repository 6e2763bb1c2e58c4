use super::*;

/// Immutable design parameters of a rail vehicle.  Every field is required when
/// deserializing; there are no defaults inferred from partial input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleParams {
    /// Max speed of the vehicle, even if physics and track allow faster
    pub speed_max: si::Velocity,
    /// Overall vehicle length
    pub length: si::Length,
    /// Number of carriages making up the vehicle
    pub num_carriages: u16,
    /// Drag area (Cd*A), where Cd is drag coefficient and A is front cross-sectional area
    pub drag_area: si::Area,
    /// Unloaded mass
    pub mass_tare: si::Mass,
    /// Density of the surrounding air
    pub air_density: si::MassDensity,
    /// Rolling resistance force per unit of current mass (N/kg)
    pub rolling_res: si::Acceleration,
    /// Acceleration ceiling
    pub accel_max: si::Acceleration,
    /// Adhesion-limited deceleration ceiling, used for emergency stops
    pub decel_max: si::Acceleration,
    /// Comfort-limited deceleration ceiling, used in routine service
    pub decel_design: si::Acceleration,
    /// Max power output of the engine
    pub pwr_engine_max: si::Power,
    /// Max regenerative braking power
    pub pwr_regen_max: si::Power,
    /// Speed below which regenerative braking power rolls off quadratically
    pub speed_regen: si::Velocity,
    /// Speed below which friction brakes engage alongside regen in [BrakeMode::Saver]
    pub speed_fric_brake: si::Velocity,
    /// Max friction braking power
    pub pwr_fric_brake_max: si::Power,
    /// Brake mode used in regular service
    pub brake_mode: BrakeMode,
    /// Fraction of supply power delivered as traction
    pub motor_eff: si::Ratio,
    /// Fraction of regenerative braking power returned to the supply
    pub regen_eff: si::Ratio,
    /// Non-traction power draw
    pub pwr_hotel: si::Power,
}

impl Default for VehicleParams {
    /// Eight-car electric multiple unit
    fn default() -> Self {
        Self {
            speed_max: 50.0 * uc::MPS,
            length: 160.0 * uc::M,
            num_carriages: 8,
            drag_area: 8.0 * uc::M2,
            mass_tare: 378_000.0 * uc::KG,
            air_density: 1.25 * uc::KGPM3,
            rolling_res: 0.002 * uc::MPS2,
            accel_max: 1.1 * uc::MPS2,
            decel_max: 1.5 * uc::MPS2,
            decel_design: 1.1 * uc::MPS2,
            pwr_engine_max: 4.4 * uc::MW,
            pwr_regen_max: 6.0 * uc::MW,
            speed_regen: 10.0 * uc::MPS,
            speed_fric_brake: 10.0 * uc::MPS,
            pwr_fric_brake_max: 800.0 * uc::KW,
            brake_mode: BrakeMode::Saver,
            motor_eff: 0.9 * uc::R,
            regen_eff: 0.8 * uc::R,
            pwr_hotel: 65.0 * uc::KW,
        }
    }
}

impl Valid for VehicleParams {}

impl ObjState for VehicleParams {
    fn validate(&self) -> ValidationResults {
        let mut errors = ValidationErrors::new();

        si_chk_num_gtz_fin(&mut errors, &self.speed_max, "Max speed");
        si_chk_num_gtz_fin(&mut errors, &self.length, "Length");
        if self.num_carriages == 0 {
            errors.push(anyhow!("Carriage count must be at least one!"));
        }
        si_chk_num_gez_fin(&mut errors, &self.drag_area, "Drag area");
        si_chk_num_gtz_fin(&mut errors, &self.mass_tare, "Tare mass");
        si_chk_num_gez_fin(&mut errors, &self.air_density, "Air density");
        si_chk_num_gez_fin(&mut errors, &self.rolling_res, "Rolling resistance");
        si_chk_num_gez_fin(&mut errors, &self.accel_max, "Max acceleration");
        si_chk_num_gtz_fin(&mut errors, &self.decel_max, "Max deceleration");
        si_chk_num_gtz_fin(&mut errors, &self.decel_design, "Design deceleration");
        si_chk_num_gez_fin(&mut errors, &self.pwr_engine_max, "Max engine power");
        si_chk_num_gez_fin(&mut errors, &self.pwr_regen_max, "Max regen power");
        si_chk_num_gtz_fin(&mut errors, &self.speed_regen, "Regen speed");
        si_chk_num_gez_fin(&mut errors, &self.speed_fric_brake, "Friction brake speed");
        si_chk_num_gez_fin(&mut errors, &self.pwr_fric_brake_max, "Max friction brake power");
        chk_frac_gtz(&mut errors, &self.motor_eff, "Motor efficiency");
        chk_frac_gtz(&mut errors, &self.regen_eff, "Regen efficiency");
        si_chk_num_gez_fin(&mut errors, &self.pwr_hotel, "Hotel power");
        early_err!(errors, "Vehicle params");

        if self.decel_design > self.decel_max {
            errors.push(anyhow!(
                "Design deceleration = {:?} must not exceed max deceleration = {:?}!",
                self.decel_design,
                self.decel_max
            ));
        }

        errors.make_err_in(anyhow!("Vehicle params"))
    }
}

impl Init for VehicleParams {
    fn init(&mut self) -> anyhow::Result<()> {
        self.validate()?;
        Ok(())
    }
}

impl SerdeAPI for VehicleParams {}
