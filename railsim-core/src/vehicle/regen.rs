use super::*;

impl Vehicle {
    /// Max regenerative braking power at `speed`.  At and above `speed_regen` this is the
    /// configured ceiling; below it the motor's back-EMF limits capacity, modeled as a
    /// quadratic rolloff that reaches zero at standstill and meets the ceiling at
    /// `speed_regen` without a step.
    pub fn max_regen_power(&self, speed: si::Velocity) -> si::Power {
        let params = self.params();
        if speed >= params.speed_regen {
            params.pwr_regen_max
        } else {
            let speed_frac: si::Ratio = speed / params.speed_regen;
            let speed_frac = speed_frac.get::<si::ratio>();
            params.pwr_regen_max * speed_frac * speed_frac
        }
    }
}
