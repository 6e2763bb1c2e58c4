use super::*;

impl Vehicle {
    /// Aerodynamic drag at `speed`
    pub fn drag_force(&self, speed: si::Velocity) -> si::Force {
        0.5 * self.params().drag_area * self.params().air_density * speed * speed
    }

    /// Rolling resistance at current mass, independent of speed
    pub fn rolling_force(&self) -> si::Force {
        self.params().rolling_res * self.mass()
    }

    /// Gravitational force component along the track.  `grade` is rise over run,
    /// positive uphill, so a downgrade yields a negative (assisting) force.
    pub fn grade_force(&self, grade: si::Ratio) -> si::Force {
        self.mass() * uc::ACC_GRAV * grade
    }

    /// Net force opposing motion: drag plus rolling plus grade
    pub fn resistive_force(&self, speed: si::Velocity, grade: si::Ratio) -> si::Force {
        self.drag_force(speed) + self.rolling_force() + self.grade_force(grade)
    }

    /// Power needed to hold `speed` on level track
    pub fn static_power(&self, speed: si::Velocity) -> si::Power {
        self.static_power_on_grade(speed, si::Ratio::ZERO)
    }

    /// Power needed to hold `speed` on `grade`; negative on a downgrade steep enough to
    /// overcome drag and rolling resistance
    pub fn static_power_on_grade(&self, speed: si::Velocity, grade: si::Ratio) -> si::Power {
        force_to_power(self.resistive_force(speed, grade), speed)
    }
}
