use super::*;

/// Which brakes may be combined during a stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrakeMode {
    /// Regenerative and friction braking together at any speed
    Max,
    /// Regenerative braking alone above the friction-brake engagement speed
    Saver,
}

/// Which deceleration ceiling a stop targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    /// Routine stop bounded by the comfort (design) deceleration
    Design,
    /// Fastest safe stop bounded by the adhesion (max) deceleration
    Max,
}

impl FromStr for BrakeMode {
    type Err = TractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "max" => Ok(Self::Max),
            "saver" => Ok(Self::Saver),
            _ => Err(TractionError::InvalidMode(format!(
                "brake mode {s:?} must be one of [\"max\", \"saver\"]"
            ))),
        }
    }
}

impl FromStr for OperatingMode {
    type Err = TractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "design" => Ok(Self::Design),
            "max" => Ok(Self::Max),
            _ => Err(TractionError::InvalidMode(format!(
                "operating mode {s:?} must be one of [\"design\", \"max\"]"
            ))),
        }
    }
}

impl fmt::Display for BrakeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => write!(f, "max"),
            Self::Saver => write!(f, "saver"),
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Design => write!(f, "design"),
            Self::Max => write!(f, "max"),
        }
    }
}

/// Decides whether friction brakes may supplement regen at `speed`.
///
/// | brake mode | operating mode | friction available     |
/// |------------|----------------|------------------------|
/// | max        | any            | always                 |
/// | saver      | max            | always                 |
/// | saver      | design         | below `speed_fric_brake` |
pub(crate) fn friction_available(
    brake_mode: BrakeMode,
    operating_mode: OperatingMode,
    speed: si::Velocity,
    speed_fric_brake: si::Velocity,
) -> bool {
    match (brake_mode, operating_mode) {
        (BrakeMode::Max, _) | (BrakeMode::Saver, OperatingMode::Max) => true,
        (BrakeMode::Saver, OperatingMode::Design) => speed < speed_fric_brake,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("max".parse::<BrakeMode>().unwrap(), BrakeMode::Max);
        assert_eq!(" Saver ".parse::<BrakeMode>().unwrap(), BrakeMode::Saver);
        assert_eq!(
            "design".parse::<OperatingMode>().unwrap(),
            OperatingMode::Design
        );
        assert_eq!("MAX".parse::<OperatingMode>().unwrap(), OperatingMode::Max);
    }

    #[test]
    fn test_parse_invalid_modes() {
        assert!(matches!(
            "eco".parse::<BrakeMode>(),
            Err(TractionError::InvalidMode(_))
        ));
        assert!(matches!(
            "saver".parse::<OperatingMode>(),
            Err(TractionError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for mode in [BrakeMode::Max, BrakeMode::Saver] {
            assert_eq!(mode.to_string().parse::<BrakeMode>().unwrap(), mode);
        }
        for mode in [OperatingMode::Design, OperatingMode::Max] {
            assert_eq!(mode.to_string().parse::<OperatingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_friction_available() {
        let speed_fric_brake = 10.0 * uc::MPS;
        let slow = 5.0 * uc::MPS;
        let fast = 20.0 * uc::MPS;

        assert!(friction_available(
            BrakeMode::Max,
            OperatingMode::Design,
            fast,
            speed_fric_brake
        ));
        assert!(friction_available(
            BrakeMode::Saver,
            OperatingMode::Max,
            fast,
            speed_fric_brake
        ));
        assert!(friction_available(
            BrakeMode::Saver,
            OperatingMode::Design,
            slow,
            speed_fric_brake
        ));
        assert!(!friction_available(
            BrakeMode::Saver,
            OperatingMode::Design,
            fast,
            speed_fric_brake
        ));
        // engagement threshold is exclusive
        assert!(!friction_available(
            BrakeMode::Saver,
            OperatingMode::Design,
            speed_fric_brake,
            speed_fric_brake
        ));
    }
}
