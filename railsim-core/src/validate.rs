use crate::combo_error::ComboErrors;
use crate::imports::*;
use uom::si::Quantity;

pub type ValidationError = anyhow::Error;
pub type ValidationErrors = ComboErrors<ValidationError>;
pub type ValidationResults = Result<(), ValidationErrors>;

///Generate valid default like input for use in other objects
pub trait Valid: Sized + Default {
    fn valid() -> Self {
        Default::default()
    }
}

///Specify when an object is valid
pub trait ObjState {
    fn validate(&self) -> ValidationResults {
        Ok(())
    }
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Check that SI value is finite and greater than or equal to zero
pub fn si_chk_num_gez_fin<D, U>(
    errors: &mut ValidationErrors,
    field_val: &Quantity<D, U, f64>,
    field_name: &str,
) where
    D: uom::si::Dimension + ?Sized,
    U: uom::si::Units<f64> + ?Sized,
{
    if !(*field_val >= Quantity::<D, U, f64>::ZERO && field_val.is_finite()) {
        errors.push(anyhow!(
            "{} = {:?} must be a finite, non-negative number!",
            field_name,
            field_val
        ));
    }
}

/// Check that SI value is finite and strictly greater than zero
pub fn si_chk_num_gtz_fin<D, U>(
    errors: &mut ValidationErrors,
    field_val: &Quantity<D, U, f64>,
    field_name: &str,
) where
    D: uom::si::Dimension + ?Sized,
    U: uom::si::Units<f64> + ?Sized,
{
    if !(*field_val > Quantity::<D, U, f64>::ZERO && field_val.is_finite()) {
        errors.push(anyhow!(
            "{} = {:?} must be a finite number larger than zero!",
            field_name,
            field_val
        ));
    }
}

/// Check that a fraction lies in (0, 1]
pub fn chk_frac_gtz(errors: &mut ValidationErrors, field_val: &si::Ratio, field_name: &str) {
    if !(*field_val > si::Ratio::ZERO && *field_val <= uc::R) {
        errors.push(anyhow!(
            "{} = {:?} must be larger than zero and no larger than one!",
            field_name,
            field_val
        ));
    }
}

/// Returns collected errors nested under `$name` so that cross-field checks never see
/// values that already failed their own checks
macro_rules! early_err {
    ($errors:expr, $name:expr) => {
        if !$errors.is_empty() {
            return $errors.make_err_in(anyhow!("{} validation unfinished!", $name));
        }
    };
}

pub(crate) use early_err;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_si_chk_num_gez_fin_accepts_zero() {
        let mut errors = ValidationErrors::new();
        si_chk_num_gez_fin(&mut errors, &si::Power::ZERO, "Hotel power");
        assert!(errors.is_empty());
        si_chk_num_gez_fin(&mut errors, &(-1.0 * uc::W), "Hotel power");
        si_chk_num_gez_fin(&mut errors, &(f64::NAN * uc::W), "Hotel power");
        assert_eq!(errors.len(), 2);
        let msg = errors[0].error().to_string();
        assert!(msg.contains("must be a finite, non-negative number"), "{msg}");
        assert!(!msg.contains("positive"), "{msg}");
    }

    #[test]
    fn test_si_chk_num_fin() {
        let mut errors = ValidationErrors::new();
        si_chk_num_gez_fin(&mut errors, &si::Area::ZERO, "drag_area");
        si_chk_num_gtz_fin(&mut errors, &(10.0 * uc::MPS), "regen_speed");
        assert!(errors.is_empty());
        si_chk_num_gez_fin(&mut errors, &(f64::INFINITY * uc::M2), "drag_area");
        si_chk_num_gtz_fin(&mut errors, &si::Velocity::ZERO, "regen_speed");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_chk_frac_gtz() {
        let mut errors = ValidationErrors::new();
        chk_frac_gtz(&mut errors, &(0.9 * uc::R), "motor_efficiency");
        chk_frac_gtz(&mut errors, &uc::R, "motor_efficiency");
        assert!(errors.is_empty());
        chk_frac_gtz(&mut errors, &si::Ratio::ZERO, "motor_efficiency");
        chk_frac_gtz(&mut errors, &(1.2 * uc::R), "motor_efficiency");
        assert_eq!(errors.len(), 2);
    }
}
