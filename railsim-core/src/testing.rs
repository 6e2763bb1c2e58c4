//! Helpers for exercising [ObjState] validation over sets of known-good and known-bad cases

use crate::validate::*;

pub trait Cases: Valid {
    fn real_cases() -> Vec<Self> {
        vec![Valid::valid()]
    }
    fn invalid_cases() -> Vec<Self> {
        vec![]
    }
}

pub fn test_cases<T>()
where
    T: ObjState + Cases + std::fmt::Debug,
{
    for case_real in T::real_cases() {
        if let Err(errors) = case_real.validate() {
            panic!("{case_real:?} should be valid:\n{errors}");
        }
    }
    for case_invalid in T::invalid_cases() {
        assert!(
            !case_invalid.is_valid(),
            "{case_invalid:?} should be invalid"
        );
    }
}
