//! Basal metabolic rate using the Mifflin-St Jeor equation.

use std::fmt;

use log::debug;

use crate::biometrics::{validate, BiometricInput, RawBiometricInput, Sex, ValidationError};

const MALE_OFFSET: f64 = 5.0;
const FEMALE_OFFSET: f64 = -161.0;

/// Estimated calories per day needed at rest.
///
/// Keeps full precision internally, [`BmrResult::calories_per_day`] is the
/// two-decimal figure meant for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmrResult {
    calories: f64,
}

impl BmrResult {
    pub fn calories_per_day(&self) -> f64 {
        round_to_cents(self.calories)
    }

    pub fn exact(&self) -> f64 {
        self.calories
    }
}

impl fmt::Display for BmrResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} calories/day", self.calories_per_day())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BmrResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.calories_per_day())
    }
}

fn round_to_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn compute(input: &BiometricInput) -> BmrResult {
    let offset = match input.sex() {
        Sex::Male => MALE_OFFSET,
        Sex::Female => FEMALE_OFFSET,
    };
    BmrResult {
        calories: 10.0 * input.weight_kg() + 6.25 * input.height_cm() - 5.0 * input.age() + offset,
    }
}

/// Validates raw form entry and computes the BMR in one step.
pub fn calculate(raw: &RawBiometricInput) -> Result<BmrResult, ValidationError> {
    match validate(raw) {
        Ok(input) => {
            let result = compute(&input);
            debug!("Computed BMR {} for {:?}", result, input);
            Ok(result)
        }
        Err(e) => {
            debug!("Rejected BMR input: {}", e);
            Err(e)
        }
    }
}
