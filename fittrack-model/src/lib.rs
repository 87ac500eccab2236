pub mod biometrics;
pub mod bmr;
pub mod exercise;
pub mod form;
pub mod stepper;
pub mod user;

pub use biometrics::{validate, BiometricInput, Field, RawBiometricInput, Sex, ValidationError};
pub use bmr::{calculate, compute, BmrResult};
