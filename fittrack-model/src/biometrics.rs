use std::str::FromStr;

use itertools::Itertools;
use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parses a free-form sex category, ignoring case and surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Sex::from_str(text.trim())
            .map_err(|_| ValidationError::UnsupportedCategory(text.trim().to_owned()))
    }
}

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Age,
    Height,
    Weight,
    Sex,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("please fill in all fields, missing: {}", join_fields(.0))]
    MissingField(Vec<Field>),
    #[error("{field} must be a number, got \"{value}\"")]
    NotANumber { field: Field, value: String },
    #[error("{field} must be greater than zero, got {value}")]
    InvalidRange { field: Field, value: f64 },
    #[error("unsupported sex category \"{0}\", expected male or female")]
    UnsupportedCategory(String),
}

fn join_fields(fields: &[Field]) -> String {
    fields.iter().join(", ")
}

/// Biometric entry exactly as typed by the user. Any field may be absent,
/// blank or garbage.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawBiometricInput {
    pub age: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub sex: Option<String>,
}

/// Validated biometrics: every numeric field is finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BiometricInput {
    age: f64,
    height_cm: f64,
    weight_kg: f64,
    sex: Sex,
}

impl BiometricInput {
    pub fn new(age: f64, height_cm: f64, weight_kg: f64, sex: Sex) -> Result<Self, ValidationError> {
        Ok(Self {
            age: check_positive(Field::Age, age)?,
            height_cm: check_positive(Field::Height, height_cm)?,
            weight_kg: check_positive(Field::Weight, weight_kg)?,
            sex,
        })
    }

    /// Age in years.
    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }
}

/// Turns raw form entry into a typed [`BiometricInput`].
///
/// Missing fields are reported all at once, in field order. Past that, the
/// first offending field wins: age, height and weight are parsed and range
/// checked in that order, then the sex category.
pub fn validate(raw: &RawBiometricInput) -> Result<BiometricInput, ValidationError> {
    let age = non_blank(raw.age.as_deref());
    let height = non_blank(raw.height.as_deref());
    let weight = non_blank(raw.weight.as_deref());
    let sex = non_blank(raw.sex.as_deref());

    let missing: Vec<Field> = [
        (Field::Age, age.is_none()),
        (Field::Height, height.is_none()),
        (Field::Weight, weight.is_none()),
        (Field::Sex, sex.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, is_missing)| is_missing.then_some(field))
    .collect();

    let (Some(age), Some(height), Some(weight), Some(sex)) = (age, height, weight, sex) else {
        return Err(ValidationError::MissingField(missing));
    };

    Ok(BiometricInput {
        age: parse_positive(Field::Age, age)?,
        height_cm: parse_positive(Field::Height, height)?,
        weight_kg: parse_positive(Field::Weight, weight)?,
        sex: Sex::parse(sex)?,
    })
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a decimal number, rejecting anything that is not a finite float.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

fn parse_positive(field: Field, text: &str) -> Result<f64, ValidationError> {
    let value = parse_number(text).ok_or_else(|| ValidationError::NotANumber {
        field,
        value: text.to_owned(),
    })?;
    check_positive(field, value)
}

fn check_positive(field: Field, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        Err(ValidationError::NotANumber {
            field,
            value: value.to_string(),
        })
    } else if value <= 0.0 {
        Err(ValidationError::InvalidRange { field, value })
    } else {
        Ok(value)
    }
}
