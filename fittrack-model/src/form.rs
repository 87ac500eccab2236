//! Explicit state for the BMR calculator form. Every action produces a new
//! form value; nothing is mutated in place.

use log::debug;

use crate::biometrics::{Field, RawBiometricInput, Sex, ValidationError};
use crate::bmr::{calculate, BmrResult};
use crate::stepper::{decrement, format_value, increment};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FormState {
    #[default]
    Editing,
    ResultAvailable(BmrResult),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    Increment(Field),
    Decrement(Field),
    SelectSex(Sex),
    Calculate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BmrForm {
    pub age: String,
    pub height: String,
    pub weight: String,
    pub sex: Sex,
    pub state: FormState,
}

impl Default for BmrForm {
    fn default() -> Self {
        Self {
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            sex: Sex::Female,
            state: FormState::Editing,
        }
    }
}

impl BmrForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&BmrResult> {
        match &self.state {
            FormState::ResultAvailable(result) => Some(result),
            FormState::Editing => None,
        }
    }

    pub fn to_raw(&self) -> RawBiometricInput {
        RawBiometricInput {
            age: Some(self.age.clone()),
            height: Some(self.height.clone()),
            weight: Some(self.weight.clone()),
            sex: Some(self.sex.to_string()),
        }
    }

    fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Age => Some(&self.age),
            Field::Height => Some(&self.height),
            Field::Weight => Some(&self.weight),
            Field::Sex => None,
        }
    }

    fn with_text(&self, field: Field, text: String) -> Self {
        let mut next = Self {
            state: FormState::Editing,
            ..self.clone()
        };
        match field {
            Field::Age => next.age = text,
            Field::Height => next.height = text,
            Field::Weight => next.weight = text,
            Field::Sex => {}
        }
        next
    }

    fn step(&self, field: Field, apply: fn(&str, f64) -> f64) -> Self {
        match (self.text(field), field.step()) {
            (Some(current), Some(step)) => {
                let value = apply(current, step);
                if value.is_finite() {
                    self.with_text(field, format_value(value))
                } else {
                    self.clone()
                }
            }
            _ => self.clone(),
        }
    }

    /// Returns the form that results from `action`. Only `Calculate` and
    /// editing the sex field as text can fail; on failure the caller keeps
    /// its current form.
    pub fn apply(&self, action: FormAction) -> Result<BmrForm, ValidationError> {
        debug!("Applying form action {:?}", action);
        match action {
            FormAction::Edit(Field::Sex, text) => Ok(Self {
                sex: Sex::parse(&text)?,
                state: FormState::Editing,
                ..self.clone()
            }),
            FormAction::Edit(field, text) => Ok(self.with_text(field, text)),
            FormAction::Increment(field) => Ok(self.step(field, increment)),
            FormAction::Decrement(field) => Ok(self.step(field, decrement)),
            FormAction::SelectSex(sex) => Ok(Self {
                sex,
                state: FormState::Editing,
                ..self.clone()
            }),
            FormAction::Calculate => {
                let result = calculate(&self.to_raw())?;
                Ok(Self {
                    state: FormState::ResultAvailable(result),
                    ..self.clone()
                })
            }
        }
    }
}
