use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub img: Option<String>,
    pub age: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sign-up payload. The password only ever travels to the user store.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub img: Option<String>,
    pub age: Option<u32>,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("img", &self.img)
            .field("age", &self.age)
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UserValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address \"{0}\"")]
    InvalidEmail(String),
}

impl NewUser {
    pub fn validate(&self) -> Result<(), UserValidationError> {
        for (name, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(UserValidationError::MissingField(name));
            }
        }

        if !is_valid_email(self.email.trim()) {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
