//! User record model.
//!
//! A [`User`] can only be obtained through [`User::new`], which enforces every
//! field constraint. Once built, a user is an immutable value: fields are read
//! through accessors and never mutated in place.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"
    )
    .expect("valid email regex");
}

/// Constraint violated while building a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("age must be greater than or equal to 0, got {0}")]
    NegativeAge(i64),

    #[error("age {0} is out of range")]
    AgeOutOfRange(i64),
}

/// One person enrolled in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    name: String,
    email: String,
    age: u32,
    team: String,
    /// Kept as text; expected as `YYYY-MM-DD` but not calendar-checked.
    start_date: String,
}

impl User {
    /// Builds a validated user.
    ///
    /// Text fields are taken as given; callers trim them beforehand.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
        team: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Result<Self, UserError> {
        let name = non_empty("name", name.into())?;
        let email = non_empty("email", email.into())?;
        let team = non_empty("team", team.into())?;
        let start_date = non_empty("start_date", start_date.into())?;

        if !EMAIL_RE.is_match(&email) {
            return Err(UserError::InvalidEmail(email));
        }
        if age < 0 {
            return Err(UserError::NegativeAge(age));
        }
        let age = u32::try_from(age).map_err(|_| UserError::AgeOutOfRange(age))?;

        Ok(Self {
            name,
            email,
            age,
            team,
            start_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, UserError> {
    if value.trim().is_empty() {
        Err(UserError::EmptyField(field))
    } else {
        Ok(value)
    }
}
