use std::{fmt, str::FromStr};

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

const MAX_INSTITUTE_NUMBER_LEN: usize = 6;
// School years start on the first of September.
const FIRST_MONTH_OF_SCHOOLYEAR: u32 = 9;

/// Number of the institute (school) a request is scoped to.
///
/// Every request carries exactly one of these in its `InstituteNo` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstituteNumber(String);

impl InstituteNumber {
    pub fn new(number: &str) -> Result<Self, ParseIdError> {
        let trimmed = number.trim();
        if trimmed.is_empty()
            || trimmed.len() > MAX_INSTITUTE_NUMBER_LEN
            || !trimmed.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseIdError::InvalidInstituteNumber {
                given: number.to_owned(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for InstituteNumber {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for InstituteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A school year, identified by the calendar year it starts in.
///
/// Renders as the starting year (e.g. `2023` for 2023-24), which is what the `schoolYear`
/// query parameter expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Schoolyear(i32);

impl Schoolyear {
    pub fn new(start_year: i32) -> Self {
        Self(start_year)
    }

    /// The school year that is currently running, in local time.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// The school year `date` falls in.
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= FIRST_MONTH_OF_SCHOOLYEAR {
            Self(date.year())
        } else {
            Self(date.year() - 1)
        }
    }

    /// Resolve an optional school year, `None` meaning the current one.
    pub fn or_current(schoolyear: Option<Schoolyear>) -> Self {
        schoolyear.unwrap_or_else(Self::current)
    }

    pub fn start_year(&self) -> i32 {
        self.0
    }

    pub fn end_year(&self) -> i32 {
        self.0 + 1
    }
}

impl From<i32> for Schoolyear {
    fn from(start_year: i32) -> Self {
        Self::new(start_year)
    }
}

impl FromStr for Schoolyear {
    type Err = ParseIdError;

    /// Accepts `2023`, `2023-24`, `2023-2024` and `2023/24`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseIdError::InvalidSchoolyear {
            given: s.to_owned(),
        };

        let trimmed = s.trim();
        let (start, end) = match trimmed.split_once(['-', '/']) {
            Some((start, end)) => (start, Some(end)),
            None => (trimmed, None),
        };

        if start.len() != 4 || !start.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let start: i32 = start.parse().map_err(|_| invalid())?;

        if let Some(end) = end {
            if !end.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            let follows = match end.len() {
                2 => end.parse::<i32>().ok() == Some((start + 1) % 100),
                4 => end.parse::<i32>().ok() == Some(start + 1),
                _ => false,
            };
            if !follows {
                return Err(invalid());
            }
        }

        Ok(Self(start))
    }
}

impl fmt::Display for Schoolyear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error when parsing an identifier.
#[derive(Debug, Error)]
pub enum ParseIdError {
    /// Institute numbers consist of at most six digits.
    #[error("`{given}` is an invalid institute number")]
    InvalidInstituteNumber { given: String },
    #[error("`{given}` is an invalid school year, expected a form like `2023` or `2023-24`")]
    InvalidSchoolyear { given: String },
}
