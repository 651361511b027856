use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::entities::person::PersonFields;

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2,3}-\d+$").expect("static pattern"));

const MIN_NAME_LEN: usize = 3;
const MIN_NUMBER_LEN: usize = 8;

/// Reasons a person payload is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonValidationError {
    #[error("name missing")]
    NameMissing,
    #[error("number missing")]
    NumberMissing,
    #[error("name must not contain NUL characters")]
    NameHasNul,
    #[error("number must not contain NUL characters")]
    NumberHasNul,
    #[error("name must be at least 3 characters long")]
    NameTooShort,
    #[error("number must be formatted like 09-1234556 or 040-22334455")]
    NumberMalformed,
}

/// Enforces the field rules every persisted person must satisfy.
///
/// Presence of `name` and `number` is always required. In strict mode the
/// name needs a minimum length and the number must look like
/// `<2-3 digit area code>-<digits>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonValidator {
    strict: bool,
}

impl PersonValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Check raw request fields; `name` is checked before `number`.
    pub fn validate(
        &self,
        name: Option<&str>,
        number: Option<&str>,
    ) -> Result<PersonFields, PersonValidationError> {
        // Step 1: Presence checks, in the documented order.
        let name = name
            .filter(|v| !v.trim().is_empty())
            .ok_or(PersonValidationError::NameMissing)?;
        let number = number
            .filter(|v| !v.trim().is_empty())
            .ok_or(PersonValidationError::NumberMissing)?;

        // Step 2: Postgres TEXT cannot store 0x00.
        if name.contains('\0') {
            return Err(PersonValidationError::NameHasNul);
        }
        if number.contains('\0') {
            return Err(PersonValidationError::NumberHasNul);
        }

        // Step 3: Format checks.
        if self.strict {
            if name.chars().count() < MIN_NAME_LEN {
                return Err(PersonValidationError::NameTooShort);
            }
            if number.chars().count() < MIN_NUMBER_LEN || !NUMBER_PATTERN.is_match(number) {
                return Err(PersonValidationError::NumberMalformed);
            }
        }

        Ok(PersonFields {
            name: name.to_string(),
            number: number.to_string(),
        })
    }
}
