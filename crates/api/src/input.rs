// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Raw form-input coercion.
//!
//! The presentation boundary supplies every field as a raw string. This
//! module coerces those strings into typed values, so any unexpected input
//! becomes a named validation error instead of an unhandled failure.

use thiserror::Error;

/// Input coercion errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The field is absent or empty.
    #[error("{field} is required")]
    Missing {
        /// The field name.
        field: &'static str,
    },

    /// The field is not a non-negative whole number.
    #[error("{field} must be a non-negative whole number, got '{value}'")]
    NotANumber {
        /// The field name.
        field: &'static str,
        /// The raw value supplied.
        value: String,
    },

    /// The field must be greater than zero.
    #[error("{field} must be a positive number")]
    NotPositive {
        /// The field name.
        field: &'static str,
    },
}

/// Coerces a required free-text field, trimming surrounding whitespace.
///
/// # Errors
///
/// Returns `InputError::Missing` if the field is empty after trimming.
pub fn required_text(field: &'static str, raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing { field });
    }
    Ok(trimmed.to_string())
}

/// Coerces a required non-negative whole number.
///
/// # Errors
///
/// Returns `InputError::Missing` for an empty field and
/// `InputError::NotANumber` for anything that does not parse (including
/// negative values).
pub fn required_number(field: &'static str, raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing { field });
    }
    trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        value: trimmed.to_string(),
    })
}

/// Coerces a required strictly-positive whole number.
///
/// # Errors
///
/// As [`required_number`], plus `InputError::NotPositive` for zero.
pub fn required_positive(field: &'static str, raw: &str) -> Result<u32, InputError> {
    let value = required_number(field, raw)?;
    if value == 0 {
        return Err(InputError::NotPositive { field });
    }
    Ok(value)
}

/// Coerces an optional non-negative whole number, defaulting to zero when
/// the field is empty.
///
/// # Errors
///
/// Returns `InputError::NotANumber` for anything non-empty that does not
/// parse.
pub fn optional_number(field: &'static str, raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        value: trimmed.to_string(),
    })
}
