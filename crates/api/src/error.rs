// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::input::InputError;
use fleet_dispatch::CoreError;
use fleet_dispatch_domain::DomainError;
use fleet_dispatch_store::StoreError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Every variant carries a message the presentation surface can
/// show verbatim; no lower-layer error leaks through untranslated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        let field = match err {
            InputError::Missing { field }
            | InputError::NotANumber { field, .. }
            | InputError::NotPositive { field } => field,
        };
        Self::InvalidInput {
            field: String::from(field),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingField { field } => ApiError::InvalidInput {
            field: String::from(field),
            message: format!("{field} is required"),
        },
        DomainError::InvalidWeight(msg) => ApiError::InvalidInput {
            field: String::from("weight"),
            message: msg,
        },
        DomainError::InvalidOdometer(msg) => ApiError::InvalidInput {
            field: String::from("odometer"),
            message: msg,
        },
        DomainError::CapacityExceeded {
            cargo_weight,
            max_capacity,
            vehicle,
        } => ApiError::DomainRuleViolation {
            rule: String::from("capacity_limit"),
            message: format!(
                "Cargo weight ({cargo_weight} lbs) exceeds max capacity of {vehicle} ({max_capacity} lbs)"
            ),
        },
        DomainError::InvalidTransition { from, to, reason } => ApiError::DomainRuleViolation {
            rule: String::from("lifecycle"),
            message: format!("Cannot move from '{from}' to '{to}': {reason}"),
        },
        DomainError::VehicleNotAvailable { vehicle_id, status } => ApiError::DomainRuleViolation {
            rule: String::from("vehicle_availability"),
            message: format!("Vehicle {vehicle_id} is not available (status: {status})"),
        },
        DomainError::DriverNotEligible { driver_id, reason } => ApiError::DomainRuleViolation {
            rule: String::from("driver_eligibility"),
            message: format!("Driver {driver_id} is not eligible: {reason}"),
        },
        DomainError::DuplicatePlate { plate } => ApiError::DomainRuleViolation {
            rule: String::from("unique_plate"),
            message: format!("License plate '{plate}' already exists in the registry"),
        },
        DomainError::InvalidStatus { kind, value } => ApiError::InvalidInput {
            field: String::from(kind),
            message: format!("Unknown {kind}: '{value}'"),
        },
        DomainError::VehicleNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Vehicle"),
            message: format!("Vehicle '{id}' does not exist"),
        },
        DomainError::DriverNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Driver"),
            message: format!("Driver '{id}' does not exist"),
        },
        DomainError::TripNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Trip"),
            message: format!("Trip '{id}' does not exist"),
        },
        DomainError::ServiceLogNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Service log"),
            message: format!("Service log '{id}' does not exist"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a store error into an API error.
///
/// Rejections carry the underlying rule violation; persistence failures
/// surface as internal errors.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::Rejected(core_err) => translate_core_error(core_err),
        StoreError::Io { key, message } => ApiError::Internal {
            message: format!("Storage failure for '{key}': {message}"),
        },
        StoreError::Serialization { key, message } => ApiError::Internal {
            message: format!("Serialization failure for '{key}': {message}"),
        },
    }
}
