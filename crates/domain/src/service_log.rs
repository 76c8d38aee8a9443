// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Maintenance service log types.

use crate::error::DomainError;
use crate::types::{ServiceLogId, VehicleId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Classification of a maintenance service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceCategory {
    /// Scheduled, planned maintenance.
    Preventative,
    /// Repair in response to a failure.
    Reactive,
}

impl ServiceCategory {
    /// Returns the string representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preventative => "Preventative",
            Self::Reactive => "Reactive",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Preventative" => Ok(Self::Preventative),
            "Reactive" => Ok(Self::Reactive),
            _ => Err(DomainError::InvalidStatus {
                kind: "service category",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a service log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// Work is outstanding; the vehicle is held in the shop.
    Open,
    /// Work is finished. Terminal.
    Completed,
}

impl ServiceStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A maintenance service record for one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLog {
    /// The log identifier.
    pub id: ServiceLogId,
    /// The vehicle being serviced.
    pub vehicle_id: VehicleId,
    /// Short description of the work, e.g. "Engine Oil Change".
    pub service_type: String,
    /// Preventative or reactive classification.
    pub category: ServiceCategory,
    /// Free-text detail.
    pub description: String,
    /// Cost in whole currency units.
    pub cost: u32,
    /// Open or completed.
    pub status: ServiceStatus,
    /// Date the log was opened.
    pub date_created: Date,
    /// Date the work was completed, `None` while open.
    pub date_completed: Option<Date>,
}

impl ServiceLog {
    /// Creates a new open service log.
    #[must_use]
    pub const fn new(
        id: ServiceLogId,
        vehicle_id: VehicleId,
        service_type: String,
        category: ServiceCategory,
        description: String,
        cost: u32,
        date_created: Date,
    ) -> Self {
        Self {
            id,
            vehicle_id,
            service_type,
            category,
            description,
            cost,
            status: ServiceStatus::Open,
            date_created,
            date_completed: None,
        }
    }
}
