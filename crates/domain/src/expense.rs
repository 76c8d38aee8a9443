// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Trip expense records.

use crate::types::{DriverId, ExpenseId, TripId};
use serde::{Deserialize, Serialize};
use time::Date;

/// Review status of an expense record. Informational only; no lifecycle
/// rules hang off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    /// Logged, awaiting review.
    Pending,
    /// Reviewed and approved.
    Approved,
    /// Settled.
    Completed,
}

impl ExpenseStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operating expense attributed to a trip and its driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The expense identifier.
    pub id: ExpenseId,
    /// The trip this expense belongs to.
    pub trip_id: TripId,
    /// The driver the expense is attributed to, snapshotted from the trip at
    /// logging time.
    pub driver_id: DriverId,
    /// Distance covered, in miles. Zero when the trip has no recorded end
    /// odometer yet.
    pub distance: u32,
    /// Fuel cost in whole currency units.
    pub fuel_cost: u32,
    /// Miscellaneous cost in whole currency units.
    pub misc_expense: u32,
    /// Review status.
    pub status: ExpenseStatus,
    /// Date the expense was logged.
    pub date: Date,
}

impl Expense {
    /// Total cost of this expense record.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.fuel_cost) + u64::from(self.misc_expense)
    }
}
