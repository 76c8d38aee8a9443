// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Injected identifier generation.
//!
//! Identifier assignment is a capability handed to the lifecycle manager,
//! not something it invents ad hoc. Tests use [`SequentialIds`] to assert
//! deterministic identifiers; interactive surfaces may supply a randomized
//! provider instead.

use crate::state::State;
use fleet_dispatch_domain::{ExpenseId, ServiceLogId, TripId, VehicleId};

/// A source of fresh entity identifiers.
pub trait IdProvider {
    /// Returns the next trip identifier.
    fn next_trip_id(&mut self) -> TripId;

    /// Returns the next vehicle identifier.
    fn next_vehicle_id(&mut self) -> VehicleId;

    /// Returns the next service log identifier.
    fn next_service_log_id(&mut self) -> ServiceLogId;

    /// Returns the next expense identifier.
    fn next_expense_id(&mut self) -> ExpenseId;
}

/// Monotonic counter-based identifier provider.
///
/// Produces `T1, T2, ...`, `V1, V2, ...`, `LOG-1, LOG-2, ...` and
/// `EXP-1, EXP-2, ...`. Deterministic, so tests can assert exact ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    next_trip: u64,
    next_vehicle: u64,
    next_service_log: u64,
    next_expense: u64,
}

impl SequentialIds {
    /// Creates a provider starting every counter at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_trip: 1,
            next_vehicle: 1,
            next_service_log: 1,
            next_expense: 1,
        }
    }

    /// Creates a provider whose counters continue after the highest numeric
    /// suffix already present in `state`, so freshly generated identifiers
    /// never collide with loaded or seeded data.
    #[must_use]
    pub fn continuing_from(state: &State) -> Self {
        let next = |max: u64| max + 1;
        Self {
            next_trip: next(highest_suffix(state.trips.iter().map(|t| t.id.value()))),
            next_vehicle: next(highest_suffix(state.vehicles.iter().map(|v| v.id.value()))),
            next_service_log: next(highest_suffix(
                state.service_logs.iter().map(|l| l.id.value()),
            )),
            next_expense: next(highest_suffix(state.expenses.iter().map(|e| e.id.value()))),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIds {
    fn next_trip_id(&mut self) -> TripId {
        let id = TripId::new(&format!("T{}", self.next_trip));
        self.next_trip += 1;
        id
    }

    fn next_vehicle_id(&mut self) -> VehicleId {
        let id = VehicleId::new(&format!("V{}", self.next_vehicle));
        self.next_vehicle += 1;
        id
    }

    fn next_service_log_id(&mut self) -> ServiceLogId {
        let id = ServiceLogId::new(&format!("LOG-{}", self.next_service_log));
        self.next_service_log += 1;
        id
    }

    fn next_expense_id(&mut self) -> ExpenseId {
        let id = ExpenseId::new(&format!("EXP-{}", self.next_expense));
        self.next_expense += 1;
        id
    }
}

/// The highest trailing decimal number among the given identifier values, or
/// 0 when none carries one.
fn highest_suffix<'a>(values: impl Iterator<Item = &'a str>) -> u64 {
    values.filter_map(trailing_number).max().unwrap_or(0)
}

fn trailing_number(value: &str) -> Option<u64> {
    let start = value
        .rfind(|c: char| !c.is_ascii_digit())
        .map_or(0, |i| i + 1);
    value.get(start..).and_then(|digits| digits.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_deterministic() {
        let mut ids = SequentialIds::new();

        assert_eq!(ids.next_trip_id().value(), "T1");
        assert_eq!(ids.next_trip_id().value(), "T2");
        assert_eq!(ids.next_vehicle_id().value(), "V1");
        assert_eq!(ids.next_service_log_id().value(), "LOG-1");
        assert_eq!(ids.next_expense_id().value(), "EXP-1");
    }

    #[test]
    fn test_trailing_number_extraction() {
        assert_eq!(trailing_number("T12"), Some(12));
        assert_eq!(trailing_number("LOG-003"), Some(3));
        assert_eq!(trailing_number("TRIP-A9C2"), Some(2));
        assert_eq!(trailing_number("no-digits"), None);
        assert_eq!(trailing_number(""), None);
    }
}
