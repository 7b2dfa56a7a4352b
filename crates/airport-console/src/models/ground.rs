//! Ground-operations staffing records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a ground assignment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundTaskKind {
    /// Medical staff attending an ill passenger.
    Medical,
    /// Ground engineer servicing an arriving flight.
    Engineer,
}

impl fmt::Display for GroundTaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Medical => write!(f, "medical"),
            Self::Engineer => write!(f, "engineer"),
        }
    }
}

impl FromStr for GroundTaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "medical" => Ok(Self::Medical),
            "engineer" => Ok(Self::Engineer),
            other => Err(format!("unknown ground task kind: {other}")),
        }
    }
}

/// A staff member dispatched to a passenger or a flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundAssignment {
    /// Identifier assigned by the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Kind of task.
    pub kind: GroundTaskKind,
    /// The dispatched employee.
    pub employee_id: i64,
    /// Passenger attended, for medical tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_id: Option<i64>,
    /// Flight serviced, for engineering tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_no: Option<String>,
    /// When the assignment was made.
    pub assigned_at: DateTime<Utc>,
}

impl GroundAssignment {
    /// Medical staff attending a passenger.
    #[must_use]
    pub fn medical(employee_id: i64, passenger_id: i64) -> Self {
        Self {
            id: None,
            kind: GroundTaskKind::Medical,
            employee_id,
            passenger_id: Some(passenger_id),
            flight_no: None,
            assigned_at: Utc::now(),
        }
    }

    /// Ground engineer servicing a flight.
    #[must_use]
    pub fn engineer(employee_id: i64, flight_no: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: GroundTaskKind::Engineer,
            employee_id,
            passenger_id: None,
            flight_no: Some(flight_no.into()),
            assigned_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let medical = GroundAssignment::medical(7, 42);
        assert_eq!(medical.kind, GroundTaskKind::Medical);
        assert_eq!(medical.passenger_id, Some(42));
        assert!(medical.flight_no.is_none());

        let engineer = GroundAssignment::engineer(8, "AI202");
        assert_eq!(engineer.kind, GroundTaskKind::Engineer);
        assert_eq!(engineer.flight_no.as_deref(), Some("AI202"));
    }

    #[test]
    fn test_kind_round_trip_text() {
        for kind in [GroundTaskKind::Medical, GroundTaskKind::Engineer] {
            assert_eq!(kind.to_string().parse::<GroundTaskKind>(), Ok(kind));
        }
    }
}
