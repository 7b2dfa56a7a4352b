//! Crew roster guard.

use std::fmt;

use serde::Serialize;

use crate::models::{CrewMember, CrewRole};

/// Maximum number of pilots on one flight.
pub const MAX_PILOTS: usize = 2;

/// Maximum number of flight attendants on one flight.
pub const MAX_ATTENDANTS: usize = 3;

/// Why an assignment was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterRejection {
    /// The flight already has [`MAX_PILOTS`] pilots.
    PilotCeilingReached,
    /// The flight already has [`MAX_ATTENDANTS`] attendants.
    AttendantCeilingReached,
}

impl fmt::Display for RosterRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PilotCeilingReached => f.write_str("pilot ceiling reached"),
            Self::AttendantCeilingReached => f.write_str("attendant ceiling reached"),
        }
    }
}

/// Per-role head count for one flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RosterCounts {
    /// Pilots assigned.
    pub pilots: usize,
    /// Flight attendants assigned.
    pub attendants: usize,
}

impl RosterCounts {
    /// Count the crew on `roster` assigned to `flight_no`.
    #[must_use]
    pub fn for_flight(roster: &[CrewMember], flight_no: &str) -> Self {
        roster
            .iter()
            .filter(|member| member.assigned_flight() == Some(flight_no))
            .fold(Self::default(), |mut counts, member| {
                match member.crew_role {
                    CrewRole::Pilot => counts.pilots += 1,
                    CrewRole::FlightAttendant => counts.attendants += 1,
                }
                counts
            })
    }

    /// Whether one more member of `role` would still fit.
    ///
    /// # Errors
    ///
    /// Returns the ceiling that would be exceeded.
    pub fn admit(&self, role: CrewRole) -> Result<(), RosterRejection> {
        match role {
            CrewRole::Pilot if self.pilots >= MAX_PILOTS => {
                Err(RosterRejection::PilotCeilingReached)
            }
            CrewRole::FlightAttendant if self.attendants >= MAX_ATTENDANTS => {
                Err(RosterRejection::AttendantCeilingReached)
            }
            _ => Ok(()),
        }
    }
}

/// Decide whether a crew member with `role` may join `target_flight_no`.
///
/// Only the ceilings are checked. A flight with no pilot or no attendant is
/// not flagged here.
///
/// # Errors
///
/// Returns [`RosterRejection`] when the flight already holds the maximum for
/// that role.
pub fn validate_assignment(
    roster: &[CrewMember],
    target_flight_no: &str,
    role: CrewRole,
) -> Result<(), RosterRejection> {
    RosterCounts::for_flight(roster, target_flight_no).admit(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crew(id: i64, role: CrewRole, flight: Option<&str>) -> CrewMember {
        let mut member = CrewMember::new(id, id + 100, role);
        member.flight_no = flight.map(str::to_string);
        member
    }

    fn manifest(pilots: usize, attendants: usize, flight: &str) -> Vec<CrewMember> {
        let mut out = Vec::new();
        let mut id = 0;
        for _ in 0..pilots {
            id += 1;
            out.push(crew(id, CrewRole::Pilot, Some(flight)));
        }
        for _ in 0..attendants {
            id += 1;
            out.push(crew(id, CrewRole::FlightAttendant, Some(flight)));
        }
        out
    }

    #[test]
    fn test_third_pilot_is_rejected() {
        let roster = manifest(2, 0, "6E100");
        assert_eq!(
            validate_assignment(&roster, "6E100", CrewRole::Pilot),
            Err(RosterRejection::PilotCeilingReached)
        );
    }

    #[test]
    fn test_pilot_ceiling_ignores_attendants() {
        let roster = manifest(2, 3, "6E100");
        assert_eq!(
            validate_assignment(&roster, "6E100", CrewRole::Pilot),
            Err(RosterRejection::PilotCeilingReached)
        );
        let roster = manifest(1, 3, "6E100");
        assert!(validate_assignment(&roster, "6E100", CrewRole::Pilot).is_ok());
    }

    #[test]
    fn test_attendant_ceiling() {
        let two = manifest(0, 2, "6E100");
        assert!(validate_assignment(&two, "6E100", CrewRole::FlightAttendant).is_ok());

        let three = manifest(0, 3, "6E100");
        assert_eq!(
            validate_assignment(&three, "6E100", CrewRole::FlightAttendant),
            Err(RosterRejection::AttendantCeilingReached)
        );
    }

    #[test]
    fn test_other_flights_do_not_count() {
        let mut roster = manifest(2, 3, "AI202");
        roster.push(crew(50, CrewRole::Pilot, None));
        assert!(validate_assignment(&roster, "6E100", CrewRole::Pilot).is_ok());
        assert!(validate_assignment(&roster, "6E100", CrewRole::FlightAttendant).is_ok());
    }

    #[test]
    fn test_empty_flight_is_accepted() {
        assert!(validate_assignment(&[], "6E100", CrewRole::Pilot).is_ok());
        assert!(validate_assignment(&[], "6E100", CrewRole::FlightAttendant).is_ok());
    }

    #[test]
    fn test_counts_for_flight() {
        let mut roster = manifest(1, 2, "6E100");
        roster.push(crew(70, CrewRole::FlightAttendant, Some("NULL")));
        let counts = RosterCounts::for_flight(&roster, "6E100");
        assert_eq!(
            counts,
            RosterCounts {
                pilots: 1,
                attendants: 2
            }
        );
    }

    #[test]
    fn test_order_independent_and_pure() {
        let mut roster = manifest(2, 1, "6E100");
        roster.push(crew(80, CrewRole::Pilot, Some("AI202")));
        let before = roster.clone();

        let first = validate_assignment(&roster, "6E100", CrewRole::Pilot);
        assert_eq!(roster, before);
        assert_eq!(first, validate_assignment(&roster, "6E100", CrewRole::Pilot));

        roster.reverse();
        assert_eq!(first, validate_assignment(&roster, "6E100", CrewRole::Pilot));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            RosterRejection::PilotCeilingReached.to_string(),
            "pilot ceiling reached"
        );
        assert_eq!(
            RosterRejection::AttendantCeilingReached.to_string(),
            "attendant ceiling reached"
        );
    }
}
