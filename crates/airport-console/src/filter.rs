//! In-memory filters behind the console screens.
//!
//! Each screen holds a snapshot and narrows it with a search box and a
//! selector. Filters borrow from the snapshot and preserve its order.

use crate::models::{
    CrewMember, CrewRole, Employee, Flight, FlightStatus, PassengerSummary, HEAD_OF_STAFF, SECURITY,
};

/// Job titles hidden from the administration screen. Crew and security are
/// managed elsewhere and the head of staff is the console's own user.
pub const ADMIN_HIDDEN_TITLES: &[&str] = &[
    HEAD_OF_STAFF,
    "Pilot",
    SECURITY,
    "Flight Attendant",
];

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Flight schedule screen: status tab plus search over flight number and airline.
///
/// `status = None` shows every tab.
#[must_use]
pub fn flights<'a>(
    snapshot: &'a [Flight],
    status: Option<FlightStatus>,
    search: &str,
) -> Vec<&'a Flight> {
    let needle = search.trim().to_lowercase();
    snapshot
        .iter()
        .filter(|flight| status.is_none() || flight.status == status)
        .filter(|flight| {
            needle.is_empty()
                || contains_ci(&flight.flight_no, &needle)
                || flight
                    .airline_name
                    .as_deref()
                    .is_some_and(|name| contains_ci(name, &needle))
        })
        .collect()
}

/// Crew screen: search over crew id, employee name and flight number,
/// narrowed to one flight when `flight_no` is set.
#[must_use]
pub fn crew<'a>(
    snapshot: &'a [CrewMember],
    search: &str,
    flight_no: Option<&str>,
) -> Vec<&'a CrewMember> {
    let needle = search.trim().to_lowercase();
    snapshot
        .iter()
        .filter(|member| flight_no.is_none() || member.flight_no.as_deref() == flight_no)
        .filter(|member| {
            needle.is_empty()
                || member.crew_id.to_string().contains(&needle)
                || member
                    .employee_name
                    .as_deref()
                    .is_some_and(|name| contains_ci(name, &needle))
                || member
                    .assigned_flight()
                    .is_some_and(|no| contains_ci(no, &needle))
        })
        .collect()
}

/// Administration screen: non-crew, non-security staff, searchable by id,
/// name and job title, optionally narrowed to one job title.
#[must_use]
pub fn administration<'a>(
    snapshot: &'a [Employee],
    search: &str,
    job_title: Option<&str>,
) -> Vec<&'a Employee> {
    let needle = search.trim().to_lowercase();
    snapshot
        .iter()
        .filter(|employee| {
            !ADMIN_HIDDEN_TITLES
                .iter()
                .any(|hidden| employee.has_title(hidden))
        })
        .filter(|employee| job_title.is_none() || employee.job_title.as_deref() == job_title)
        .filter(|employee| {
            needle.is_empty()
                || employee.employee_id.to_string().contains(&needle)
                || contains_ci(&employee.display_name(), &needle)
                || employee
                    .job_title
                    .as_deref()
                    .is_some_and(|title| contains_ci(title, &needle))
        })
        .collect()
}

/// Employees eligible for crew duty (pilots and flight attendants).
#[must_use]
pub fn crew_eligible(snapshot: &[Employee]) -> Vec<&Employee> {
    snapshot
        .iter()
        .filter(|employee| {
            [CrewRole::Pilot, CrewRole::FlightAttendant]
                .iter()
                .any(|role| employee.has_title(role.job_title()))
        })
        .collect()
}

/// Order a manifest with normal passengers first, then flagged ones.
///
/// The relative order inside each group is kept.
#[must_use]
pub fn normal_first(mut manifest: Vec<PassengerSummary>) -> Vec<PassengerSummary> {
    manifest.sort_by_key(|row| !row.status.is_normal());
    manifest
}

/// Split a manifest into `(normal, flagged)`.
#[must_use]
pub fn partition_flagged(
    manifest: &[PassengerSummary],
) -> (Vec<&PassengerSummary>, Vec<&PassengerSummary>) {
    manifest.iter().partition(|row| row.status.is_normal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PassengerStatus;

    fn flight(no: &str, airline: &str, status: FlightStatus) -> Flight {
        let mut flight = Flight::new(no, "BLR", 1);
        flight.airline_name = Some(airline.to_string());
        flight.status = Some(status);
        flight
    }

    fn employee(id: i64, name: &str, title: &str) -> Employee {
        let mut employee = Employee::new(id, name, "X", "BLR");
        employee.employee_name = Some(name.to_string());
        employee.job_title = Some(title.to_string());
        employee
    }

    fn summary(id: i64, status: &str) -> PassengerSummary {
        PassengerSummary {
            passenger_id: id,
            passenger_name: None,
            status: PassengerStatus::from(status),
            baggage_weight: None,
            baggage_id: None,
            ticket_id: None,
        }
    }

    #[test]
    fn test_flights_by_tab_and_search() {
        let snapshot = vec![
            flight("6E100", "IndiGo", FlightStatus::Departure),
            flight("AI202", "Air India", FlightStatus::Arrival),
            flight("6E300", "IndiGo", FlightStatus::Arrival),
        ];

        let departures = flights(&snapshot, Some(FlightStatus::Departure), "");
        assert_eq!(departures.len(), 1);

        let indigo_arrivals = flights(&snapshot, Some(FlightStatus::Arrival), "indigo");
        assert_eq!(indigo_arrivals.len(), 1);
        assert_eq!(indigo_arrivals[0].flight_no, "6E300");

        let by_number = flights(&snapshot, None, "ai2");
        assert_eq!(by_number.len(), 1);
        assert_eq!(flights(&snapshot, None, "").len(), 3);
    }

    #[test]
    fn test_crew_search_and_flight_selector() {
        let mut asha = CrewMember::new(12, 1, CrewRole::FlightAttendant);
        asha.employee_name = Some("Asha Rao".to_string());
        asha.flight_no = Some("AI202".to_string());
        let mut vikram = CrewMember::new(3, 2, CrewRole::Pilot);
        vikram.employee_name = Some("Vikram Sen".to_string());
        let snapshot = vec![asha, vikram];

        assert_eq!(crew(&snapshot, "asha", None).len(), 1);
        assert_eq!(crew(&snapshot, "12", None).len(), 1);
        assert_eq!(crew(&snapshot, "ai202", None).len(), 1);
        assert_eq!(crew(&snapshot, "", Some("AI202")).len(), 1);
        assert_eq!(crew(&snapshot, "vikram", Some("AI202")).len(), 0);
        assert_eq!(crew(&snapshot, "", None).len(), 2);
    }

    #[test]
    fn test_administration_hides_crew_and_security() {
        let snapshot = vec![
            employee(1, "Head", HEAD_OF_STAFF),
            employee(2, "Pilot Pat", "Pilot"),
            employee(3, "Guard Gil", SECURITY),
            employee(4, "Cabin Cam", "Flight Attendant"),
            employee(5, "Engineer Eva", "Ground Engineer"),
            employee(6, "Doctor Dev", "Medical staff"),
        ];

        let visible = administration(&snapshot, "", None);
        let ids: Vec<i64> = visible.iter().map(|e| e.employee_id).collect();
        assert_eq!(ids, vec![5, 6]);

        assert_eq!(administration(&snapshot, "engineer", None).len(), 1);
        assert_eq!(administration(&snapshot, "", Some("Medical staff")).len(), 1);
        assert_eq!(administration(&snapshot, "6", None).len(), 1);
    }

    #[test]
    fn test_crew_eligible() {
        let snapshot = vec![
            employee(1, "Pilot Pat", "Pilot"),
            employee(2, "Cabin Cam", "Flight Attendant"),
            employee(3, "Engineer Eva", "Ground Engineer"),
        ];
        let eligible = crew_eligible(&snapshot);
        assert_eq!(eligible.len(), 2);
    }

    #[test]
    fn test_normal_first_is_stable() {
        let manifest = vec![
            summary(1, "Flagged"),
            summary(2, "Normal"),
            summary(3, "Illness"),
            summary(4, "normal"),
        ];
        let ordered: Vec<i64> = normal_first(manifest)
            .iter()
            .map(|row| row.passenger_id)
            .collect();
        assert_eq!(ordered, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_partition_flagged() {
        let manifest = vec![summary(1, "Normal"), summary(2, "Flagged")];
        let (normal, flagged) = partition_flagged(&manifest);
        assert_eq!(normal.len(), 1);
        assert_eq!(flagged[0].passenger_id, 2);
    }
}
