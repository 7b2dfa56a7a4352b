//! Console actions.
//!
//! Every mutating action follows the same order: fetch a fresh snapshot from
//! the store, run the relevant guard against it, and only then write. A
//! rejected action leaves the store untouched.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::flagging::{self, FlagOutcome, FlagReason};
use crate::ground_ops::{self, GroundBoard};
use crate::guard::{self, RosterCounts};
use crate::models::{
    CrewMember, CrewRole, Dataset, Employee, Flight, FlightRoute, GroundAssignment,
    PassengerStatus, PassengerSummary, StaffMember,
};
use crate::storage::{ImportSummary, Storage, StorageStats};
use crate::{filter, reports};

/// Time format used in gate rejection messages.
const GATE_TIME_FORMAT: &str = "%H:%M";

/// The administrative console over one store.
#[derive(Debug)]
pub struct Console {
    storage: Storage,
    default_airport_id: String,
}

impl Console {
    /// Create a console over `storage`. Records submitted without an airport
    /// are filed under `default_airport_id`.
    #[must_use]
    pub fn new(storage: Storage, default_airport_id: impl Into<String>) -> Self {
        Self {
            storage,
            default_airport_id: default_airport_id.into(),
        }
    }

    /// The underlying store.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Airport used for records that do not name one.
    #[must_use]
    pub fn default_airport_id(&self) -> &str {
        &self.default_airport_id
    }

    // === Flight schedule ===

    /// Every scheduled flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn flights(&self) -> Result<Vec<Flight>> {
        self.storage.flights()
    }

    /// Flight numbers with their cities.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn flight_routes(&self) -> Result<Vec<FlightRoute>> {
        Ok(self.storage.flights()?.iter().map(FlightRoute::from).collect())
    }

    /// Just the flight numbers.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn flight_numbers(&self) -> Result<Vec<String>> {
        Ok(self
            .storage
            .flights()?
            .into_iter()
            .map(|f| f.flight_no)
            .collect())
    }

    /// Schedule a flight after checking its gate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] without a flight number,
    /// [`Error::GateUnavailable`] when another flight holds the gate within
    /// 30 minutes, and [`Error::Conflict`] for a duplicate number.
    pub fn add_flight(&self, mut flight: Flight) -> Result<()> {
        flight.flight_no = flight.flight_no.trim().to_string();
        if flight.flight_no.is_empty() {
            return Err(Error::invalid_input("Please enter a flight number"));
        }
        if flight.airport_id.trim().is_empty() {
            flight.airport_id.clone_from(&self.default_airport_id);
        }

        let snapshot = self.storage.flights()?;
        if !guard::is_gate_available(&snapshot, flight.gate_no.as_deref(), flight.arrival_time) {
            let gate = flight.gate_no.clone().unwrap_or_default();
            let time = flight
                .arrival_time
                .map(|t| t.format(GATE_TIME_FORMAT).to_string())
                .unwrap_or_default();
            let booked = flight
                .arrival_time
                .and_then(|t| guard::find_conflict(&snapshot, &gate, t))
                .map(|f| f.flight_no.clone());
            warn!(flight_no = %flight.flight_no, %gate, %time, ?booked, "Gate unavailable");
            return Err(Error::GateUnavailable { gate, time });
        }

        self.storage.insert_flight(&flight)?;
        info!(flight_no = %flight.flight_no, gate = ?flight.gate_no, "Flight scheduled");
        Ok(())
    }

    /// Remove a flight from the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a blank number,
    /// [`Error::NotFound`] for an unknown one, and [`Error::Conflict`] while
    /// passengers are booked on it.
    pub fn delete_flight(&self, flight_no: &str) -> Result<()> {
        let flight_no = flight_no.trim();
        if flight_no.is_empty() {
            return Err(Error::invalid_input("Please enter a flight number"));
        }
        self.storage.delete_flight(flight_no)?;
        info!(flight_no, "Flight deleted");
        Ok(())
    }

    // === Administration ===

    /// Every employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn employees(&self) -> Result<Vec<Employee>> {
        self.storage.employees()
    }

    /// Mean salary over employees with a salary on record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn average_salary(&self) -> Result<f64> {
        Ok(reports::average_salary(&self.storage.employees()?))
    }

    /// Hire an employee.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when a name is missing and
    /// [`Error::Conflict`] for a duplicate id.
    pub fn add_employee(&self, mut employee: Employee) -> Result<()> {
        if employee.f_name.trim().is_empty() || employee.l_name.trim().is_empty() {
            return Err(Error::invalid_input(
                "Employee ID, first name and last name are required",
            ));
        }
        if employee.airport_id.trim().is_empty() {
            employee.airport_id.clone_from(&self.default_airport_id);
        }
        if employee.employee_name.is_none() {
            employee.employee_name = Some(employee.full_name());
        }

        self.storage.insert_employee(&employee)?;
        info!(employee_id = employee.employee_id, "Employee added");
        Ok(())
    }

    /// Remove an employee.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn delete_employee(&self, employee_id: i64) -> Result<()> {
        self.storage.delete_employee(employee_id)?;
        info!(employee_id, "Employee deleted");
        Ok(())
    }

    // === Crew ===

    /// The full roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn crew(&self) -> Result<Vec<CrewMember>> {
        self.storage.crew()
    }

    /// Pilots and flight attendants, for the crew picker.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn crew_eligible(&self) -> Result<Vec<StaffMember>> {
        let employees = self.storage.employees()?;
        Ok(filter::crew_eligible(&employees)
            .into_iter()
            .map(StaffMember::from)
            .collect())
    }

    /// Head count per flight for every flight with crew on it.
    ///
    /// These counts are informational; a flight without a pilot or an
    /// attendant is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn roster_counts(&self) -> Result<BTreeMap<String, RosterCounts>> {
        let roster = self.storage.crew()?;
        let flights: BTreeSet<&str> = roster.iter().filter_map(CrewMember::assigned_flight).collect();
        Ok(flights
            .into_iter()
            .map(|no| (no.to_string(), RosterCounts::for_flight(&roster, no)))
            .collect())
    }

    /// Register an employee as unassigned crew.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown employee and
    /// [`Error::Conflict`] if the crew id or employee is already on the roster.
    pub fn add_crew_member(&self, crew_id: i64, employee_id: i64, role: CrewRole) -> Result<()> {
        if self.storage.employee(employee_id)?.is_none() {
            return Err(Error::not_found("employee", employee_id));
        }
        self.storage
            .insert_crew(&CrewMember::new(crew_id, employee_id, role))?;
        info!(crew_id, employee_id, %role, "Crew member added");
        Ok(())
    }

    /// Put an unassigned crew member on a flight, within the roster ceilings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a blank flight number,
    /// [`Error::NotFound`] when the crew member is unknown or already
    /// assigned or the flight is unknown, and [`Error::CrewRejected`] when
    /// the flight is full for that role.
    pub fn assign_crew(&self, crew_id: i64, flight_no: &str) -> Result<()> {
        let flight_no = flight_no.trim();
        if flight_no.is_empty() {
            return Err(Error::invalid_input("Crew_ID and Flight_no are required"));
        }

        let roster = self.storage.crew()?;
        let member = roster
            .iter()
            .find(|m| m.crew_id == crew_id)
            .ok_or_else(|| Error::not_found("crew member", crew_id))?;
        if let Some(current) = member.assigned_flight() {
            debug!(crew_id, current, "Crew member already assigned");
            return Err(Error::not_found("unassigned crew member", crew_id));
        }
        if self.storage.flight(flight_no)?.is_none() {
            return Err(Error::not_found("flight", flight_no));
        }

        if let Err(reason) = guard::validate_assignment(&roster, flight_no, member.crew_role) {
            warn!(crew_id, flight_no, %reason, "Crew assignment rejected");
            return Err(Error::CrewRejected {
                flight_no: flight_no.to_string(),
                reason,
            });
        }

        if !self.storage.assign_crew(crew_id, flight_no)? {
            return Err(Error::not_found("unassigned crew member", crew_id));
        }
        info!(crew_id, flight_no, role = %member.crew_role, "Crew member assigned");
        Ok(())
    }

    /// Remove a crew record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn delete_crew(&self, crew_id: i64) -> Result<()> {
        self.storage.delete_crew(crew_id)?;
        info!(crew_id, "Crew member deleted");
        Ok(())
    }

    // === Passengers ===

    /// A flight's manifest, normal passengers first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn manifest(&self, flight_no: &str) -> Result<Vec<PassengerSummary>> {
        Ok(filter::normal_first(
            self.storage.passengers_for_flight(flight_no)?,
        ))
    }

    /// Set a passenger's status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown passenger.
    pub fn update_passenger_status(&self, passenger_id: i64, status: &PassengerStatus) -> Result<()> {
        self.storage.set_passenger_status(passenger_id, status)?;
        info!(passenger_id, %status, "Passenger status updated");
        Ok(())
    }

    /// Take a passenger off their flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown passenger.
    pub fn delete_passenger(&self, passenger_id: i64) -> Result<()> {
        self.storage.delete_passenger(passenger_id)?;
        info!(passenger_id, "Passenger removed");
        Ok(())
    }

    /// Resolve a passenger flag and apply the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown passenger.
    pub fn resolve_flag(&self, passenger_id: i64, reason: FlagReason) -> Result<FlagOutcome> {
        let outcome = flagging::resolve(reason);
        match &outcome {
            FlagOutcome::Remove => self.storage.delete_passenger(passenger_id)?,
            FlagOutcome::SetStatus { status } => {
                self.storage.set_passenger_status(passenger_id, status)?;
            }
        }
        info!(passenger_id, %reason, ?outcome, "Flag resolved");
        Ok(outcome)
    }

    // === Ground operations ===

    /// The ground-operations board.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn ground_board(&self) -> Result<GroundBoard> {
        Ok(ground_ops::board(
            &self.storage.employees()?,
            &self.storage.passengers()?,
            &self.storage.flights()?,
        ))
    }

    /// Dispatch medical staff to a passenger.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown passenger or employee and
    /// [`Error::InvalidInput`] when the employee is not medical staff.
    pub fn assign_medical(&self, passenger_id: i64, employee_id: i64) -> Result<GroundAssignment> {
        ground_ops::check_medical(
            &self.storage.employees()?,
            &self.storage.passengers()?,
            passenger_id,
            employee_id,
        )?;
        let mut assignment = GroundAssignment::medical(employee_id, passenger_id);
        assignment.id = Some(self.storage.insert_ground_assignment(&assignment)?);
        info!(passenger_id, employee_id, "Medical staff assigned");
        Ok(assignment)
    }

    /// Dispatch a ground engineer to a flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown flight or employee and
    /// [`Error::InvalidInput`] when the employee is not a ground engineer.
    pub fn assign_engineer(&self, flight_no: &str, employee_id: i64) -> Result<GroundAssignment> {
        ground_ops::check_engineer(
            &self.storage.employees()?,
            &self.storage.flights()?,
            flight_no,
            employee_id,
        )?;
        let mut assignment = GroundAssignment::engineer(employee_id, flight_no);
        assignment.id = Some(self.storage.insert_ground_assignment(&assignment)?);
        info!(flight_no, employee_id, "Ground engineer assigned");
        Ok(assignment)
    }

    /// Every dispatch made so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn ground_assignments(&self) -> Result<Vec<GroundAssignment>> {
        self.storage.ground_assignments()
    }

    // === Reports ===

    /// Flight traffic report.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn flight_traffic(&self) -> Result<reports::FlightTrafficReport> {
        Ok(reports::flight_traffic(&self.storage.flights()?))
    }

    /// Employee statistics report.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn employee_stats(&self) -> Result<reports::EmployeeStatsReport> {
        Ok(reports::employee_stats(&self.storage.employees()?))
    }

    /// Passenger traffic report.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn passenger_traffic(&self) -> Result<reports::PassengerTrafficReport> {
        Ok(reports::passenger_traffic(
            &self.storage.passengers()?,
            &self.storage.tickets()?,
            &self.storage.baggage()?,
        ))
    }

    // === Maintenance ===

    /// Load a dataset.
    ///
    /// # Errors
    ///
    /// Returns the first rejected record's error; nothing is written then.
    pub fn import(&self, dataset: &Dataset) -> Result<ImportSummary> {
        self.storage.import(dataset)
    }

    /// Store statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn stats(&self) -> Result<StorageStats> {
        self.storage.stats()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::guard::RosterRejection;
    use crate::models::{Baggage, Passenger, GROUND_ENGINEER};

    fn console() -> Console {
        Console::new(Storage::open_in_memory().unwrap(), "BLR")
    }

    fn at(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn flight(no: &str, gate: Option<&str>, time: Option<NaiveTime>) -> Flight {
        let mut flight = Flight::new(no, "", 1);
        flight.gate_no = gate.map(str::to_string);
        flight.arrival_time = time;
        flight
    }

    fn hire(console: &Console, id: i64, title: &str) {
        let mut employee = Employee::new(id, "E", format!("N{id}"), "BLR");
        employee.job_title = Some(title.to_string());
        console.add_employee(employee).unwrap();
    }

    fn crew_on(console: &Console, crew_id: i64, role: CrewRole, flight_no: &str) {
        hire(console, crew_id + 1000, role.job_title());
        console.add_crew_member(crew_id, crew_id + 1000, role).unwrap();
        console.assign_crew(crew_id, flight_no).unwrap();
    }

    #[test]
    fn test_add_flight_fills_default_airport() {
        let console = console();
        console
            .add_flight(flight("6E100", Some("G01"), at(10, 0)))
            .unwrap();
        assert_eq!(console.flights().unwrap()[0].airport_id, "BLR");
    }

    #[test]
    fn test_add_flight_rejects_blank_number() {
        let console = console();
        let err = console.add_flight(flight("  ", None, None)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_gate_conflict_leaves_store_untouched() {
        let console = console();
        console
            .add_flight(flight("6E100", Some("G01"), at(10, 0)))
            .unwrap();

        let err = console
            .add_flight(flight("6E200", Some("G01"), at(10, 29)))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Gate G01 is not available at 10:29. Please select another time or gate \
             (minimum 30 minutes gap required)."
        );
        assert_eq!(console.flight_numbers().unwrap(), vec!["6E100"]);

        console
            .add_flight(flight("6E200", Some("G01"), at(10, 30)))
            .unwrap();
        assert_eq!(console.flights().unwrap().len(), 2);
    }

    #[test]
    fn test_flight_without_gate_or_time_is_accepted() {
        let console = console();
        console
            .add_flight(flight("6E100", Some("G01"), at(10, 0)))
            .unwrap();
        console.add_flight(flight("6E101", None, at(10, 5))).unwrap();
        console
            .add_flight(flight("6E102", Some("G01"), None))
            .unwrap();
        assert_eq!(console.flights().unwrap().len(), 3);
    }

    #[test]
    fn test_duplicate_flight_is_conflict() {
        let console = console();
        console
            .add_flight(flight("6E100", Some("G01"), at(10, 0)))
            .unwrap();
        let err = console
            .add_flight(flight("6E100", Some("G09"), at(18, 0)))
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[test]
    fn test_flight_routes_and_delete() {
        let console = console();
        let mut f = flight("AI202", None, None);
        f.src_city = Some("Delhi".to_string());
        console.add_flight(f).unwrap();
        assert_eq!(
            console.flight_routes().unwrap()[0].src_city.as_deref(),
            Some("Delhi")
        );

        console.delete_flight("AI202").unwrap();
        assert!(console.delete_flight("AI202").unwrap_err().is_not_found());
        assert!(matches!(
            console.delete_flight(" "),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_add_employee_requires_names() {
        let console = console();
        let err = console
            .add_employee(Employee::new(1, "", "Kumar", "BLR"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(console.employees().unwrap().is_empty());
    }

    #[test]
    fn test_average_salary() {
        let console = console();
        for (id, salary) in [(1, Some(100)), (2, Some(300)), (3, None)] {
            let mut employee = Employee::new(id, "A", "B", "");
            employee.employee_salary = salary;
            console.add_employee(employee).unwrap();
        }
        assert!((console.average_salary().unwrap() - 200.0).abs() < f64::EPSILON);
        assert_eq!(console.employees().unwrap()[0].airport_id, "BLR");
    }

    #[test]
    fn test_add_crew_requires_employee() {
        let console = console();
        let err = console
            .add_crew_member(1, 42, CrewRole::Pilot)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_third_pilot_rejected_without_mutation() {
        let console = console();
        console.add_flight(flight("6E100", None, None)).unwrap();
        crew_on(&console, 1, CrewRole::Pilot, "6E100");
        crew_on(&console, 2, CrewRole::Pilot, "6E100");

        hire(&console, 1003, "Pilot");
        console.add_crew_member(3, 1003, CrewRole::Pilot).unwrap();
        let err = console.assign_crew(3, "6E100").unwrap_err();
        assert!(matches!(
            err,
            Error::CrewRejected {
                reason: RosterRejection::PilotCeilingReached,
                ..
            }
        ));
        assert!(console.storage().crew_member(3).unwrap().unwrap().is_unassigned());
    }

    #[test]
    fn test_attendant_ceiling() {
        let console = console();
        console.add_flight(flight("6E100", None, None)).unwrap();
        crew_on(&console, 1, CrewRole::FlightAttendant, "6E100");
        crew_on(&console, 2, CrewRole::FlightAttendant, "6E100");
        crew_on(&console, 3, CrewRole::FlightAttendant, "6E100");

        hire(&console, 1004, "Flight Attendant");
        console
            .add_crew_member(4, 1004, CrewRole::FlightAttendant)
            .unwrap();
        let err = console.assign_crew(4, "6E100").unwrap_err();
        assert!(err.is_validation_rejection());

        let counts = console.roster_counts().unwrap();
        assert_eq!(
            counts["6E100"],
            RosterCounts {
                pilots: 0,
                attendants: 3
            }
        );
    }

    #[test]
    fn test_roster_counts_per_flight() {
        let console = console();
        console.add_flight(flight("6E100", None, None)).unwrap();
        console.add_flight(flight("AI202", None, None)).unwrap();
        crew_on(&console, 1, CrewRole::Pilot, "6E100");
        crew_on(&console, 2, CrewRole::FlightAttendant, "6E100");
        crew_on(&console, 3, CrewRole::FlightAttendant, "6E100");
        crew_on(&console, 4, CrewRole::Pilot, "AI202");
        hire(&console, 1005, "Pilot");
        console.add_crew_member(5, 1005, CrewRole::Pilot).unwrap();

        let counts = console.roster_counts().unwrap();
        // Unassigned crew contribute no entry.
        assert_eq!(counts.len(), 2);
        assert_eq!(
            counts["6E100"],
            RosterCounts {
                pilots: 1,
                attendants: 2
            }
        );
        assert_eq!(
            counts["AI202"],
            RosterCounts {
                pilots: 1,
                attendants: 0
            }
        );
    }

    #[test]
    fn test_assign_crew_lookups() {
        let console = console();
        console.add_flight(flight("6E100", None, None)).unwrap();
        crew_on(&console, 1, CrewRole::Pilot, "6E100");

        assert!(console.assign_crew(99, "6E100").unwrap_err().is_not_found());
        // Already assigned.
        assert!(console.assign_crew(1, "6E100").unwrap_err().is_not_found());

        hire(&console, 1002, "Pilot");
        console.add_crew_member(2, 1002, CrewRole::Pilot).unwrap();
        assert!(console.assign_crew(2, "XX1").unwrap_err().is_not_found());
        assert!(matches!(
            console.assign_crew(2, ""),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_crew_eligible() {
        let console = console();
        hire(&console, 1, "Pilot");
        hire(&console, 2, "Flight Attendant");
        hire(&console, 3, GROUND_ENGINEER);
        let eligible = console.crew_eligible().unwrap();
        assert_eq!(eligible.len(), 2);
    }

    fn board_fixture() -> Console {
        let console = console();
        console.add_flight(flight("AI202", None, None)).unwrap();
        console
            .storage()
            .insert_passenger(&Passenger::new(1, "Ravi", "Kumar", "AI202"))
            .unwrap();
        console
            .storage()
            .insert_passenger(&Passenger::new(2, "Nila", "Das", "AI202"))
            .unwrap();
        console
            .storage()
            .insert_baggage(&Baggage {
                baggage_id: 1,
                passenger_id: 1,
                flight_no: "AI202".to_string(),
                weight_kg: Some(4.0),
                status: None,
            })
            .unwrap();
        console
    }

    #[test]
    fn test_manifest_orders_flagged_last() {
        let console = board_fixture();
        console
            .update_passenger_status(1, &PassengerStatus::Flagged)
            .unwrap();
        let manifest = console.manifest("AI202").unwrap();
        let ids: Vec<i64> = manifest.iter().map(|p| p.passenger_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_resolve_flag_overweight_removes() {
        let console = board_fixture();
        let outcome = console
            .resolve_flag(1, FlagReason::BaggageOverweight { weight_kg: 4.0 })
            .unwrap();
        assert_eq!(outcome, FlagOutcome::Remove);
        assert_eq!(console.manifest("AI202").unwrap().len(), 1);
        assert!(console.storage().baggage().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_flag_sets_status() {
        let console = board_fixture();
        console
            .resolve_flag(2, FlagReason::BaggageOverweight { weight_kg: 2.0 })
            .unwrap();
        console.resolve_flag(1, FlagReason::Theft).unwrap();

        let manifest = console.manifest("AI202").unwrap();
        assert_eq!(manifest[0].passenger_id, 2);
        assert_eq!(manifest[0].status, PassengerStatus::Normal);
        assert_eq!(manifest[1].status, PassengerStatus::Flagged);

        assert!(console
            .resolve_flag(99, FlagReason::Illness)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_ground_assignments() {
        let console = board_fixture();
        hire(&console, 10, "Medical staff");
        hire(&console, 11, GROUND_ENGINEER);
        console
            .update_passenger_status(2, &PassengerStatus::Illness)
            .unwrap();

        let board = console.ground_board().unwrap();
        assert_eq!(board.ill_passengers.len(), 1);
        assert_eq!(board.medical_staff.len(), 1);

        let medical = console.assign_medical(2, 10).unwrap();
        assert!(medical.id.is_some());
        console.assign_engineer("AI202", 11).unwrap();
        assert!(matches!(
            console.assign_engineer("AI202", 10),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(console.ground_assignments().unwrap().len(), 2);
    }

    #[test]
    fn test_reports_read_store() {
        let console = board_fixture();
        assert_eq!(console.flight_traffic().unwrap().total_flights, 1);
        assert_eq!(console.passenger_traffic().unwrap().total_baggage, 1);
        assert_eq!(console.employee_stats().unwrap().total_employees, 0);
        assert_eq!(console.stats().unwrap().passengers, 2);
    }
}
