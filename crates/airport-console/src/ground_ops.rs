//! Ground-operations board.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{
    wire, Employee, Flight, FlightStatus, Passenger, PassengerStatus, StaffMember,
};

/// An ill passenger with the route of their flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllPassenger {
    /// Passenger identifier.
    #[serde(rename = "Passenger_ID")]
    pub passenger_id: i64,
    /// Display name.
    #[serde(rename = "Passenger_name")]
    pub passenger_name: Option<String>,
    /// Status (always `Illness`).
    #[serde(rename = "Passenger_status")]
    pub status: PassengerStatus,
    /// Flight number.
    #[serde(rename = "Flight_no")]
    pub flight_no: String,
    /// Origin city.
    pub src_city: Option<String>,
    /// Destination city.
    pub des_city: Option<String>,
}

/// An arriving flight awaiting ground service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalFlight {
    /// Flight number.
    #[serde(rename = "Flight_no")]
    pub flight_no: String,
    /// Origin city.
    pub src_city: Option<String>,
    /// Destination city.
    pub des_city: Option<String>,
    /// Operating airline.
    #[serde(rename = "Airline_name")]
    pub airline_name: Option<String>,
    /// Scheduled time.
    #[serde(default, with = "wire::time_of_day")]
    pub arrival_time: Option<NaiveTime>,
}

/// Everything the ground-operations screen shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundBoard {
    /// Staff who can attend ill passengers.
    pub medical_staff: Vec<StaffMember>,
    /// Staff who can service arriving flights.
    pub ground_engineers: Vec<StaffMember>,
    /// Passengers reported ill.
    pub ill_passengers: Vec<IllPassenger>,
    /// Flights arriving at this airport.
    pub arrival_flights: Vec<ArrivalFlight>,
}

/// Assemble the board from employee, passenger and flight snapshots.
///
/// Ill passengers whose flight is not on the snapshot are left out.
#[must_use]
pub fn board(employees: &[Employee], passengers: &[Passenger], flights: &[Flight]) -> GroundBoard {
    let medical_staff = employees
        .iter()
        .filter(|e| e.is_medical_staff())
        .map(StaffMember::from)
        .collect();
    let ground_engineers = employees
        .iter()
        .filter(|e| e.is_ground_engineer())
        .map(StaffMember::from)
        .collect();

    let ill_passengers = passengers
        .iter()
        .filter(|p| p.status == PassengerStatus::Illness)
        .filter_map(|p| {
            let flight = flights.iter().find(|f| f.flight_no == p.flight_no)?;
            Some(IllPassenger {
                passenger_id: p.passenger_id,
                passenger_name: p.passenger_name.clone(),
                status: p.status.clone(),
                flight_no: p.flight_no.clone(),
                src_city: flight.src_city.clone(),
                des_city: flight.des_city.clone(),
            })
        })
        .collect();

    let arrival_flights = flights
        .iter()
        .filter(|f| f.status == Some(FlightStatus::Arrival))
        .map(|f| ArrivalFlight {
            flight_no: f.flight_no.clone(),
            src_city: f.src_city.clone(),
            des_city: f.des_city.clone(),
            airline_name: f.airline_name.clone(),
            arrival_time: f.arrival_time,
        })
        .collect();

    GroundBoard {
        medical_staff,
        ground_engineers,
        ill_passengers,
        arrival_flights,
    }
}

/// Check that `employee_id` is medical staff and `passenger_id` exists.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for an unknown passenger or employee and
/// [`Error::InvalidInput`] when the employee is not medical staff.
pub fn check_medical(
    employees: &[Employee],
    passengers: &[Passenger],
    passenger_id: i64,
    employee_id: i64,
) -> Result<()> {
    if !passengers.iter().any(|p| p.passenger_id == passenger_id) {
        return Err(Error::not_found("passenger", passenger_id));
    }
    let employee = find_employee(employees, employee_id)?;
    if !employee.is_medical_staff() {
        return Err(Error::invalid_input(format!(
            "employee {employee_id} is not medical staff"
        )));
    }
    Ok(())
}

/// Check that `employee_id` is a ground engineer and `flight_no` exists.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for an unknown flight or employee and
/// [`Error::InvalidInput`] when the employee is not a ground engineer.
pub fn check_engineer(
    employees: &[Employee],
    flights: &[Flight],
    flight_no: &str,
    employee_id: i64,
) -> Result<()> {
    if !flights.iter().any(|f| f.flight_no == flight_no) {
        return Err(Error::not_found("flight", flight_no));
    }
    let employee = find_employee(employees, employee_id)?;
    if !employee.is_ground_engineer() {
        return Err(Error::invalid_input(format!(
            "employee {employee_id} is not a ground engineer"
        )));
    }
    Ok(())
}

fn find_employee(employees: &[Employee], employee_id: i64) -> Result<&Employee> {
    employees
        .iter()
        .find(|e| e.employee_id == employee_id)
        .ok_or_else(|| Error::not_found("employee", employee_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GROUND_ENGINEER;

    fn staff(id: i64, title: &str) -> Employee {
        let mut employee = Employee::new(id, "S", "T", "BLR");
        employee.job_title = Some(title.to_string());
        employee
    }

    fn fixtures() -> (Vec<Employee>, Vec<Passenger>, Vec<Flight>) {
        let employees = vec![
            staff(1, "Medical staff"),
            staff(2, "Medical staffs"),
            staff(3, GROUND_ENGINEER),
            staff(4, "Pilot"),
        ];

        let mut arriving = Flight::new("AI202", "BLR", 1);
        arriving.status = Some(FlightStatus::Arrival);
        arriving.src_city = Some("Delhi".to_string());
        arriving.des_city = Some("Bengaluru".to_string());
        let mut leaving = Flight::new("6E100", "BLR", 2);
        leaving.status = Some(FlightStatus::Departure);

        let mut ill = Passenger::new(10, "I", "L", "AI202");
        ill.status = PassengerStatus::Illness;
        let flagged = {
            let mut p = Passenger::new(11, "F", "G", "AI202");
            p.status = PassengerStatus::Flagged;
            p
        };
        let mut orphan = Passenger::new(12, "O", "P", "ZZ999");
        orphan.status = PassengerStatus::Illness;

        (employees, vec![ill, flagged, orphan], vec![arriving, leaving])
    }

    #[test]
    fn test_board_groups() {
        let (employees, passengers, flights) = fixtures();
        let board = board(&employees, &passengers, &flights);

        assert_eq!(board.medical_staff.len(), 2);
        assert_eq!(board.ground_engineers.len(), 1);
        assert_eq!(board.ill_passengers.len(), 1);
        assert_eq!(board.ill_passengers[0].src_city.as_deref(), Some("Delhi"));
        assert_eq!(board.arrival_flights.len(), 1);
        assert_eq!(board.arrival_flights[0].flight_no, "AI202");
    }

    #[test]
    fn test_check_medical() {
        let (employees, passengers, _) = fixtures();
        assert!(check_medical(&employees, &passengers, 10, 1).is_ok());
        assert!(check_medical(&employees, &passengers, 99, 1)
            .unwrap_err()
            .is_not_found());
        assert!(matches!(
            check_medical(&employees, &passengers, 10, 3),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_check_engineer() {
        let (employees, _, flights) = fixtures();
        assert!(check_engineer(&employees, &flights, "AI202", 3).is_ok());
        assert!(check_engineer(&employees, &flights, "XX1", 3)
            .unwrap_err()
            .is_not_found());
        assert!(check_engineer(&employees, &flights, "AI202", 42)
            .unwrap_err()
            .is_not_found());
        assert!(matches!(
            check_engineer(&employees, &flights, "AI202", 4),
            Err(Error::InvalidInput(_))
        ));
    }
}
