//! Domain records for airport-console.
//!
//! Field names on the wire follow the backend's JSON (`Flight_no`,
//! `Gate_no`, `Crew_role`, ...), so these types can be exchanged directly
//! with a browser front-end.

mod crew;
mod employee;
mod flight;
mod ground;
mod passenger;
pub(crate) mod wire;

use serde::{Deserialize, Serialize};

pub use crew::{CrewMember, CrewRole};
pub use employee::{Employee, StaffMember, GROUND_ENGINEER, HEAD_OF_STAFF, MEDICAL_STAFF, SECURITY};
pub use flight::{Flight, FlightRoute, FlightStatus};
pub use ground::{GroundAssignment, GroundTaskKind};
pub use passenger::{Baggage, Passenger, PassengerStatus, PassengerSummary, Ticket};
pub use wire::parse_time_of_day;

/// A full set of records, used to seed or export a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Employees.
    pub employees: Vec<Employee>,
    /// Flights.
    pub flights: Vec<Flight>,
    /// Crew records.
    pub crew: Vec<CrewMember>,
    /// Passengers.
    pub passengers: Vec<Passenger>,
    /// Tickets.
    pub tickets: Vec<Ticket>,
    /// Baggage.
    pub baggage: Vec<Baggage>,
}
