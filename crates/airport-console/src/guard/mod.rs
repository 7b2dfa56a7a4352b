//! Validation guards run before a mutation is submitted.
//!
//! Both guards are pure functions over a snapshot the caller already holds:
//!
//! - **Gate scheduling**: a gate cannot take two flights less than 30 minutes
//!   apart.
//! - **Crew roster**: a flight holds at most 2 pilots and 3 flight attendants.
//!
//! # Example
//!
//! ```
//! use airport_console::guard::{is_gate_available, validate_assignment, RosterRejection};
//! use airport_console::models::{CrewMember, CrewRole, Flight};
//! use chrono::NaiveTime;
//!
//! let mut booked = Flight::new("6E100", "BLR", 1);
//! booked.gate_no = Some("G01".to_string());
//! booked.arrival_time = NaiveTime::from_hms_opt(10, 0, 0);
//!
//! let ten_twenty_nine = NaiveTime::from_hms_opt(10, 29, 0);
//! assert!(!is_gate_available(&[booked], Some("G01"), ten_twenty_nine));
//!
//! let mut pilots = vec![
//!     CrewMember::new(1, 11, CrewRole::Pilot),
//!     CrewMember::new(2, 12, CrewRole::Pilot),
//! ];
//! for pilot in &mut pilots {
//!     pilot.flight_no = Some("6E100".to_string());
//! }
//! assert_eq!(
//!     validate_assignment(&pilots, "6E100", CrewRole::Pilot),
//!     Err(RosterRejection::PilotCeilingReached)
//! );
//! ```

mod crew;
mod gate;

pub use crew::{validate_assignment, RosterCounts, RosterRejection, MAX_ATTENDANTS, MAX_PILOTS};
pub use gate::{find_conflict, is_gate_available, MIN_GATE_GAP_MINUTES};
