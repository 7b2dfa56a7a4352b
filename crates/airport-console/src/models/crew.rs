//! Crew roster records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::wire;

/// Role a crew member plays on a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrewRole {
    /// Flight deck crew.
    #[serde(rename = "Pilot")]
    Pilot,
    /// Cabin crew.
    #[serde(rename = "Flight Attendant")]
    FlightAttendant,
}

impl CrewRole {
    /// The job title an employee holds for this role.
    #[must_use]
    pub fn job_title(self) -> &'static str {
        match self {
            Self::Pilot => "Pilot",
            Self::FlightAttendant => "Flight Attendant",
        }
    }
}

impl fmt::Display for CrewRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.job_title())
    }
}

impl FromStr for CrewRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "pilot" => Ok(Self::Pilot),
            "flightattendant" | "attendant" => Ok(Self::FlightAttendant),
            _ => Err(format!("unknown crew role: {}", s.trim())),
        }
    }
}

/// A crew member and the flight they are currently assigned to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    /// Crew record identifier.
    #[serde(rename = "Crew_ID", with = "wire::lenient_int")]
    pub crew_id: i64,

    /// Role on the flight.
    #[serde(rename = "Crew_role")]
    pub crew_role: CrewRole,

    /// Employee this crew record belongs to.
    #[serde(rename = "Employee_ID", with = "wire::lenient_int")]
    pub employee_id: i64,

    /// Employee display name (joined from the employee record).
    #[serde(rename = "Employee_name", default)]
    pub employee_name: Option<String>,

    /// Assigned flight.
    #[serde(rename = "Flight_no", default, with = "wire::optional")]
    pub flight_no: Option<String>,

    /// Origin city of the assigned flight.
    #[serde(default)]
    pub src_city: Option<String>,

    /// Destination city of the assigned flight.
    #[serde(default)]
    pub des_city: Option<String>,
}

impl CrewMember {
    /// Create an unassigned crew member.
    #[must_use]
    pub fn new(crew_id: i64, employee_id: i64, crew_role: CrewRole) -> Self {
        Self {
            crew_id,
            crew_role,
            employee_id,
            employee_name: None,
            flight_no: None,
            src_city: None,
            des_city: None,
        }
    }

    /// The flight this member is assigned to.
    ///
    /// Legacy rows carry the literal string `NULL` for "no flight"; that is
    /// treated the same as a missing value.
    #[must_use]
    pub fn assigned_flight(&self) -> Option<&str> {
        match self.flight_no.as_deref().map(str::trim) {
            None | Some("" | "NULL") => None,
            Some(no) => Some(no),
        }
    }

    /// Whether the member is free to be assigned.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.assigned_flight().is_none()
    }
}
