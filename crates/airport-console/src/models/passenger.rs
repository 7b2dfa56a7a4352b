//! Passenger, ticket and baggage records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::wire;

/// Passenger handling status.
///
/// Statuses other than the known ones are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PassengerStatus {
    /// No outstanding issue.
    #[default]
    Normal,
    /// Flagged for attention.
    Flagged,
    /// Reported ill; surfaces on the ground-operations board.
    Illness,
    /// Any other status string.
    Other(String),
}

impl PassengerStatus {
    /// Whether the passenger is in the normal group.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl fmt::Display for PassengerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Normal"),
            Self::Flagged => f.write_str("Flagged"),
            Self::Illness => f.write_str("Illness"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PassengerStatus {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "normal" => Self::Normal,
            "flagged" => Self::Flagged,
            "illness" => Self::Illness,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for PassengerStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<PassengerStatus> for String {
    fn from(status: PassengerStatus) -> Self {
        status.to_string()
    }
}

impl FromStr for PassengerStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A passenger booked on a flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Passenger identifier.
    #[serde(rename = "Passenger_ID", with = "wire::lenient_int")]
    pub passenger_id: i64,

    /// First name.
    #[serde(rename = "F_Name")]
    pub f_name: String,

    /// Middle name.
    #[serde(rename = "M_Name", default, with = "wire::optional")]
    pub m_name: Option<String>,

    /// Last name.
    #[serde(rename = "L_Name")]
    pub l_name: String,

    /// Display name.
    #[serde(rename = "Passenger_name", default, with = "wire::optional")]
    pub passenger_name: Option<String>,

    /// Date of birth.
    #[serde(rename = "DOB", default, with = "wire::optional")]
    pub dob: Option<NaiveDate>,

    /// Postal address.
    #[serde(rename = "Passenger_Address", default, with = "wire::optional")]
    pub passenger_address: Option<String>,

    /// Flight the passenger is booked on.
    #[serde(rename = "Flight_no")]
    pub flight_no: String,

    /// Handling status.
    #[serde(rename = "Passenger_status", default)]
    pub status: PassengerStatus,
}

impl Passenger {
    /// Create a passenger with only the required fields set.
    #[must_use]
    pub fn new(
        passenger_id: i64,
        f_name: impl Into<String>,
        l_name: impl Into<String>,
        flight_no: impl Into<String>,
    ) -> Self {
        Self {
            passenger_id,
            f_name: f_name.into(),
            m_name: None,
            l_name: l_name.into(),
            passenger_name: None,
            dob: None,
            passenger_address: None,
            flight_no: flight_no.into(),
            status: PassengerStatus::Normal,
        }
    }

    /// Display name, falling back to first and last name.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.passenger_name
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.f_name, self.l_name))
    }
}

/// A ticket issued to a passenger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket number.
    #[serde(rename = "Ticket_no")]
    pub ticket_no: String,
    /// Flight the ticket is for.
    #[serde(rename = "Flight_no")]
    pub flight_no: String,
    /// Ticket holder.
    #[serde(rename = "Passenger_ID", with = "wire::lenient_int")]
    pub passenger_id: i64,
    /// Fare paid.
    #[serde(rename = "Price", default)]
    pub price: Option<f64>,
    /// Seat assignment.
    #[serde(rename = "Seat_No", default, with = "wire::optional")]
    pub seat_no: Option<String>,
    /// Date of booking.
    #[serde(rename = "Booking_date", default, with = "wire::optional")]
    pub booking_date: Option<NaiveDate>,
    /// Travel class, e.g. `Economy`.
    #[serde(rename = "Class", default, with = "wire::optional")]
    pub class: Option<String>,
}

/// A checked bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baggage {
    /// Baggage identifier.
    #[serde(rename = "Baggage_ID", with = "wire::lenient_int")]
    pub baggage_id: i64,
    /// Owner.
    #[serde(rename = "Passenger_ID", with = "wire::lenient_int")]
    pub passenger_id: i64,
    /// Flight the bag travels on.
    #[serde(rename = "Flight_no")]
    pub flight_no: String,
    /// Weight in kilograms.
    #[serde(rename = "Baggage_weight", alias = "Baggae_weight", default)]
    pub weight_kg: Option<f64>,
    /// Handling status.
    #[serde(rename = "Baggage_status", default, with = "wire::optional")]
    pub status: Option<String>,
}

/// One row of a flight's passenger manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerSummary {
    /// Passenger identifier.
    #[serde(rename = "Passenger_ID")]
    pub passenger_id: i64,
    /// Display name.
    #[serde(rename = "Passenger_name")]
    pub passenger_name: Option<String>,
    /// Handling status.
    #[serde(rename = "Passenger_status")]
    pub status: PassengerStatus,
    /// Weight of the passenger's first bag.
    pub baggage_weight: Option<f64>,
    /// Identifier of the passenger's first bag.
    pub baggage_id: Option<i64>,
    /// The passenger's first ticket number.
    pub ticket_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_status_parse() {
        assert_eq!(PassengerStatus::from("normal"), PassengerStatus::Normal);
        assert_eq!(PassengerStatus::from("NORMAL"), PassengerStatus::Normal);
        assert_eq!(PassengerStatus::from(""), PassengerStatus::Normal);
        assert_eq!(PassengerStatus::from("Illness"), PassengerStatus::Illness);
        assert_eq!(
            PassengerStatus::from("Theft suspected"),
            PassengerStatus::Other("Theft suspected".to_string())
        );
    }

    #[test]
    fn test_passenger_status_round_trips_unknown_text() {
        let status = PassengerStatus::from("Overweight bag");
        assert_eq!(status.to_string(), "Overweight bag");
        assert!(!status.is_normal());
    }

    #[test]
    fn test_missing_status_defaults_to_normal() {
        let json = r#"{"Passenger_ID": 1, "F_Name": "Kiran", "L_Name": "Shah", "Flight_no": "AI202"}"#;
        let passenger: Passenger = serde_json::from_str(json).unwrap();
        assert!(passenger.status.is_normal());
        assert_eq!(passenger.display_name(), "Kiran Shah");
    }

    #[test]
    fn test_baggage_accepts_legacy_weight_field() {
        let json = r#"{"Baggage_ID": 9, "Passenger_ID": 1, "Flight_no": "AI202", "Baggae_weight": 2.5}"#;
        let bag: Baggage = serde_json::from_str(json).unwrap();
        assert_eq!(bag.weight_kg, Some(2.5));
    }
}
