//! Flight schedule records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::wire;

/// Whether a flight is arriving at or departing from this airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    /// Inbound flight.
    Arrival,
    /// Outbound flight.
    Departure,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrival => write!(f, "Arrival"),
            Self::Departure => write!(f, "Departure"),
        }
    }
}

impl FromStr for FlightStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrival" => Ok(Self::Arrival),
            "departure" => Ok(Self::Departure),
            other => Err(format!("unknown flight status: {other}")),
        }
    }
}

/// A scheduled flight.
///
/// `arrival_time` is the scheduled time of day used for gate planning; it has
/// no date component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight number, e.g. `6E100`.
    #[serde(rename = "Flight_no")]
    pub flight_no: String,

    /// Operating airline.
    #[serde(rename = "Airline_name", default, with = "wire::optional")]
    pub airline_name: Option<String>,

    /// Arrival or departure.
    #[serde(rename = "Flight_status", default, with = "wire::optional")]
    pub status: Option<FlightStatus>,

    /// Scheduled time of day.
    #[serde(default, with = "wire::time_of_day")]
    pub arrival_time: Option<NaiveTime>,

    /// Airport code this flight belongs to.
    #[serde(rename = "Airport_ID")]
    pub airport_id: String,

    /// Numeric airline identifier.
    #[serde(rename = "Airline_ID", with = "wire::lenient_int")]
    pub airline_id: i64,

    /// Gate identifier, e.g. `G01`.
    #[serde(rename = "Gate_no", default, with = "wire::optional")]
    pub gate_no: Option<String>,

    /// Terminal number.
    #[serde(rename = "Terminal", default, with = "wire::lenient_int_opt")]
    pub terminal: Option<i64>,

    /// Origin city.
    #[serde(default, with = "wire::optional")]
    pub src_city: Option<String>,

    /// Destination city.
    #[serde(default, with = "wire::optional")]
    pub des_city: Option<String>,
}

impl Flight {
    /// Create a flight with only the required fields set.
    #[must_use]
    pub fn new(flight_no: impl Into<String>, airport_id: impl Into<String>, airline_id: i64) -> Self {
        Self {
            flight_no: flight_no.into(),
            airline_name: None,
            status: None,
            arrival_time: None,
            airport_id: airport_id.into(),
            airline_id,
            gate_no: None,
            terminal: None,
            src_city: None,
            des_city: None,
        }
    }

    /// Route label in `src → des` form.
    #[must_use]
    pub fn route_label(&self) -> String {
        format!(
            "{} → {}",
            self.src_city.as_deref().unwrap_or("Unknown"),
            self.des_city.as_deref().unwrap_or("Unknown")
        )
    }
}

/// The slim flight listing used by selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRoute {
    /// Flight number.
    #[serde(rename = "Flight_no")]
    pub flight_no: String,
    /// Origin city.
    pub src_city: Option<String>,
    /// Destination city.
    pub des_city: Option<String>,
}

impl From<&Flight> for FlightRoute {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_no: flight.flight_no.clone(),
            src_city: flight.src_city.clone(),
            des_city: flight.des_city.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_status_parse() {
        assert_eq!("Arrival".parse::<FlightStatus>(), Ok(FlightStatus::Arrival));
        assert_eq!("departure".parse::<FlightStatus>(), Ok(FlightStatus::Departure));
        assert!("Cancelled".parse::<FlightStatus>().is_err());
    }

    #[test]
    fn test_flight_deserialize_from_form() {
        let json = r#"{
            "Flight_no": "6E100",
            "Airline_name": "IndiGo",
            "Flight_status": "Departure",
            "arrival_time": "10:00",
            "Airport_ID": "BLR",
            "Airline_ID": "3",
            "Gate_no": "G01",
            "Terminal": "1",
            "src_city": "Bengaluru",
            "des_city": "Delhi"
        }"#;
        let flight: Flight = serde_json::from_str(json).unwrap();
        assert_eq!(flight.flight_no, "6E100");
        assert_eq!(flight.status, Some(FlightStatus::Departure));
        assert_eq!(flight.arrival_time, NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(flight.airline_id, 3);
        assert_eq!(flight.terminal, Some(1));
    }

    #[test]
    fn test_flight_serialize_wire_names() {
        let mut flight = Flight::new("AI202", "BLR", 1);
        flight.arrival_time = NaiveTime::from_hms_opt(7, 45, 0);
        let value = serde_json::to_value(&flight).unwrap();
        assert_eq!(value["Flight_no"], "AI202");
        assert_eq!(value["arrival_time"], "07:45:00");
        assert!(value["Gate_no"].is_null());
    }

    #[test]
    fn test_route_label() {
        let mut flight = Flight::new("AI202", "BLR", 1);
        flight.src_city = Some("Bengaluru".to_string());
        assert_eq!(flight.route_label(), "Bengaluru → Unknown");
        flight.des_city = Some("Mumbai".to_string());
        assert_eq!(flight.route_label(), "Bengaluru → Mumbai");
    }

    #[test]
    fn test_flight_route_from_flight() {
        let mut flight = Flight::new("AI202", "BLR", 1);
        flight.des_city = Some("Chennai".to_string());
        let route = FlightRoute::from(&flight);
        assert_eq!(route.flight_no, "AI202");
        assert_eq!(route.des_city.as_deref(), Some("Chennai"));
    }
}
