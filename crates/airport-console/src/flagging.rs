//! Resolution of flagged passengers.
//!
//! An agent picks a reason for a flag and the console turns it into either a
//! status change or removal of the passenger from the flight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::PassengerStatus;

/// Baggage heavier than this (in kilograms) gets the passenger removed.
pub const BAGGAGE_LIMIT_KG: f64 = 3.0;

/// Reason selected when resolving a flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FlagReason {
    /// Bag weighed at the counter.
    BaggageOverweight {
        /// Measured weight in kilograms.
        weight_kg: f64,
    },
    /// Passenger reported ill.
    Illness,
    /// Suspected theft.
    Theft,
}

impl FlagReason {
    /// Build a reason from its name and an optional weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the reason is empty or unknown, or
    /// when `baggage_overweight` is given without a usable weight.
    pub fn parse(reason: &str, weight_kg: Option<f64>) -> Result<Self> {
        match reason.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "" => Err(Error::invalid_input("Please select a reason")),
            "baggage_overweight" | "overweight" => match weight_kg {
                Some(weight_kg) if weight_kg.is_finite() && weight_kg >= 0.0 => {
                    Ok(Self::BaggageOverweight { weight_kg })
                }
                Some(_) => Err(Error::invalid_input("baggage weight must be a non-negative number")),
                None => Err(Error::invalid_input("Please enter baggage weight")),
            },
            "illness" => Ok(Self::Illness),
            "theft" => Ok(Self::Theft),
            other => Err(Error::invalid_input(format!("unknown flag reason: {other}"))),
        }
    }
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaggageOverweight { weight_kg } => write!(f, "baggage overweight ({weight_kg} kg)"),
            Self::Illness => f.write_str("illness"),
            Self::Theft => f.write_str("theft"),
        }
    }
}

impl FromStr for FlagReason {
    type Err = Error;

    /// Parses reasons that need no extra data; use [`FlagReason::parse`] for
    /// baggage checks.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

/// What happens to the passenger once the flag is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FlagOutcome {
    /// Passenger is taken off the flight.
    Remove,
    /// Passenger's status is set.
    SetStatus {
        /// The new status.
        status: PassengerStatus,
    },
}

/// Decide the outcome for a flag reason.
///
/// Baggage strictly over [`BAGGAGE_LIMIT_KG`] removes the passenger; lighter
/// baggage clears the flag. Illness and theft keep the passenger flagged.
#[must_use]
pub fn resolve(reason: FlagReason) -> FlagOutcome {
    match reason {
        FlagReason::BaggageOverweight { weight_kg } if weight_kg > BAGGAGE_LIMIT_KG => {
            FlagOutcome::Remove
        }
        FlagReason::BaggageOverweight { .. } => FlagOutcome::SetStatus {
            status: PassengerStatus::Normal,
        },
        FlagReason::Illness | FlagReason::Theft => FlagOutcome::SetStatus {
            status: PassengerStatus::Flagged,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overweight_removes_passenger() {
        let reason = FlagReason::BaggageOverweight { weight_kg: 3.5 };
        assert_eq!(resolve(reason), FlagOutcome::Remove);
    }

    #[test]
    fn test_limit_weight_clears_flag() {
        let reason = FlagReason::BaggageOverweight { weight_kg: 3.0 };
        assert_eq!(
            resolve(reason),
            FlagOutcome::SetStatus {
                status: PassengerStatus::Normal
            }
        );
    }

    #[test]
    fn test_illness_and_theft_stay_flagged() {
        for reason in [FlagReason::Illness, FlagReason::Theft] {
            assert_eq!(
                resolve(reason),
                FlagOutcome::SetStatus {
                    status: PassengerStatus::Flagged
                }
            );
        }
    }

    #[test]
    fn test_parse_requires_weight_for_baggage() {
        let err = FlagReason::parse("baggage_overweight", None).unwrap_err();
        assert!(err.to_string().contains("baggage weight"));

        let reason = FlagReason::parse("Baggage Overweight", Some(2.0)).unwrap();
        assert_eq!(reason, FlagReason::BaggageOverweight { weight_kg: 2.0 });

        assert!(FlagReason::parse("overweight", Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_parse_rejects_empty_and_unknown() {
        let err = FlagReason::parse("  ", None).unwrap_err();
        assert!(err.to_string().contains("Please select a reason"));
        assert!("vandalism".parse::<FlagReason>().is_err());
        assert_eq!("theft".parse::<FlagReason>().unwrap(), FlagReason::Theft);
    }

    #[test]
    fn test_reason_wire_format() {
        let reason: FlagReason =
            serde_json::from_str(r#"{"reason": "baggage_overweight", "weight_kg": 4.2}"#).unwrap();
        assert_eq!(reason, FlagReason::BaggageOverweight { weight_kg: 4.2 });

        let reason: FlagReason = serde_json::from_str(r#"{"reason": "illness"}"#).unwrap();
        assert_eq!(reason, FlagReason::Illness);
    }
}
