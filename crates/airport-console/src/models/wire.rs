//! Serde adapters for the backend's loosely typed JSON.
//!
//! The browser forms submit every field as a string, so an empty input box
//! arrives as `""` and numeric fields arrive as `"42"`. These adapters accept
//! both shapes and normalize empty strings to `None`.

use chrono::NaiveTime;

/// Wire format for a time of day.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parse a time of day in `HH:MM:SS` (optionally fractional) or `HH:MM` form.
#[must_use]
pub fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .ok()
}

/// `Option<T>` carried as a string; empty strings deserialize to `None`.
pub mod optional {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(de::Error::custom),
        }
    }
}

/// `Option<NaiveTime>` carried as `HH:MM:SS`.
pub mod time_of_day {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => serializer.collect_str(&t.format(super::TIME_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse_time_of_day(s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid time of day: {s}"))),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawInt {
    Int(i64),
    Text(String),
}

/// An `i64` that may arrive as a JSON number or a numeric string.
pub mod lenient_int {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::RawInt;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match RawInt::deserialize(deserializer)? {
            RawInt::Int(n) => Ok(n),
            RawInt::Text(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }
}

/// An `Option<i64>` that may arrive as a number, a numeric string, `""` or `null`.
pub mod lenient_int_opt {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::RawInt;

    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(n) => serializer.serialize_i64(*n),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        match Option::<RawInt>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawInt::Int(n)) => Ok(Some(n)),
            Some(RawInt::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(RawInt::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
        }
    }
}
