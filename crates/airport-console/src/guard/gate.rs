//! Gate scheduling guard.

use chrono::{Duration, NaiveTime};

use crate::models::Flight;

/// Minimum separation between two flights on the same gate, in minutes.
pub const MIN_GATE_GAP_MINUTES: i64 = 30;

/// Decide whether `gate` can take a flight at `time`.
///
/// A booking is rejected when any flight already on the snapshot uses the
/// same gate at a time strictly less than [`MIN_GATE_GAP_MINUTES`] away.
/// Times are compared on a 24-hour clock without wrapping at midnight, so
/// 23:50 and 00:05 count as almost a day apart.
///
/// A missing or empty gate, or a missing time, is accepted without checking.
/// Existing flights without a scheduled time never conflict.
#[must_use]
pub fn is_gate_available(existing: &[Flight], gate: Option<&str>, time: Option<NaiveTime>) -> bool {
    let (Some(gate), Some(time)) = (gate.filter(|g| !g.is_empty()), time) else {
        return true;
    };

    find_conflict(existing, gate, time).is_none()
}

/// The first flight on `gate` that is too close to `time`, if any.
#[must_use]
pub fn find_conflict<'a>(existing: &'a [Flight], gate: &str, time: NaiveTime) -> Option<&'a Flight> {
    let min_gap = Duration::minutes(MIN_GATE_GAP_MINUTES);

    existing
        .iter()
        .filter(|flight| flight.gate_no.as_deref() == Some(gate))
        .find(|flight| {
            flight
                .arrival_time
                .is_some_and(|scheduled| gap_between(scheduled, time) < min_gap)
        })
}

fn gap_between(a: NaiveTime, b: NaiveTime) -> Duration {
    if a >= b {
        a - b
    } else {
        b - a
    }
}
