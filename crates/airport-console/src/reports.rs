//! Tabular reports computed from snapshots.
//!
//! Reports are plain aggregations; they never touch the store directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Baggage, Employee, Flight, FlightStatus, Passenger, Ticket};

/// How many routes the flight traffic report lists.
pub const TOP_ROUTES: usize = 10;

const UNKNOWN: &str = "Unknown";

/// A route and the number of flights on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCount {
    /// Route label, `src → des`.
    pub route: String,
    /// Flights on this route.
    pub flights: u64,
}

/// Flight traffic report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightTrafficReport {
    /// All scheduled flights.
    pub total_flights: u64,
    /// Flights with status `Arrival`.
    pub arrivals: u64,
    /// Flights with status `Departure`.
    pub departures: u64,
    /// Flights per airline.
    pub airline_breakdown: BTreeMap<String, u64>,
    /// Busiest routes, most flights first. Serialized as a
    /// `{"src → des": flights}` object in that order.
    #[serde(with = "route_map")]
    pub top_routes: Vec<RouteCount>,
}

mod route_map {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    use super::RouteCount;

    pub fn serialize<S: Serializer>(routes: &[RouteCount], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(routes.iter().map(|r| (&r.route, r.flights)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RouteCount>, D::Error> {
        struct RoutesVisitor;

        impl<'de> Visitor<'de> for RoutesVisitor {
            type Value = Vec<RouteCount>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of route labels to flight counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut routes = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((route, flights)) = map.next_entry()? {
                    routes.push(RouteCount { route, flights });
                }
                Ok(routes)
            }
        }

        deserializer.deserialize_map(RoutesVisitor)
    }
}

/// Head count and salary for one job title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStats {
    /// Employees with this title.
    pub count: u64,
    /// Sum of their salaries.
    pub total_salary: i64,
}

/// Employee statistics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStatsReport {
    /// All employees.
    pub total_employees: u64,
    /// Sum of all salaries.
    pub total_salary_expense: i64,
    /// Mean salary over employees that have one.
    pub average_salary: f64,
    /// Per job title.
    pub job_breakdown: BTreeMap<String, JobStats>,
}

/// Baggage weight totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaggageStats {
    /// Total weight in kilograms.
    pub total_weight: f64,
    /// Average weight per bag, rounded to two decimals.
    pub average_weight: f64,
}

/// Passenger traffic report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerTrafficReport {
    /// All passengers.
    pub total_passengers: u64,
    /// All tickets.
    pub total_tickets: u64,
    /// All checked bags.
    pub total_baggage: u64,
    /// Tickets per travel class.
    pub ticket_class_breakdown: BTreeMap<String, u64>,
    /// Baggage weight totals.
    pub baggage_stats: BaggageStats,
}

fn count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

/// Build the flight traffic report.
#[must_use]
pub fn flight_traffic(flights: &[Flight]) -> FlightTrafficReport {
    let with_status =
        |status: FlightStatus| count(flights.iter().filter(|f| f.status == Some(status)).count());

    let mut airline_breakdown = BTreeMap::new();
    let mut routes: BTreeMap<String, u64> = BTreeMap::new();
    for flight in flights {
        let airline = flight.airline_name.as_deref().unwrap_or(UNKNOWN);
        *airline_breakdown.entry(airline.to_string()).or_insert(0) += 1;
        *routes.entry(flight.route_label()).or_insert(0) += 1;
    }

    // BTreeMap iteration is by name, so a stable sort breaks count ties by name.
    let mut top_routes: Vec<RouteCount> = routes
        .into_iter()
        .map(|(route, flights)| RouteCount { route, flights })
        .collect();
    top_routes.sort_by(|a, b| b.flights.cmp(&a.flights));
    top_routes.truncate(TOP_ROUTES);

    FlightTrafficReport {
        total_flights: count(flights.len()),
        arrivals: with_status(FlightStatus::Arrival),
        departures: with_status(FlightStatus::Departure),
        airline_breakdown,
        top_routes,
    }
}

/// Average salary over employees that have a salary on record, 0 when none do.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_salary(employees: &[Employee]) -> f64 {
    let salaries: Vec<i64> = employees.iter().filter_map(|e| e.employee_salary).collect();
    if salaries.is_empty() {
        0.0
    } else {
        salaries.iter().sum::<i64>() as f64 / salaries.len() as f64
    }
}

/// Build the employee statistics report.
#[must_use]
pub fn employee_stats(employees: &[Employee]) -> EmployeeStatsReport {
    let mut job_breakdown: BTreeMap<String, JobStats> = BTreeMap::new();
    for employee in employees {
        let title = employee.job_title.as_deref().unwrap_or(UNKNOWN);
        let stats = job_breakdown.entry(title.to_string()).or_default();
        stats.count += 1;
        stats.total_salary += employee.employee_salary.unwrap_or(0);
    }

    EmployeeStatsReport {
        total_employees: count(employees.len()),
        total_salary_expense: job_breakdown.values().map(|s| s.total_salary).sum(),
        average_salary: average_salary(employees),
        job_breakdown,
    }
}

/// Build the passenger traffic report.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn passenger_traffic(
    passengers: &[Passenger],
    tickets: &[Ticket],
    baggage: &[Baggage],
) -> PassengerTrafficReport {
    let mut ticket_class_breakdown = BTreeMap::new();
    for ticket in tickets {
        let class = ticket.class.as_deref().unwrap_or(UNKNOWN);
        *ticket_class_breakdown.entry(class.to_string()).or_insert(0) += 1;
    }

    let total_weight: f64 = baggage.iter().filter_map(|b| b.weight_kg).sum();
    let average_weight = if baggage.is_empty() {
        0.0
    } else {
        round2(total_weight / baggage.len() as f64)
    };

    PassengerTrafficReport {
        total_passengers: count(passengers.len()),
        total_tickets: count(tickets.len()),
        total_baggage: count(baggage.len()),
        ticket_class_breakdown,
        baggage_stats: BaggageStats {
            total_weight,
            average_weight,
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
