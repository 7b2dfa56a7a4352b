//! `SQLite` schema for the airport store.
//!
//! Column names follow the JSON field names used by the console, so rows map
//! one-to-one onto the records in [`crate::models`].

/// Staff of every kind, crew included.
pub const CREATE_EMPLOYEES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS employees (
    Employee_ID INTEGER PRIMARY KEY,
    F_Name TEXT NOT NULL,
    M_Initial TEXT,
    L_Name TEXT NOT NULL,
    Employee_name TEXT,
    Hire_date TEXT,
    Employee_Salary INTEGER,
    Job_title TEXT,
    Airport_ID TEXT NOT NULL
)
";

/// Scheduled flights.
pub const CREATE_FLIGHTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS flights (
    Flight_no TEXT PRIMARY KEY,
    Airline_name TEXT,
    Flight_status TEXT,
    arrival_time TEXT,
    Airport_ID TEXT NOT NULL,
    Airline_ID INTEGER NOT NULL,
    Gate_no TEXT,
    Terminal INTEGER,
    src_city TEXT,
    des_city TEXT
)
";

/// Crew roster. An employee holds at most one crew record; deleting the
/// flight leaves the crew member unassigned.
pub const CREATE_CREW_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS crew (
    Crew_ID INTEGER PRIMARY KEY,
    Crew_role TEXT NOT NULL,
    Employee_ID INTEGER NOT NULL UNIQUE
        REFERENCES employees(Employee_ID) ON DELETE CASCADE,
    Flight_no TEXT REFERENCES flights(Flight_no) ON DELETE SET NULL
)
";

/// Passengers booked on a flight. A flight with passengers cannot be deleted.
pub const CREATE_PASSENGERS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS passengers (
    Passenger_ID INTEGER PRIMARY KEY,
    F_Name TEXT NOT NULL,
    M_Name TEXT,
    L_Name TEXT NOT NULL,
    Passenger_name TEXT,
    DOB TEXT,
    Passenger_Address TEXT,
    Flight_no TEXT NOT NULL REFERENCES flights(Flight_no),
    Passenger_status TEXT NOT NULL DEFAULT 'Normal'
)
";

/// Tickets, removed with their passenger.
pub const CREATE_TICKETS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS tickets (
    Ticket_no TEXT PRIMARY KEY,
    Flight_no TEXT NOT NULL,
    Passenger_ID INTEGER NOT NULL
        REFERENCES passengers(Passenger_ID) ON DELETE CASCADE,
    Price REAL,
    Seat_No TEXT,
    Booking_date TEXT,
    Class TEXT
)
";

/// Checked baggage, removed with its passenger.
pub const CREATE_BAGGAGE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS baggage (
    Baggage_ID INTEGER PRIMARY KEY,
    Passenger_ID INTEGER NOT NULL
        REFERENCES passengers(Passenger_ID) ON DELETE CASCADE,
    Flight_no TEXT NOT NULL,
    Baggage_weight REAL,
    Baggage_status TEXT
)
";

/// Gate lookups by the scheduler.
pub const CREATE_GATE_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_flights_gate ON flights(Gate_no)
";

/// Roster lookups by flight.
pub const CREATE_CREW_FLIGHT_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_crew_flight ON crew(Flight_no)
";

/// Manifest lookups by flight.
pub const CREATE_PASSENGER_FLIGHT_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_passengers_flight ON passengers(Flight_no)
";

/// Key-value pairs such as the schema version.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// Ground staff dispatched to passengers and flights. Added in schema v2.
pub const CREATE_GROUND_ASSIGNMENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS ground_assignments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    kind TEXT NOT NULL,
    employee_id INTEGER NOT NULL
        REFERENCES employees(Employee_ID) ON DELETE CASCADE,
    passenger_id INTEGER
        REFERENCES passengers(Passenger_ID) ON DELETE CASCADE,
    flight_no TEXT
        REFERENCES flights(Flight_no) ON DELETE CASCADE,
    assigned_at TEXT NOT NULL
)
";

/// Base (v1) schema statements in creation order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_EMPLOYEES_TABLE,
    CREATE_FLIGHTS_TABLE,
    CREATE_CREW_TABLE,
    CREATE_PASSENGERS_TABLE,
    CREATE_TICKETS_TABLE,
    CREATE_BAGGAGE_TABLE,
    CREATE_GATE_INDEX,
    CREATE_CREW_FLIGHT_INDEX,
    CREATE_PASSENGER_FLIGHT_INDEX,
    CREATE_METADATA_TABLE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements_not_empty() {
        assert!(!SCHEMA_STATEMENTS.is_empty());
        for stmt in SCHEMA_STATEMENTS {
            assert!(!stmt.trim().is_empty());
        }
    }

    #[test]
    fn test_crew_table_constraints() {
        assert!(CREATE_CREW_TABLE.contains("Employee_ID INTEGER NOT NULL UNIQUE"));
        assert!(CREATE_CREW_TABLE.contains("ON DELETE SET NULL"));
    }

    #[test]
    fn test_parent_tables_created_before_children() {
        let position = |stmt: &str| SCHEMA_STATEMENTS.iter().position(|s| *s == stmt);
        assert!(position(CREATE_FLIGHTS_TABLE) < position(CREATE_CREW_TABLE));
        assert!(position(CREATE_PASSENGERS_TABLE) < position(CREATE_BAGGAGE_TABLE));
    }

    #[test]
    fn test_ground_assignments_not_in_base_schema() {
        assert!(!SCHEMA_STATEMENTS.contains(&CREATE_GROUND_ASSIGNMENTS_TABLE));
    }
}
